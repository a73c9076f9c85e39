//! The runner-environment port.
//!
//! Nearly every input to the bootstrap is an environment variable. Reading them
//! through [`Environment`] rather than `std::env` lets tests run in parallel
//! against [`crate::fakes::MemoryEnvironment`] without mutating process state.

/// Variables set by the Actions runner and read by the bootstrap.
pub mod vars {
    /// Event-kind discriminator.
    pub const GITHUB_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
    /// Path to the JSON event payload file.
    pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
    /// Canonical token variable; also the name the token is republished under.
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
    /// Preferred owner source. Set for forks; absent on older runners.
    pub const GITHUB_REPOSITORY_OWNER: &str = "GITHUB_REPOSITORY_OWNER";
    /// Fallback owner source.
    pub const GITHUB_ACTOR: &str = "GITHUB_ACTOR";
    /// `owner/name` of the repository the workflow runs in.
    pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
    /// Log verbosity read by the labeling engine.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// `json` switches the bootstrap's own log lines to JSON.
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Action input names (the keys of the workflow `with:` block).
pub mod inputs {
    /// Deprecated token input.
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
    /// Optional path to the labeler rules file.
    pub const CONFIG_PATH: &str = "config_path";
}

/// Read/write access to process-scoped environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value` for the remainder of the process.
    fn set_var(&self, key: &str, value: &str);

    /// Returns the value of `key`, treating an unset variable as empty.
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }

    /// Returns the value of the action input `name`, trimmed.
    ///
    /// Returns an empty string when the input was not supplied.
    fn input(&self, name: &str) -> String {
        self.var(&input_var_name(name))
            .map(|v| v.trim().to_owned())
            .unwrap_or_default()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }
}

/// Maps an action input name to the variable the runner exposes it under.
///
/// `config_path` becomes `INPUT_CONFIG_PATH`; spaces become underscores.
pub fn input_var_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
