//! Token resolution.
//!
//! The token used to arrive as the `GITHUB_TOKEN` action input, which
//! the runner exposes as `INPUT_GITHUB_TOKEN`. That path is deprecated in
//! favour of the workflow setting `GITHUB_TOKEN` in `env:` directly; it keeps
//! working, with a warning, until the next major version.
//!
//! Whichever source supplies it, the token is republished as `GITHUB_TOKEN`
//! because that is the only name the labeling engine reads.

use crate::environment::{inputs, vars, Environment};
use crate::{ActionError, ActionOutput, GitHubToken, TokenSource};

/// Warning shown when the token arrives through the deprecated action input.
pub const DEPRECATED_TOKEN_INPUT_WARNING: &str = "The GITHUB_TOKEN input is deprecated and will be removed in v3. Pass it via env instead. See docs for details.";

/// Log level handed to the engine when the workflow does not choose one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// A token together with where it was found.
#[derive(Debug, Clone)]
pub struct ResolvedCredential {
    pub token: GitHubToken,
    pub source: TokenSource,
}

/// Resolves the token and republishes it for the labeling engine.
///
/// On success `GITHUB_TOKEN` holds the token and `LOG_LEVEL` is set to
/// [`DEFAULT_LOG_LEVEL`] unless the workflow already set it to a non-empty
/// value.
pub fn resolve_credential(
    env: &impl Environment,
    output: &impl ActionOutput,
) -> Result<ResolvedCredential, ActionError> {
    let resolved = if let Some(token) = GitHubToken::new(env.input(inputs::GITHUB_TOKEN)) {
        output.warning(DEPRECATED_TOKEN_INPUT_WARNING);
        ResolvedCredential {
            token,
            source: TokenSource::ActionInput,
        }
    } else {
        let token = env
            .var(vars::GITHUB_TOKEN)
            .and_then(GitHubToken::new)
            .ok_or(ActionError::MissingCredential {
                name: vars::GITHUB_TOKEN,
            })?;
        ResolvedCredential {
            token,
            source: TokenSource::Environment,
        }
    };

    env.set_var(vars::GITHUB_TOKEN, resolved.token.expose());
    if env.var(vars::LOG_LEVEL).filter(|v| !v.is_empty()).is_none() {
        env.set_var(vars::LOG_LEVEL, DEFAULT_LOG_LEVEL);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{MemoryEnvironment, RecordingOutput};

    const WARNING_LINE: &str = "::warning::The GITHUB_TOKEN input is deprecated and will be removed in v3. Pass it via env instead. See docs for details.";

    #[test]
    fn environment_token_is_used_without_warning() {
        let env = MemoryEnvironment::new().with("GITHUB_TOKEN", "env-token");
        let output = RecordingOutput::new();

        let resolved = resolve_credential(&env, &output).unwrap();

        assert_eq!(resolved.token.expose(), "env-token");
        assert_eq!(resolved.source, TokenSource::Environment);
        assert!(!output.contains(WARNING_LINE));
    }

    #[test]
    fn action_input_token_warns_and_is_republished() {
        let env = MemoryEnvironment::new().with("INPUT_GITHUB_TOKEN", "input-token");
        let output = RecordingOutput::new();

        let resolved = resolve_credential(&env, &output).unwrap();

        assert_eq!(resolved.source, TokenSource::ActionInput);
        assert_eq!(env.var("GITHUB_TOKEN").as_deref(), Some("input-token"));
        assert_eq!(output.lines(), vec![WARNING_LINE.to_owned()]);
    }

    #[test]
    fn action_input_wins_over_environment() {
        let env = MemoryEnvironment::new()
            .with("INPUT_GITHUB_TOKEN", "input-token")
            .with("GITHUB_TOKEN", "env-token");
        let resolved = resolve_credential(&env, &RecordingOutput::new()).unwrap();
        assert_eq!(resolved.token.expose(), "input-token");
        assert_eq!(env.var("GITHUB_TOKEN").as_deref(), Some("input-token"));
    }

    #[test]
    fn blank_action_input_falls_back_to_environment() {
        let env = MemoryEnvironment::new()
            .with("INPUT_GITHUB_TOKEN", "   ")
            .with("GITHUB_TOKEN", "env-token");
        let output = RecordingOutput::new();
        let resolved = resolve_credential(&env, &output).unwrap();
        assert_eq!(resolved.source, TokenSource::Environment);
        assert!(output.lines().is_empty());
    }

    #[test]
    fn missing_token_names_the_variable() {
        let env = MemoryEnvironment::new().with("GITHUB_TOKEN", "");
        let err = resolve_credential(&env, &RecordingOutput::new()).unwrap_err();
        assert!(matches!(err, ActionError::MissingCredential { .. }));
        assert!(err
            .to_string()
            .contains("missing environment variable 'GITHUB_TOKEN' in labeler action configuration"));
        assert_eq!(env.var("LOG_LEVEL"), None);
    }

    #[test]
    fn log_level_defaults_to_info_but_is_not_overridden() {
        let env = MemoryEnvironment::new().with("GITHUB_TOKEN", "t");
        resolve_credential(&env, &RecordingOutput::new()).unwrap();
        assert_eq!(env.var("LOG_LEVEL").as_deref(), Some("info"));

        let env = MemoryEnvironment::new()
            .with("GITHUB_TOKEN", "t")
            .with("LOG_LEVEL", "debug");
        resolve_credential(&env, &RecordingOutput::new()).unwrap();
        assert_eq!(env.var("LOG_LEVEL").as_deref(), Some("debug"));
    }

    #[test]
    fn empty_log_level_is_replaced_with_info() {
        let env = MemoryEnvironment::new()
            .with("INPUT_GITHUB_TOKEN", "input-token")
            .with("LOG_LEVEL", "");
        resolve_credential(&env, &RecordingOutput::new()).unwrap();
        assert_eq!(env.var("GITHUB_TOKEN").as_deref(), Some("input-token"));
        assert_eq!(env.var("LOG_LEVEL").as_deref(), Some("info"));
    }
}
