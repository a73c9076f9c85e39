//! Configuration assembly for the labeling engine.
//!
//! The engine's configuration is built from an ordered list of
//! [`ConfigOption`]s. Each option sets a different field, so the order in which
//! they are applied does not change the result.

use serde::{Deserialize, Serialize};

use crate::{EventName, Identity, RawPayload, RepositoryName, RepositoryOwner, SubjectId};

/// Everything the labeling engine needs to act on one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerConfig {
    pub owner: RepositoryOwner,
    pub repo: RepositoryName,
    /// Event kind exactly as the runner named it.
    pub event: EventName,
    /// Issue or pull-request number; `0` when there is no subject.
    pub id: SubjectId,
    /// The normalised event payload.
    pub data: String,
    /// Path to the labeler rules file, when overridden by the workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

/// A single field assignment on a [`LabelerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
    Owner(RepositoryOwner),
    Repo(RepositoryName),
    Event(EventName),
    Id(SubjectId),
    Data(String),
    ConfigPath(String),
}

impl ConfigOption {
    fn apply(self, config: &mut LabelerConfig) {
        match self {
            ConfigOption::Owner(owner) => config.owner = owner,
            ConfigOption::Repo(repo) => config.repo = repo,
            ConfigOption::Event(event) => config.event = event,
            ConfigOption::Id(id) => config.id = id,
            ConfigOption::Data(data) => config.data = data,
            ConfigOption::ConfigPath(path) => config.config_path = Some(path),
        }
    }
}

impl LabelerConfig {
    /// Builds a configuration by applying `options` in order to a default value.
    pub fn with_options(options: impl IntoIterator<Item = ConfigOption>) -> Self {
        let mut config = LabelerConfig::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }
}

/// The resolved inputs to [`assemble`].
#[derive(Debug, Clone)]
pub struct AssemblyInputs {
    pub identity: Identity,
    pub event: EventName,
    pub id: SubjectId,
    pub payload: RawPayload,
    /// Value of the `config_path` action input; ignored when empty.
    pub config_path: String,
}

/// Returns the option list for `inputs`, in application order.
pub fn options(inputs: AssemblyInputs) -> Vec<ConfigOption> {
    let mut options = vec![
        ConfigOption::Owner(inputs.identity.owner),
        ConfigOption::Repo(inputs.identity.repo),
        ConfigOption::Event(inputs.event),
        ConfigOption::Id(inputs.id),
        ConfigOption::Data(inputs.payload.into_string()),
    ];
    if !inputs.config_path.is_empty() {
        options.push(ConfigOption::ConfigPath(inputs.config_path));
    }
    options
}

/// Composes the engine configuration. Pure; cannot fail.
pub fn assemble(inputs: AssemblyInputs) -> LabelerConfig {
    LabelerConfig::with_options(options(inputs))
}
