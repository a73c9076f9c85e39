//! Shared value types for the labeler action domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! behaviour: the token hides itself from debug output, and [`Stage`] names the
//! steps of the bootstrap state machine for logs and error reporting.

use serde::{Deserialize, Serialize};

use crate::{RepositoryName, RepositoryOwner};

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// The authentication token handed to the labeling engine.
///
/// `Debug` output is redacted so the token never reaches a log line through a
/// `?` field.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Creates a token, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GitHubToken(***)")
    }
}

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// The deprecated `GITHUB_TOKEN` action input (`with:` block).
    ActionInput,
    /// The `GITHUB_TOKEN` environment variable.
    Environment,
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The repository an invocation acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Effective owner: repository owner, falling back to the actor.
    pub owner: RepositoryOwner,
    /// Bare repository name (final segment of `owner/name`).
    pub repo: RepositoryName,
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// The steps of one bootstrap run, in execution order.
///
/// A run visits each stage at most once. The first failing stage ends the run
/// in the `Failed` terminal state; otherwise it ends in `Done` after
/// [`Stage::Invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ResolveCredential,
    LoadPayload,
    Dispatch,
    ResolveIdentity,
    AssembleConfig,
    Invoke,
}

impl Stage {
    /// Returns the stage name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::ResolveCredential => "resolve_credential",
            Stage::LoadPayload => "load_payload",
            Stage::Dispatch => "dispatch",
            Stage::ResolveIdentity => "resolve_identity",
            Stage::AssembleConfig => "assemble_config",
            Stage::Invoke => "invoke",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
