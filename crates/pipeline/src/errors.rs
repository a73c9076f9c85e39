//! Top-level error type for the labeler action bootstrap.
//!
//! [`ActionError`] covers every condition that ends a run. None of them are
//! retried: an action invocation is itself the retry unit, and the platform
//! re-runs the whole job when asked.
//!
//! Each variant keeps its underlying cause as the error `source` and repeats
//! the cause text in its message, so the log line a user sees in the job output
//! is self-contained.

use std::path::PathBuf;

use thiserror::Error;

use crate::Stage;

/// Boxed cause produced by executors and executor factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that halt a bootstrap run.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Neither the deprecated action input nor the environment supplied a token.
    #[error("missing environment variable '{name}' in labeler action configuration")]
    MissingCredential {
        /// Name of the expected variable / input.
        name: &'static str,
    },

    /// The event payload file could not be read, or was empty.
    #[error("can't read events: {}: {source}", .path.display())]
    PayloadRead {
        /// The path that was attempted (empty when the variable was unset).
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload of a recognised event kind did not match its expected shape.
    #[error("can't unmarshal json: {source}")]
    PayloadParse {
        #[source]
        source: serde_json::Error,
    },

    /// The executor factory refused to build an executor.
    #[error("could not construct a labeler: {source}")]
    ExecutorConstruction {
        #[source]
        source: BoxError,
    },

    /// The executor ran and reported failure.
    #[error("failed to execute: {source}")]
    Execution {
        #[source]
        source: BoxError,
    },
}

impl ActionError {
    /// The state-machine stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            ActionError::MissingCredential { .. } => Stage::ResolveCredential,
            ActionError::PayloadRead { .. } => Stage::LoadPayload,
            ActionError::PayloadParse { .. } => Stage::Dispatch,
            ActionError::ExecutorConstruction { .. } | ActionError::Execution { .. } => {
                Stage::Invoke
            }
        }
    }
}
