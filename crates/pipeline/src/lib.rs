//! Core domain for the labeler action bootstrap.
//!
//! The bootstrap turns a runner environment and a webhook payload into a
//! [`LabelerConfig`] and hands it to an external labeling engine. This crate
//! holds every domain concept and rule involved in that: identifiers, payload
//! normalisation, event-kind dispatch, identity resolution, token resolution,
//! and configuration assembly.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Environment variables, workflow-command output, and the labeling engine are
//! reached only through the [`Environment`], [`ActionOutput`], and
//! [`ExecutorFactory`] traits; the `workflow` and `engine` crates supply the
//! real implementations and [`fakes`] supplies in-memory ones.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`SubjectId`, `RepositoryOwner`, etc.) |
//! | [`types`] | Shared value types (`GitHubToken`, `Identity`, `Stage`) |
//! | [`errors`] | [`ActionError`] and the boxed cause type |
//! | [`environment`] | [`Environment`] port, variable and input names |
//! | [`output`] | [`ActionOutput`] port and workflow commands |
//! | [`executor`] | [`Executor`] / [`ExecutorFactory`] ports |
//! | [`credential`] | Token resolution and republishing |
//! | [`event`] | Payload normalisation and subject extraction |
//! | [`identity`] | Owner / repository resolution |
//! | [`config`] | Configuration assembly |
//! | [`fakes`] | In-memory port implementations for tests |

pub mod config;
pub mod credential;
pub mod environment;
pub mod errors;
pub mod event;
pub mod executor;
pub mod fakes;
pub mod identifiers;
pub mod identity;
pub mod output;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{assemble, AssemblyInputs, ConfigOption, LabelerConfig};
pub use credential::{resolve_credential, ResolvedCredential, DEPRECATED_TOKEN_INPUT_WARNING};
pub use environment::Environment;
pub use errors::{ActionError, BoxError};
pub use event::{subject_id, EventKind, RawPayload};
pub use executor::{Executor, ExecutorFactory};
pub use identifiers::{EventName, InvocationId, RepositoryName, RepositoryOwner, SubjectId};
pub use identity::resolve_identity;
pub use output::{ActionOutput, WorkflowCommand};
pub use types::{GitHubToken, Identity, Stage, TokenSource};
