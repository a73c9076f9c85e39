//! Newtype domain identifiers.
//!
//! Owner, repository, and event names all arrive as plain strings from the
//! runner environment. Wrapping each in its own type keeps a repository name
//! from being passed where an owner is expected.
//!
//! Unlike most identifier types, empty values are legal here: the runner may
//! omit any of these variables and the bootstrap must still proceed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new(), as_str(), is_empty(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier. Empty values are accepted.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the underlying string is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — GitHub-integer-backed
// ---------------------------------------------------------------------------

/// The issue or pull-request number an invocation operates on.
///
/// `0` means "no subject": the event kind was not recognised, or the payload
/// did not carry the nested issue / pull-request object.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubjectId(u64);

impl SubjectId {
    /// The identifier used when no subject could be resolved.
    pub const NONE: SubjectId = SubjectId(0);

    /// Creates a new identifier from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` if no subject was resolved.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single action invocation.
///
/// Generated fresh for every process run and attached to the root tracing span
/// so all log lines from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers — String-backed (runner environment)
// ---------------------------------------------------------------------------

string_id! {
    /// The effective repository owner (organisation or user login).
    RepositoryOwner
}

string_id! {
    /// A bare repository name, without the owner prefix.
    ///
    /// Never contains `/` when produced by [`crate::identity::resolve_identity`].
    RepositoryName
}

string_id! {
    /// The raw event-kind discriminator as supplied by the runner
    /// (e.g. `"issues"`, `"pull_request_target"`, `"push"`).
    EventName
}
