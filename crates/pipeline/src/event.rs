//! Event payload normalisation and event-kind dispatch.
//!
//! The runner writes the triggering webhook as pretty-printed JSON. Issue and
//! pull-request bodies embedded in that JSON may themselves span several lines,
//! so the payload is collapsed to a single line before it is parsed or handed
//! on as raw data.
//!
//! Dispatch is deliberately lenient. Only the two recognised shapes are
//! deserialised, and only the subject number is extracted; every other field
//! is ignored. An event kind the engine does not act on is not an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{ActionError, EventName, SubjectId};

// A line feed (optionally preceded by a carriage return) and any whitespace
// that follows it. The class is spelled out to keep Unicode spaces intact.
static LINE_BREAK_INDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n[\t\n\x0C\r ]*").expect("line-break pattern is a valid regex")
});

/// A normalised event payload.
///
/// Constructed only through [`RawPayload::normalize`], so the contents never
/// contain a line feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload(String);

impl RawPayload {
    /// Removes every line break together with the indentation that follows it.
    pub fn normalize(text: &str) -> Self {
        Self(LINE_BREAK_INDENT.replace_all(text, "").into_owned())
    }

    /// The normalised text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the payload, returning the normalised text.
    pub fn into_string(self) -> String {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Event kinds
// ---------------------------------------------------------------------------

/// The event kinds the bootstrap knows how to extract a subject from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Issues,
    PullRequest,
    /// Same payload shape as [`EventKind::PullRequest`], run in the context of
    /// the base repository.
    PullRequestTarget,
    /// Any other kind. Carries no subject.
    Other(String),
}

impl EventKind {
    /// Maps a runner event name to its kind. Unknown names become
    /// [`EventKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "issues" => EventKind::Issues,
            "pull_request" => EventKind::PullRequest,
            "pull_request_target" => EventKind::PullRequestTarget,
            other => EventKind::Other(other.to_owned()),
        }
    }

    /// The runner's name for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Issues => "issues",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestTarget => "pull_request_target",
            EventKind::Other(name) => name,
        }
    }
}

impl From<&EventName> for EventKind {
    fn from(name: &EventName) -> Self {
        EventKind::from_name(name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// The fragment of an `issues` webhook payload the bootstrap reads.
#[derive(Debug, Default, Deserialize)]
pub struct IssuesEvent {
    #[serde(default)]
    pub issue: Option<Subject>,
}

/// The fragment of a `pull_request` / `pull_request_target` webhook payload
/// the bootstrap reads.
#[derive(Debug, Default, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub pull_request: Option<Subject>,
}

/// An issue or pull request, reduced to its number.
#[derive(Debug, Default, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub number: Option<u64>,
}

fn subject_number(subject: Option<Subject>) -> SubjectId {
    subject
        .and_then(|s| s.number)
        .map(SubjectId::new)
        .unwrap_or(SubjectId::NONE)
}

/// Extracts the subject identifier for `kind` from a normalised payload.
///
/// Returns [`SubjectId::NONE`] when the kind is not recognised or the nested
/// object is missing. Fails only when the payload of a recognised kind is not
/// valid JSON of the expected shape.
pub fn subject_id(kind: &EventKind, payload: &RawPayload) -> Result<SubjectId, ActionError> {
    let parse_error = |source| ActionError::PayloadParse { source };
    let id = match kind {
        EventKind::Issues => {
            let event: IssuesEvent = serde_json::from_str(payload.as_str()).map_err(parse_error)?;
            subject_number(event.issue)
        }
        EventKind::PullRequest | EventKind::PullRequestTarget => {
            let event: PullRequestEvent =
                serde_json::from_str(payload.as_str()).map_err(parse_error)?;
            subject_number(event.pull_request)
        }
        EventKind::Other(name) => {
            tracing::debug!(event = %name, "Event kind carries no subject");
            SubjectId::NONE
        }
    };
    Ok(id)
}
