//! Event payload loading.

use std::io;
use std::path::PathBuf;

use pipeline::environment::{vars, Environment};
use pipeline::{ActionError, RawPayload};

/// Reads the file named by `GITHUB_EVENT_PATH` and normalises its text.
///
/// Fails with [`ActionError::PayloadRead`] when the variable is unset, the file
/// cannot be read or is not UTF-8, or it holds nothing but whitespace.
pub fn load_event_payload(env: &impl Environment) -> Result<RawPayload, ActionError> {
    let path = PathBuf::from(env.var_or_empty(vars::GITHUB_EVENT_PATH));
    let read_error = |source| ActionError::PayloadRead {
        path: path.clone(),
        source,
    };

    if path.as_os_str().is_empty() {
        return Err(read_error(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not set", vars::GITHUB_EVENT_PATH),
        )));
    }

    let text = std::fs::read_to_string(&path).map_err(read_error)?;
    if text.trim().is_empty() {
        return Err(read_error(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "event payload is empty",
        )));
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read event payload");
    Ok(RawPayload::normalize(&text))
}
