//! The action-output port.
//!
//! The runner scans standard output for workflow commands (`::warning::...`)
//! and turns them into annotations on the job. These are user-facing
//! messages, distinct from the `tracing` log stream.

/// A workflow command understood by the Actions runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    Warning(String),
    Error(String),
}

impl std::fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (name, message) = match self {
            WorkflowCommand::Warning(m) => ("warning", m),
            WorkflowCommand::Error(m) => ("error", m),
        };
        write!(f, "::{name}::{}", escape_data(message))
    }
}

// The runner ends a command at the first line break, so message data is
// percent-escaped.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Sink for workflow commands.
pub trait ActionOutput {
    /// Writes one rendered command line.
    fn issue(&self, command: WorkflowCommand);

    /// Issues a `::warning::` annotation.
    fn warning(&self, message: &str) {
        self.issue(WorkflowCommand::Warning(message.to_owned()));
    }

    /// Issues an `::error::` annotation.
    fn error(&self, message: &str) {
        self.issue(WorkflowCommand::Error(message.to_owned()));
    }
}

impl<O: ActionOutput + ?Sized> ActionOutput for &O {
    fn issue(&self, command: WorkflowCommand) {
        (**self).issue(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_render_with_double_colon_prefix() {
        assert_eq!(
            WorkflowCommand::Warning("careful".into()).to_string(),
            "::warning::careful"
        );
        assert_eq!(WorkflowCommand::Error("boom".into()).to_string(), "::error::boom");
    }

    #[test]
    fn multi_line_messages_are_escaped() {
        assert_eq!(
            WorkflowCommand::Error("100% broken\r\nsee logs".into()).to_string(),
            "::error::100%25 broken%0D%0Asee logs"
        );
    }
}
