//! Labeler action runner infrastructure.
//!
//! Implements the runner-facing ports of the [`pipeline`] crate for a real
//! GitHub Actions job:
//!
//! - [`ProcessEnvironment`] — reads and writes the process environment. Writes
//!   are inherited by the labeling engine when it runs as a child process.
//! - [`StdoutOutput`] — prints workflow commands to standard output, where the
//!   runner picks them up as job annotations.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** The [`pipeline`] crate sees only
//! [`pipeline::Environment`] and [`pipeline::ActionOutput`].

use std::io::Write;

use pipeline::{ActionOutput, Environment, WorkflowCommand};

/// [`Environment`] over `std::env`.
///
/// Values that are not valid Unicode are treated as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// [`ActionOutput`] that prints each command on its own stdout line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl ActionOutput for StdoutOutput {
    fn issue(&self, command: WorkflowCommand) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{command}").and_then(|()| stdout.flush()) {
            tracing::warn!(error = %err, "Could not write workflow command to stdout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_environment_round_trips() {
        let env = ProcessEnvironment;
        let key = "LABELER_ACTION_WORKFLOW_TEST_ROUND_TRIP";
        assert_eq!(env.var(key), None);

        env.set_var(key, "value");
        assert_eq!(env.var(key).as_deref(), Some("value"));
        assert_eq!(env.var_or_empty(key), "value");
    }

    #[test]
    fn process_environment_reads_inputs() {
        let env = ProcessEnvironment;
        env.set_var("INPUT_LABELER_ACTION_WORKFLOW_TEST", " padded ");
        assert_eq!(env.input("labeler_action_workflow_test"), "padded");
    }
}
