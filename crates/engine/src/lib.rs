//! Labeler action engine adapter.
//!
//! Implements [`pipeline::ExecutorFactory`] for the labeling engine shipped
//! alongside the action as a separate program. The engine receives:
//!
//! - the assembled [`LabelerConfig`] as one JSON document on stdin;
//! - the process environment, including the `GITHUB_TOKEN` and `LOG_LEVEL`
//!   values republished by the credential stage.
//!
//! Its stdout and stderr go straight to the job log.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Process spawning and the stdin protocol live here. The
//! [`pipeline`] crate sees only [`pipeline::Executor`] and
//! [`pipeline::ExecutorFactory`].

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use pipeline::{BoxError, Environment, Executor, ExecutorFactory, LabelerConfig};
use thiserror::Error;

/// Variable naming the engine program.
pub const ENGINE_BIN_VAR: &str = "LABELER_ENGINE_BIN";

/// Program run when [`ENGINE_BIN_VAR`] is unset or empty. Resolved via `PATH`.
pub const DEFAULT_ENGINE_BIN: &str = "labeler";

/// Failures building or running the engine process.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no labeling engine program configured")]
    NoProgram,

    #[error("repository {field} is empty")]
    MissingField { field: &'static str },

    #[error("could not encode configuration: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not start labeling engine '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not talk to labeling engine: {0}")]
    Io(#[from] io::Error),

    #[error("labeling engine '{}' exited with {status}", .program.display())]
    Failed { program: PathBuf, status: ExitStatus },
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Builds a [`ProcessExecutor`] for each configuration.
#[derive(Debug, Clone)]
pub struct ProcessExecutorFactory {
    program: PathBuf,
}

impl ProcessExecutorFactory {
    /// Runs `program` for every executor this factory builds.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Reads the program from [`ENGINE_BIN_VAR`], defaulting to
    /// [`DEFAULT_ENGINE_BIN`].
    pub fn from_env(env: &impl Environment) -> Self {
        let program = env
            .var(ENGINE_BIN_VAR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENGINE_BIN.to_owned());
        Self::new(program)
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    fn build(&self, config: LabelerConfig) -> Result<ProcessExecutor, EngineError> {
        if self.program.as_os_str().is_empty() {
            return Err(EngineError::NoProgram);
        }
        if config.owner.is_empty() {
            return Err(EngineError::MissingField { field: "owner" });
        }
        if config.repo.is_empty() {
            return Err(EngineError::MissingField { field: "name" });
        }
        let body = serde_json::to_vec(&config)?;
        Ok(ProcessExecutor {
            program: self.program.clone(),
            body,
        })
    }
}

impl ExecutorFactory for ProcessExecutorFactory {
    fn create(&self, config: LabelerConfig) -> Result<Box<dyn Executor>, BoxError> {
        Ok(Box::new(self.build(config)?))
    }
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

/// One pending run of the engine program.
#[derive(Debug)]
pub struct ProcessExecutor {
    program: PathBuf,
    /// JSON-encoded [`LabelerConfig`].
    body: Vec<u8>,
}

impl ProcessExecutor {
    fn run(&self) -> Result<(), EngineError> {
        tracing::debug!(program = %self.program.display(), "Starting labeling engine");
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&self.body) {
                // The engine may exit without reading its input; its exit
                // status decides the outcome.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("Labeling engine closed stdin early");
                }
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(err.into());
                }
                Ok(()) => {}
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(EngineError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl Executor for ProcessExecutor {
    fn execute(&mut self) -> Result<(), BoxError> {
        Ok(self.run()?)
    }
}
