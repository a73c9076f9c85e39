//! In-memory fakes for the port traits (testing only).
//!
//! Provides [`MemoryEnvironment`], [`RecordingOutput`], and
//! [`RecordingFactory`] so the bootstrap can be exercised without touching
//! process environment variables or spawning a labeling engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    ActionOutput, BoxError, Environment, Executor, ExecutorFactory, LabelerConfig,
    WorkflowCommand,
};

// ---------------------------------------------------------------------------
// MemoryEnvironment
// ---------------------------------------------------------------------------

/// Environment backed by a `HashMap`. Writes are visible to later reads.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnvironment {
    /// An environment with no variables set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set_var(key, value);
        self
    }

    /// Removes `key`, as if it had never been set.
    pub fn remove(&self, key: &str) {
        self.vars.lock().unwrap().remove(key);
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.lock().unwrap().get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        self.vars
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}

// ---------------------------------------------------------------------------
// RecordingOutput
// ---------------------------------------------------------------------------

/// Output sink that keeps every rendered workflow command.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    /// A sink with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Returns `true` if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

impl ActionOutput for RecordingOutput {
    fn issue(&self, command: WorkflowCommand) {
        self.lines.lock().unwrap().push(command.to_string());
    }
}

// ---------------------------------------------------------------------------
// RecordingFactory
// ---------------------------------------------------------------------------

/// What a [`RecordingFactory`] does when asked for an executor.
#[derive(Debug, Clone)]
pub enum StubBehaviour {
    /// Build an executor whose `execute` succeeds.
    Succeed,
    /// Build an executor whose `execute` fails with this message.
    FailExecution(String),
    /// Refuse to build an executor, failing with this message.
    FailConstruction(String),
}

/// Executor factory that records the configuration it was given and hands back
/// a stub executor.
///
/// Clones share state, so a test can keep one handle and pass another to the
/// runner.
#[derive(Debug, Clone)]
pub struct RecordingFactory {
    behaviour: StubBehaviour,
    configs: Arc<Mutex<Vec<LabelerConfig>>>,
    executions: Arc<Mutex<usize>>,
}

impl RecordingFactory {
    /// A factory whose executors follow `behaviour`.
    pub fn new(behaviour: StubBehaviour) -> Self {
        Self {
            behaviour,
            configs: Arc::default(),
            executions: Arc::default(),
        }
    }

    /// Shorthand for [`StubBehaviour::Succeed`].
    pub fn succeeding() -> Self {
        Self::new(StubBehaviour::Succeed)
    }

    /// Configurations received, in call order.
    pub fn configs(&self) -> Vec<LabelerConfig> {
        self.configs.lock().unwrap().clone()
    }

    /// Number of times a built executor was run.
    pub fn executions(&self) -> usize {
        *self.executions.lock().unwrap()
    }
}

impl ExecutorFactory for RecordingFactory {
    fn create(&self, config: LabelerConfig) -> Result<Box<dyn Executor>, BoxError> {
        self.configs.lock().unwrap().push(config);
        let failure = match &self.behaviour {
            StubBehaviour::FailConstruction(message) => return Err(message.clone().into()),
            StubBehaviour::FailExecution(message) => Some(message.clone()),
            StubBehaviour::Succeed => None,
        };
        Ok(Box::new(StubExecutor {
            failure,
            executions: Arc::clone(&self.executions),
        }))
    }
}

struct StubExecutor {
    failure: Option<String>,
    executions: Arc<Mutex<usize>>,
}

impl Executor for StubExecutor {
    fn execute(&mut self) -> Result<(), BoxError> {
        *self.executions.lock().unwrap() += 1;
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}
