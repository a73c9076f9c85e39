//! The labeling-engine port.
//!
//! The engine that decides which labels to apply is an external collaborator.
//! The bootstrap only needs two things from it: a way to build an instance from
//! a [`LabelerConfig`], and a single operation that runs it.
//!
//! [`ExecutorFactory`] is the seam tests use to substitute a stand-in engine.
//! It is passed to the runner explicitly, so there is no global to save and
//! restore around a test.

use crate::{BoxError, LabelerConfig};

/// A constructed labeling engine, ready to run once.
pub trait Executor {
    /// Applies labels for the configured subject.
    fn execute(&mut self) -> Result<(), BoxError>;
}

/// Builds an [`Executor`] for one assembled configuration.
///
/// Implemented for any `Fn(LabelerConfig) -> Result<Box<dyn Executor>, BoxError>`
/// so tests can pass a closure.
pub trait ExecutorFactory {
    /// Builds an executor for `config`. An error here means the engine could
    /// not be constructed; nothing has run yet.
    fn create(&self, config: LabelerConfig) -> Result<Box<dyn Executor>, BoxError>;
}

impl<F> ExecutorFactory for F
where
    F: Fn(LabelerConfig) -> Result<Box<dyn Executor>, BoxError>,
{
    fn create(&self, config: LabelerConfig) -> Result<Box<dyn Executor>, BoxError> {
        self(config)
    }
}
