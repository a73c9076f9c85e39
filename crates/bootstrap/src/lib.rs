//! Labeler action orchestration.
//!
//! Sequences the stages of one action run: credential resolution, payload
//! loading, event dispatch, identity resolution, configuration assembly, and
//! engine invocation. The rules for each stage live in the [`pipeline`] crate;
//! this crate only orders them, reads the payload file, and logs progress.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Runs against the [`pipeline`] port traits, so the
//! same runner drives the real process environment in the `cli` binary and
//! in-memory fakes in tests.

pub mod payload;
pub mod runner;

pub use payload::load_event_payload;
pub use runner::{invoke, ActionRunner};
