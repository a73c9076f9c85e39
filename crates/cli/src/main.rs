//! Labeler action entry point.
//!
//! This binary is the composition root for the action. Responsibilities:
//!
//! 1. **Wire observability** — configure `tracing-subscriber` with a filter
//!    taken from `LOG_LEVEL` and a plain or JSON fmt layer (`LOG_FORMAT=json`).
//! 2. **Construct infrastructure** — the process environment, the stdout
//!    workflow-command sink, and the process-backed labeling engine factory —
//!    and inject them into [`bootstrap::ActionRunner`].
//! 3. **Report the outcome** — exit 0 after a successful run; otherwise log the
//!    error, annotate the job with an `::error::` command, and exit 1.

use std::process::ExitCode;

use bootstrap::ActionRunner;
use engine::ProcessExecutorFactory;
use pipeline::environment::{vars, Environment};
use pipeline::{ActionError, ActionOutput};
use tracing_subscriber::EnvFilter;
use workflow::{ProcessEnvironment, StdoutOutput};

/// Build identifier baked in at compile time; the commit SHA on CI builds.
const BUILD: &str = match option_env!("GITHUB_SHA") {
    Some(sha) => sha,
    None => "dev",
};

fn main() -> ExitCode {
    init_tracing(&ProcessEnvironment);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        build = BUILD,
        "Starting labeler action"
    );

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stage = err.downcast_ref::<ActionError>().map(ActionError::stage);
            tracing::error!(stage = ?stage, error = %err, "Labeler action failed");
            StdoutOutput.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let env = ProcessEnvironment;
    let factory = ProcessExecutorFactory::from_env(&env);
    tracing::debug!(program = %factory.program().display(), "Using labeling engine");

    ActionRunner::new(env, StdoutOutput, factory).run()?;
    Ok(())
}

fn init_tracing(env: &impl Environment) {
    let filter = env
        .var(vars::LOG_LEVEL)
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if env.var(vars::LOG_FORMAT).as_deref() == Some("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
