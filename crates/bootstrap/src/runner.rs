//! The bootstrap state machine.
//!
//! One [`ActionRunner::run`] call walks every [`Stage`] in order:
//!
//! ```text
//! ResolveCredential → LoadPayload → Dispatch → ResolveIdentity → AssembleConfig → Invoke
//! ```
//!
//! The first failing stage ends the run; its [`ActionError`] is returned to the
//! caller unchanged. Nothing here exits the process.

use pipeline::environment::{inputs, vars, Environment};
use pipeline::{
    ActionError, ActionOutput, AssemblyInputs, EventKind, EventName, ExecutorFactory,
    InvocationId, LabelerConfig, Stage,
};

use crate::payload::load_event_payload;

/// Drives one bootstrap run over the given ports.
pub struct ActionRunner<E, O, F> {
    env: E,
    output: O,
    factory: F,
}

impl<E, O, F> ActionRunner<E, O, F>
where
    E: Environment,
    O: ActionOutput,
    F: ExecutorFactory,
{
    /// Wraps the three ports. Nothing is read until [`ActionRunner::run`].
    pub fn new(env: E, output: O, factory: F) -> Self {
        Self {
            env,
            output,
            factory,
        }
    }

    /// Runs every stage, ending with the labeling engine.
    pub fn run(&self) -> Result<(), ActionError> {
        let invocation = InvocationId::new_random();
        let span = tracing::info_span!("action", invocation_id = %invocation);
        let _entered = span.enter();

        let config = self.prepare()?;
        invoke(&self.factory, config)?;

        tracing::info!("Done labeling.");
        Ok(())
    }

    /// Runs every stage up to and including configuration assembly.
    ///
    /// Has the same side effects as the first part of [`ActionRunner::run`]:
    /// the token is republished and the deprecation warning may be emitted.
    pub fn prepare(&self) -> Result<LabelerConfig, ActionError> {
        enter(Stage::ResolveCredential);
        let credential = pipeline::resolve_credential(&self.env, &self.output)?;
        tracing::debug!(token_source = ?credential.source, "Resolved GitHub token");

        enter(Stage::LoadPayload);
        let payload = load_event_payload(&self.env)?;

        enter(Stage::Dispatch);
        let event = EventName::new(self.env.var_or_empty(vars::GITHUB_EVENT_NAME));
        let id = pipeline::subject_id(&EventKind::from(&event), &payload)?;
        tracing::debug!(event = %event, data = payload.as_str(), "Processing event");

        enter(Stage::ResolveIdentity);
        let identity = pipeline::resolve_identity(&self.env);

        enter(Stage::AssembleConfig);
        let assembly = AssemblyInputs {
            identity,
            event,
            id,
            payload,
            config_path: self.env.input(inputs::CONFIG_PATH),
        };
        Ok(pipeline::assemble(assembly))
    }
}

fn enter(stage: Stage) {
    tracing::debug!(stage = %stage, "Entering stage");
}

/// Builds an executor for `config` and runs it.
pub fn invoke(factory: &impl ExecutorFactory, config: LabelerConfig) -> Result<(), ActionError> {
    enter(Stage::Invoke);
    tracing::info!(
        owner = %config.owner,
        repo = %config.repo,
        event = %config.event,
        id = config.id.as_u64(),
        "Invoking labeler"
    );

    let mut executor = factory
        .create(config)
        .map_err(|source| ActionError::ExecutorConstruction { source })?;
    executor
        .execute()
        .map_err(|source| ActionError::Execution { source })
}
