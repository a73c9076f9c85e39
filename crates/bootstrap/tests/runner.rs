//! End-to-end runs of the bootstrap against in-memory ports.

use std::path::PathBuf;

use bootstrap::ActionRunner;
use pipeline::fakes::{MemoryEnvironment, RecordingFactory, RecordingOutput, StubBehaviour};
use pipeline::{ActionError, Environment, LabelerConfig, SubjectId};
use pretty_assertions::assert_eq;

const DEPRECATION_LINE: &str = "::warning::The GITHUB_TOKEN input is deprecated and will be removed in v3. Pass it via env instead. See docs for details.";

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// A runner environment for an `issues` event on `jimschubert/testrepo`.
fn issues_env() -> MemoryEnvironment {
    MemoryEnvironment::new()
        .with("GITHUB_EVENT_NAME", "issues")
        .with("GITHUB_TOKEN", "token")
        .with("GITHUB_EVENT_PATH", &fixture("issue.json"))
        .with("GITHUB_REPOSITORY", "jimschubert/testrepo")
        .with("GITHUB_REPOSITORY_OWNER", "jimschubert")
}

fn run(
    env: &MemoryEnvironment,
    factory: &RecordingFactory,
) -> (Result<(), ActionError>, RecordingOutput) {
    let output = RecordingOutput::new();
    let result = ActionRunner::new(env, &output, factory.clone()).run();
    (result, output)
}

#[test]
fn issues_event_invokes_labeler_with_assembled_config() {
    let env = issues_env();
    let factory = RecordingFactory::succeeding();

    let (result, output) = run(&env, &factory);

    result.expect("run should succeed");
    assert_eq!(factory.executions(), 1);
    assert_eq!(
        factory.configs(),
        vec![LabelerConfig {
            owner: pipeline::RepositoryOwner::new("jimschubert"),
            repo: pipeline::RepositoryName::new("testrepo"),
            event: pipeline::EventName::new("issues"),
            id: SubjectId::new(42),
            data: concat!(
                r#"{"action": "opened","issue": {"number": 42,"#,
                r#""title": "Spelling mistake in README","#,
                r#""body": "The second paragraphhas a typo.","#,
                r#""user": {"login": "octocat"}},"#,
                r#""repository": {"full_name": "jimschubert/testrepo"}}"#
            )
            .to_owned(),
            config_path: None,
        }]
    );
    assert!(!output.contains(DEPRECATION_LINE));
}

#[test]
fn raw_data_is_single_line() {
    let env = issues_env();
    let factory = RecordingFactory::succeeding();

    run(&env, &factory).0.unwrap();

    let data = &factory.configs()[0].data;
    assert!(!data.contains('\n'));
    serde_json::from_str::<serde_json::Value>(data).expect("normalised data is valid JSON");
}

#[test]
fn pull_request_target_resolves_pull_request_number() {
    let env = issues_env()
        .with("GITHUB_EVENT_NAME", "pull_request_target")
        .with("GITHUB_EVENT_PATH", &fixture("pull_request.json"));
    let factory = RecordingFactory::succeeding();

    run(&env, &factory).0.unwrap();

    let config = &factory.configs()[0];
    assert_eq!(config.id, SubjectId::new(7));
    assert_eq!(config.event.as_str(), "pull_request_target");
}

#[test]
fn unknown_event_kind_runs_with_zero_id() {
    let env = issues_env().with("GITHUB_EVENT_NAME", "workflow_dispatch");
    let factory = RecordingFactory::succeeding();

    run(&env, &factory).0.unwrap();

    assert_eq!(factory.configs()[0].id, SubjectId::NONE);
    assert_eq!(factory.executions(), 1);
}

#[test]
fn owner_falls_back_to_actor() {
    let env = issues_env().with("GITHUB_ACTOR", "bot");
    env.remove("GITHUB_REPOSITORY_OWNER");
    let factory = RecordingFactory::succeeding();

    run(&env, &factory).0.unwrap();

    let config = &factory.configs()[0];
    assert_eq!(config.owner.as_str(), "bot");
    assert_eq!(config.repo.as_str(), "testrepo");
}

#[test]
fn config_path_input_is_passed_through() {
    let env = issues_env().with("INPUT_CONFIG_PATH", ".github/custom-labeler.yml");
    let factory = RecordingFactory::succeeding();

    run(&env, &factory).0.unwrap();

    assert_eq!(
        factory.configs()[0].config_path.as_deref(),
        Some(".github/custom-labeler.yml")
    );
}

#[test]
fn missing_token_fails_before_reading_payload() {
    let env = issues_env().with("GITHUB_TOKEN", "");
    let factory = RecordingFactory::succeeding();

    let (result, _) = run(&env, &factory);

    let err = result.unwrap_err();
    assert!(err
        .to_string()
        .contains("missing environment variable 'GITHUB_TOKEN' in labeler action configuration"));
    assert!(factory.configs().is_empty());
}

#[test]
fn unreadable_payload_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("$.json");
    let env = issues_env().with("GITHUB_EVENT_PATH", &missing.to_string_lossy());
    let factory = RecordingFactory::succeeding();

    let (result, _) = run(&env, &factory);

    let err = result.unwrap_err();
    assert!(matches!(err, ActionError::PayloadRead { .. }));
    assert!(err.to_string().contains(&*missing.to_string_lossy()));
    assert!(factory.configs().is_empty());
}

#[test]
fn malformed_issue_payload_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"{\"issue\": \"forty-two\"}").unwrap();
    let env = issues_env().with("GITHUB_EVENT_PATH", &file.path().to_string_lossy());
    let factory = RecordingFactory::succeeding();

    let err = run(&env, &factory).0.unwrap_err();

    assert!(matches!(err, ActionError::PayloadParse { .. }));
    assert!(factory.configs().is_empty());
}

#[test]
fn execution_failure_preserves_cause() {
    let env = issues_env();
    let factory = RecordingFactory::new(StubBehaviour::FailExecution("some error".into()));

    let err = run(&env, &factory).0.unwrap_err();

    assert!(matches!(err, ActionError::Execution { .. }));
    assert_eq!(err.to_string(), "failed to execute: some error");
}

#[test]
fn construction_failure_preserves_cause() {
    let env = issues_env();
    let factory = RecordingFactory::new(StubBehaviour::FailConstruction("bad options".into()));

    let err = run(&env, &factory).0.unwrap_err();

    assert!(matches!(err, ActionError::ExecutorConstruction { .. }));
    assert_eq!(err.to_string(), "could not construct a labeler: bad options");
    assert_eq!(factory.executions(), 0);
}

#[test]
fn deprecated_token_input_prints_warning_and_republishes() {
    let env = issues_env().with("INPUT_GITHUB_TOKEN", "token");
    env.remove("GITHUB_TOKEN");
    let factory = RecordingFactory::succeeding();

    let (result, output) = run(&env, &factory);

    result.unwrap();
    assert!(output.contains(DEPRECATION_LINE));
    assert_eq!(env.var("GITHUB_TOKEN").as_deref(), Some("token"));
    assert_eq!(env.var("LOG_LEVEL").as_deref(), Some("info"));
}

#[test]
fn closure_factory_can_stand_in_for_the_engine() {
    struct Noop;
    impl pipeline::Executor for Noop {
        fn execute(&mut self) -> Result<(), pipeline::BoxError> {
            Ok(())
        }
    }

    let env = issues_env();
    let output = RecordingOutput::new();
    let factory = |config: LabelerConfig| -> Result<Box<dyn pipeline::Executor>, pipeline::BoxError> {
        assert_eq!(config.id, SubjectId::new(42));
        Ok(Box::new(Noop))
    };

    ActionRunner::new(&env, &output, factory).run().unwrap();
}

#[test]
fn engine_sees_republished_token_and_defaulted_log_level() {
    struct Noop;
    impl pipeline::Executor for Noop {
        fn execute(&mut self) -> Result<(), pipeline::BoxError> {
            Ok(())
        }
    }

    let env = issues_env()
        .with("INPUT_GITHUB_TOKEN", "token")
        .with("LOG_LEVEL", "");
    env.remove("GITHUB_TOKEN");
    let output = RecordingOutput::new();
    let seen = std::sync::Mutex::new(None);
    let factory = |_: LabelerConfig| -> Result<Box<dyn pipeline::Executor>, pipeline::BoxError> {
        *seen.lock().unwrap() = Some((env.var("GITHUB_TOKEN"), env.var("LOG_LEVEL")));
        Ok(Box::new(Noop))
    };

    ActionRunner::new(&env, &output, factory).run().unwrap();

    assert_eq!(
        seen.into_inner().unwrap(),
        Some((Some("token".to_owned()), Some("info".to_owned())))
    );
    assert!(output.contains(DEPRECATION_LINE));
}
