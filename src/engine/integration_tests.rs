// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end runs over the fixture batches in `configs/`.

use std::sync::Arc;

use crate::config::{load_and_validate_config, Config};
use crate::engine::{run_concurrently, ConstructionStrategy, Session};
use crate::model::MessageId;
use crate::validation::{Severity, Subject};

fn session(path: &str) -> Session {
    let config = load_and_validate_config(path).expect("fixture should load");
    Session::new(config)
}

fn inline_session(yaml: &str) -> Session {
    let config: Config = serde_yaml::from_str(yaml).expect("inline batch should parse");
    Session::new(config)
}

#[test]
fn test_train_logging_batch_resolves_cleanly() {
    let batch = session("configs/train-logging.yaml").run().expect("run should succeed");

    let names: Vec<&str> = batch.interfaces.iter().map(|r| r.interface.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "com.acme.rail.CommonLogger",
            "com.acme.rail.TrainLogger",
            "com.acme.rail.TrainMessages"
        ]
    );
    assert!(!batch.has_errors());
    assert_eq!(batch.warning_count(), 1);
    assert!(batch.interfaces.iter().all(|r| r.generation_allowed));

    let common = batch.report("com.acme.rail.CommonLogger").expect("report");
    assert_eq!(
        common.delegated,
        vec!["info(java.lang.Object): void", "isDebugEnabled(): boolean"]
    );
}

#[test]
fn test_train_logger_inherits_the_nearest_id() {
    let batch = session("configs/train-logging.yaml").run().expect("run should succeed");
    let logger = batch.report("com.acme.rail.TrainLogger").expect("report");

    let delayed: Vec<_> = logger.descriptors.iter().filter(|d| d.name == "delayed").collect();
    assert_eq!(delayed.len(), 2);
    assert!(delayed.iter().all(|d| d.is_overloaded));

    let short = delayed
        .iter()
        .find(|d| d.format_parameter_count == 1)
        .expect("one-argument overload");
    let message = short.message.as_ref().expect("own message");
    assert_eq!(message.id, MessageId::Explicit(2));
    assert_eq!(short.message_method_name, "delayed1$str");
    assert_eq!(short.translation_key, "delayed.1");
}

#[test]
fn test_train_messages_construction_strategies() {
    let batch = session("configs/train-logging.yaml").run().expect("run should succeed");
    let messages = batch.report("com.acme.rail.TrainMessages").expect("report");

    let strategy = |name: &str| {
        messages
            .descriptors
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| d.construction.clone())
    };
    assert_eq!(
        strategy("noSuchTrain"),
        Some(ConstructionStrategy::Message { init_cause: false })
    );
    assert_eq!(strategy("boardingFailed"), Some(ConstructionStrategy::MessageAndCause));
    assert_eq!(
        strategy("signalFailure"),
        Some(ConstructionStrategy::Default { init_cause: true })
    );
    assert_eq!(strategy("platformLabel"), None);

    let warnings: Vec<_> = messages
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].subject,
        Subject::Method {
            interface: "com.acme.rail.TrainMessages".to_string(),
            method: "signalFailure(java.lang.String, java.lang.Throwable)".to_string(),
        }
    );
    assert!(warnings[0].text.contains("will be ignored"));
}

#[test]
fn test_overload_without_message_is_reported() {
    let batch = session("configs/overloads.yaml").run().expect("run should succeed");
    let report = batch.report("com.acme.Overloads").expect("report");

    assert!(report.descriptors.iter().all(|d| d.is_overloaded));
    let second = &report.descriptors[1];
    assert!(!second.is_valid);
    assert!(second.message.is_none());
    assert!(!report.generation_allowed);

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].subject.to_string(),
        "com.acme.Overloads#foo(java.lang.String, java.lang.String)"
    );
    assert!(report.diagnostics[0]
        .text
        .contains("(2) does not match foo(java.lang.String) which has 1"));
}

fn duplicate_ids(first: u32, second: u32) -> String {
    format!(
        r#"
interfaces:
  - name: com.acme.Bars
    kind: logger
    methods:
      - name: bar
        log_level: info
        message: {{ value: "bar %s", id: {} }}
        parameters: [{{ name: a, type: java.lang.String }}]
      - name: bar
        log_level: info
        message: {{ value: "bar %s %s", id: {} }}
        parameters: [{{ name: a, type: java.lang.String }}, {{ name: b, type: java.lang.String }}]
"#,
        first, second
    )
}

#[test]
fn test_duplicate_explicit_ids_report_one_error() {
    let batch = inline_session(&duplicate_ids(5, 5)).run().expect("run should succeed");
    let errors: Vec<_> = batch.diagnostics().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].subject.to_string(),
        "com.acme.Bars#bar(java.lang.String, java.lang.String)"
    );

    let batch = inline_session(&duplicate_ids(5, 6)).run().expect("run should succeed");
    assert_eq!(batch.error_count(), 0);
}

#[test]
fn test_runs_are_deterministic() {
    let first = session("configs/train-logging.yaml").run().expect("first run");
    let second = session("configs/train-logging.yaml").run().expect("second run");
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).expect("serializes");
    let second_json = serde_json::to_string(&second).expect("serializes");
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn test_concurrent_runner_matches_sequential_run() {
    let sequential = session("configs/train-logging.yaml").run().expect("sequential run");
    let shared = Arc::new(session("configs/train-logging.yaml"));
    let concurrent = run_concurrently(shared.clone(), shared.options().get_max_concurrency())
        .await
        .expect("concurrent run");
    assert_eq!(concurrent, sequential);
}
