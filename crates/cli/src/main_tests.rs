use std::io::Write;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::{FAIL_IF_XL_VAR, FILES_TO_IGNORE_VAR, MESSAGE_IF_XL_VAR, TOKEN_VAR};

fn vars(pairs: &[(&str, &str)]) -> Vars {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn event_file(additions: u64, deletions: u64) -> tempfile::NamedTempFile {
    let payload = json!({
        "number": 42,
        "pull_request": { "number": 42, "additions": additions, "deletions": deletions },
        "repository": { "name": "widgets", "owner": { "login": "octo" } }
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(payload.to_string().as_bytes()).unwrap();
    file
}

fn actions_vars(server: &MockServer, event: &tempfile::NamedTempFile) -> Vars {
    let api_url = server.uri();
    vars(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "pull_request"),
        ("GITHUB_EVENT_PATH", event.path().to_str().unwrap()),
        ("GITHUB_API_URL", api_url.as_str()),
        (TOKEN_VAR, "t0ken"),
    ])
}

async fn run_with(vars: &Vars) -> anyhow::Result<()> {
    run(vars, &RunnerContext::from_vars(vars)).await
}

#[test]
fn test_escape_workflow_data() {
    assert_eq!(escape_workflow_data("plain message"), "plain message");
    assert_eq!(
        escape_workflow_data("100% broken\r\nsecond line"),
        "100%25 broken%0D%0Asecond line"
    );
}

#[tokio::test]
async fn test_outside_actions_is_a_no_op() {
    assert!(run_with(&vars(&[])).await.is_ok());
}

#[tokio::test]
async fn test_non_pull_request_event_is_a_no_op() {
    let vars = vars(&[("GITHUB_ACTIONS", "true"), ("GITHUB_EVENT_NAME", "push")]);
    assert!(run_with(&vars).await.is_ok());
}

#[tokio::test]
async fn test_missing_token_fails() {
    let vars = vars(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "pull_request"),
    ]);
    let err = run_with(&vars).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SizingError>(),
        Some(SizingError::Configuration { .. })
    ));
}

#[tokio::test]
async fn test_missing_event_path_fails() {
    let vars = vars(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "pull_request"),
        (TOKEN_VAR, "t0ken"),
    ]);
    let err = run_with(&vars).await.unwrap_err();
    assert!(err.to_string().contains("GITHUB_EVENT_PATH"));
}

#[tokio::test]
async fn test_labels_pull_request_from_event_totals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/42/labels"))
        .and(body_json(json!({ "labels": ["size/l"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let event = event_file(300, 250);
    run_with(&actions_vars(&server, &event)).await.unwrap();
}

#[tokio::test]
async fn test_ignore_patterns_use_file_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/pulls/42/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "filename": "a.go", "changes": 5 },
            { "filename": "b.md", "changes": 50 }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/42/labels"))
        .and(body_json(json!({ "labels": ["size/xs"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let event = event_file(5, 50);
    let mut vars = actions_vars(&server, &event);
    vars.insert(FILES_TO_IGNORE_VAR.to_string(), "*.md".to_string());

    run_with(&vars).await.unwrap();
}

#[tokio::test]
async fn test_xl_with_fail_flag_comments_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/42/labels"))
        .and(body_json(json!({ "labels": ["size/xl"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/42/comments"))
        .and(body_json(json!({ "body": "Please split this up" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let event = event_file(900, 200);
    let mut vars = actions_vars(&server, &event);
    vars.insert(FAIL_IF_XL_VAR.to_string(), "true".to_string());
    vars.insert(
        MESSAGE_IF_XL_VAR.to_string(),
        "Please split this up".to_string(),
    );

    let err = run_with(&vars).await.unwrap_err();
    assert_eq!(err.to_string(), "PR size is XL, make it shorter, please!");
}

#[tokio::test]
async fn test_label_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/widgets/issues/42/labels"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "Resource not accessible by integration" })),
        )
        .mount(&server)
        .await;

    let event = event_file(1, 1);
    let err = run_with(&actions_vars(&server, &event)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error happened while adding label: GitHub API returned 403: Resource not accessible by integration"
    );
}
