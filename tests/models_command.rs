//! End-to-end runs of `models` against a local mock provider.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        std::process::Command::new(env!("CARGO_BIN_EXE_llm-models-viewer"))
            .args(&args)
            .current_dir(tmp.path())
            .env_remove("OPENAI_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .output()
            .expect("binary not found - run cargo build first")
    })
    .await
    .expect("join")
}

fn models_args(provider: &str, server: &MockServer, extra: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "models".into(),
        "--provider".into(),
        provider.into(),
        "--endpoint".into(),
        format!("{}/v1/models", server.uri()),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

#[tokio::test]
async fn prints_table_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer sk-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"id": "old-model", "created": 100, "owned_by": "system"},
            {"id": "new-model", "created": 1700000000, "owned_by": "openai"},
            {"id": "undated"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(models_args("openai", &server, &["--api-key", "sk-e2e"])).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Showing 3 models"), "{}", stdout);

    let new_pos = stdout.find("new-model").unwrap();
    let old_pos = stdout.find("old-model").unwrap();
    let undated_pos = stdout.find("undated").unwrap();
    assert!(new_pos < old_pos && old_pos < undated_pos, "{}", stdout);
    assert!(stdout.contains("N/A"));
    assert!(stdout.contains("OpenAI"), "owner falls back to provider name");
}

#[tokio::test]
async fn gemini_key_goes_in_query_and_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("key", "gm-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": [
            {"name": "models/gemini-1.5-pro"},
            {"name": "models/embedding-001"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(models_args(
        "gemini",
        &server,
        &["--api-key", "gm-e2e", "--json", "--query", "gemini"],
    ))
    .await;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["identifier"], "models/gemini-1.5-pro");
    assert_eq!(list[0]["owner"], "Gemini");
    assert!(list[0]["created_at"].is_null());
}

#[tokio::test]
async fn http_error_prints_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_api_key"))
        .mount(&server)
        .await;

    let output = run(models_args("openai", &server, &["--api-key", "bad"])).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error 401"), "{}", stderr);
    assert!(stderr.contains("invalid_api_key"), "{}", stderr);
    assert!(output.stdout.is_empty(), "no partial results on error");
}

#[tokio::test]
async fn api_key_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer sk-piped"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let args = models_args("openai", &server, &["--api-key", "-"]);
    let output = tokio::task::spawn_blocking(move || {
        use std::io::Write;
        use std::process::Stdio;

        let tmp = tempfile::TempDir::new().expect("temp dir");
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_llm-models-viewer"))
            .args(&args)
            .current_dir(tmp.path())
            .env_remove("OPENAI_API_KEY")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(b"sk-piped\n")
            .unwrap();
        child.wait_with_output().unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Showing 0 models"));
}
