use anydesk_tool::commands::OK;
use anydesk_tool::{Cli, run};
use clap::Parser;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cli(server: &MockServer, args: &[&str]) -> Cli {
    let base_url = server.uri();
    let mut argv = vec![
        "anydesktool",
        "--license",
        "lic1",
        "--apikey",
        "key1",
        "--base-url",
        &base_url,
    ];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid arguments")
}

#[tokio::test]
async fn authtest_prints_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "license-id": "lic1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = assert_ok!(run(&cli(&server, &["authtest"])).await);
    assert_eq!(output, "success");
}

#[tokio::test]
async fn client_list_renders_records_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(query_param("sort", "alias"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "selected": 2,
            "list": [
                {"cid": 1, "alias": "one", "online": true},
                {"cid": 2, "online": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = assert_ok!(
        run(&cli(&server, &["client", "list", "--sort", "alias", "--limit", "2"])).await
    );
    let rendered: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(rendered["count"], 2);
    assert_eq!(rendered["selected"], 2);
    assert_eq!(rendered["offset"], 0);
    let records = rendered["list"].as_array().expect("array of clients");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["cid"], 1);
    assert_eq!(records[0]["alias"], "one");
    assert!(output.contains('\n'));
}

#[tokio::test]
async fn alias_clear_sends_null_and_prints_ok() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/clients/42"))
        .and(body_json(json!({"alias": null})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = assert_ok!(run(&cli(&server, &["client", "alias", "42", ""])).await);
    assert_eq!(output, OK);
}

#[tokio::test]
async fn session_close_posts_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/abc/action"))
        .and(body_json(json!({"action": "close"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let output = assert_ok!(run(&cli(&server, &["session", "close", "abc"])).await);
    assert_eq!(output, OK);
}

#[tokio::test]
async fn session_list_passes_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sessions"))
        .and(query_param("cid", "123"))
        .and(query_param("direction", "out"))
        .and(query_param("from", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 40,
            "selected": 0,
            "cid": 123,
            "direction": "out",
            "list": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = assert_ok!(
        run(&cli(
            &server,
            &["session", "list", "123", "--direction", "out", "--after", "1700000000"]
        ))
        .await
    );
    let rendered: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(rendered["count"], 40);
    assert_eq!(rendered["cid"], 123);
    assert_eq!(rendered["direction"], "out");
    assert_eq!(rendered["list"], json!([]));
}

#[tokio::test]
async fn api_error_carries_context_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "client not found"
        })))
        .mount(&server)
        .await;

    let err = run(&cli(&server, &["client", "get", "7"])).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("client 7: "));
    assert!(message.contains("404"));
    assert!(message.contains("client not found"));
}

#[tokio::test]
async fn blank_api_key_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let cli = Cli::try_parse_from([
        "anydesktool",
        "--license",
        "lic1",
        "--apikey",
        " ",
        "--base-url",
        &server.uri(),
        "sysinfo",
    ])
    .expect("valid arguments");

    let err = run(&cli).await.unwrap_err();
    assert!(format!("{err:#}").contains("missing API Key"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
