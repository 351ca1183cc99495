#![allow(clippy::unwrap_used)]
// Integration tests for `LegacyClient` over `HttpTransport` using wiremock.
//
// The client is blocking, so every call runs inside `spawn_blocking` while
// the mock server keeps serving on the async runtime.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unifold_api::{ControllerPlatform, Error, LegacyClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn with_client<R, F>(server: &MockServer, platform: ControllerPlatform, f: F) -> R
where
    R: Send + 'static,
    F: FnOnce(LegacyClient) -> R + Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let base_url = Url::parse(&uri).unwrap();
        let client = LegacyClient::new(base_url, platform, &TransportConfig::default()).unwrap();
        f(client)
    })
    .await
    .unwrap()
}

async fn classic<R, F>(server: &MockServer, f: F) -> R
where
    R: Send + 'static,
    F: FnOnce(LegacyClient) -> R + Send + 'static,
{
    with_client(server, ControllerPlatform::ClassicController, f).await
}

fn raw_strings(data: &[Box<serde_json::value::RawValue>]) -> Vec<String> {
    data.iter().map(|r| r.get().to_owned()).collect()
}

// ── Response validation ─────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("foo", "text/plain; charset=utf-8"))
        .mount(&server)
        .await;

    let result = classic(&server, |c| c.list_sites()).await;

    match result {
        Err(Error::BadContentType { content_type }) => {
            assert!(content_type.starts_with("text/plain"), "got {content_type}");
        }
        other => panic!("expected BadContentType, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_status_with_json_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw(r#"{"data":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let result = classic(&server, |c| c.list_devices("default")).await;

    match result {
        Err(ref err @ Error::BadStatus { status }) => {
            assert_eq!(status, 500);
            assert_eq!(err.status(), Some(500));
        }
        other => panic!("expected BadStatus, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("foo", "application/json"))
        .mount(&server)
        .await;

    let result = classic(&server, |c| c.list_sites()).await;

    assert!(
        matches!(result, Err(Error::BadEnvelope(_))),
        "expected BadEnvelope, got: {result:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_legacy_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.InvalidObject" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = classic(&server, |c| c.list_devices("default")).await;

    match result {
        Err(Error::Api { ref message }) => assert!(message.contains("InvalidObject")),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_login_posts_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "test", "password": "test" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    classic(&server, |c| {
        let secret: secrecy::SecretString = "test".to_owned().into();
        c.login("test", &secret)
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.Invalid" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = classic(&server, |c| {
        let secret: secrecy::SecretString = "wrong".to_owned().into();
        c.login("admin", &secret)
    })
    .await;

    match result {
        Err(ref err @ Error::BadStatus { status: 401 }) => assert!(err.is_auth_rejected()),
        other => panic!("expected BadStatus 401, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_cookie_is_replayed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "unifises=abc123; Path=/")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .and(header("cookie", "unifises=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(2)
        .mount(&server)
        .await;

    classic(&server, |c| {
        let secret: secrecy::SecretString = "pw".to_owned().into();
        c.login("admin", &secret)?;
        c.list_sites()?;
        c.list_sites()
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    classic(&server, |c| c.logout()).await.unwrap();
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_sites_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "ok" },
            "data": [
                { "name": "default", "desc": "Company" },
                { "name": "branch", "desc": "Branch" }
            ]
        })))
        .mount(&server)
        .await;

    let sites = classic(&server, |c| c.list_sites()).await.unwrap();

    assert_eq!(
        raw_strings(&sites),
        vec![
            r#"{"name":"default","desc":"Company"}"#.to_owned(),
            r#"{"name":"branch","desc":"Branch"}"#.to_owned(),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_site_scoped_paths() {
    let server = MockServer::start().await;

    for (suffix, id) in [("stat/sta", "sta1"), ("list/alarm", "alarm1")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/s/branch/{suffix}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "_id": id }] })),
            )
            .mount(&server)
            .await;
    }

    let (stations, alarms) = classic(&server, |c| {
        (c.list_stations("branch").unwrap(), c.list_alarms("branch").unwrap())
    })
    .await;

    assert_eq!(raw_strings(&stations), vec![r#"{"_id":"sta1"}"#.to_owned()]);
    assert_eq!(raw_strings(&alarms), vec![r#"{"_id":"alarm1"}"#.to_owned()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unifi_os_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "admin" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/proxy/network/api/s/default/stat/device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "ok" },
            "data": [{ "_id": "dev1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let devices = with_client(&server, ControllerPlatform::UnifiOs, |c| {
        let secret: secrecy::SecretString = "pw".to_owned().into();
        c.login("admin", &secret)?;
        c.list_devices("default")
    })
    .await
    .unwrap();

    assert_eq!(raw_strings(&devices), vec![r#"{"_id":"dev1"}"#.to_owned()]);
}
