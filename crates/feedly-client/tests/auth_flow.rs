use std::collections::HashMap;

use futures_util::future::FutureExt;
use time::{Duration, OffsetDateTime};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

use feedly_client::{Auth, Error, FeedlyClient, Settings, models::{AuthorizeParams, TokenParams}};

async fn try_start_mock() -> Option<MockServer> {
    let fut = MockServer::start();
    let fut = std::panic::AssertUnwindSafe(fut);
    fut.catch_unwind().await.ok()
}

fn settings(endpoint: &str) -> Settings {
    Settings::builder()
        .client_id("client-id")
        .client_secret("client-secret")
        .redirect_uri("https://app.example.com/callback")
        .user_agent("feedly-client-tests")
        .endpoint(endpoint)
        .build()
        .expect("settings")
}

fn client(endpoint: &str, auth: Auth) -> FeedlyClient {
    FeedlyClient::builder()
        .settings(settings(endpoint))
        .auth(auth)
        .build()
        .expect("client")
}

fn token_body(refresh_token: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({
        "id": "user-1",
        "access_token": "fresh-access",
        "expires_in": 3600,
        "token_type": "Bearer",
        "plan": "pro",
    });
    if let Some(token) = refresh_token {
        body["refresh_token"] = token.into();
    }
    body
}

fn expired_auth() -> Auth {
    Auth {
        refresh_token: Some("stored-refresh".into()),
        access_token: Some("stale-access".into()),
        expires: Some(OffsetDateTime::now_utc() - Duration::hours(1)),
        ..Default::default()
    }
}

#[test]
fn redirect_url_stores_nonce_and_seeds_defaults() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let url = client
        .redirect_url(&AuthorizeParams::default())
        .expect("redirect url");

    assert!(url.as_str().starts_with("https://cloud.feedly.com/v3/auth/auth?"));
    let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(query.get("response_type").map(String::as_str), Some("code"));
    assert_eq!(query.get("client_id").map(String::as_str), Some("client-id"));
    assert_eq!(
        query.get("redirect_uri").map(String::as_str),
        Some("https://app.example.com/callback")
    );
    assert_eq!(
        query.get("scope").map(String::as_str),
        Some("https://cloud.feedly.com/subscriptions")
    );
    // The nonce ends up both in the URL and in the stored session.
    let state = query.get("state").cloned().expect("state in query");
    assert_eq!(state.len(), 32);
    assert_eq!(client.auth().state, Some(state));
}

#[test]
fn redirect_url_prefers_caller_state_and_redirect() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let url = client
        .redirect_url(&AuthorizeParams {
            state: Some("custom-state".into()),
            redirect_uri: Some("https://other.example.com/cb".into()),
            ..Default::default()
        })
        .expect("redirect url");

    let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(query.get("state").map(String::as_str), Some("custom-state"));
    assert_eq!(
        query.get("redirect_uri").map(String::as_str),
        Some("https://other.example.com/cb")
    );
    assert_eq!(client.auth().state.as_deref(), Some("custom-state"));
}

#[tokio::test]
async fn redirect_surfaces_the_authorization_location() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping redirect_surfaces_the_authorization_location: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/auth/auth"))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "location",
            "https://app.example.com/callback?code=code-1&state=nonce",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let response = client
        .redirect(&AuthorizeParams::default())
        .await
        .expect("redirect response");
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(
        response.raw().location(),
        Some("https://app.example.com/callback?code=code-1&state=nonce")
    );
}

#[tokio::test]
async fn token_exchange_replaces_the_session() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping token_exchange_replaces_the_session: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .and(body_string_contains("\"grant_type\":\"authorization_code\""))
        .and(body_string_contains("\"code\":\"code-1\""))
        .and(body_string_contains("\"client_secret\":\"client-secret\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(Some("fresh-refresh"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let auth = client
        .token(TokenParams {
            code: "code-1".into(),
            state: None,
        })
        .await
        .expect("token exchange");

    assert_eq!(auth.access_token.as_deref(), Some("fresh-access"));
    assert_eq!(auth.refresh_token.as_deref(), Some("fresh-refresh"));
    assert!(auth.created.is_some());
    assert!(client.authenticated());
    assert_eq!(client.auth(), auth);
}

#[tokio::test]
async fn token_with_empty_code_fails_before_any_io() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping token_with_empty_code_fails_before_any_io: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let err = client
        .token(TokenParams {
            code: String::new(),
            state: None,
        })
        .await
        .expect_err("empty code");
    assert!(matches!(err, Error::InvalidParameter(_)), "{err:?}");
}

#[tokio::test]
async fn token_with_mismatched_state_fails_before_any_io() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping token_with_mismatched_state_fails_before_any_io: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(
        &server.uri(),
        Auth {
            state: Some("expected-nonce".into()),
            ..Default::default()
        },
    );
    let err = client
        .token(TokenParams {
            code: "code-1".into(),
            state: Some("tampered-nonce".into()),
        })
        .await
        .expect_err("state mismatch");
    match err {
        Error::InvalidCsrf { expected, received } => {
            assert_eq!(expected, "expected-nonce");
            assert_eq!(received, "tampered-nonce");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn refresh_uses_the_stored_token_and_preserves_it() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping refresh_uses_the_stored_token_and_preserves_it: mock server unavailable");
            return;
        }
    };
    // The refresh grant returns no refresh_token; the stored one survives.
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .and(body_string_contains("\"grant_type\":\"refresh_token\""))
        .and(body_string_contains("\"refresh_token\":\"stored-refresh\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), expired_auth());
    let auth = client.refresh().await.expect("refresh");
    assert_eq!(auth.access_token.as_deref(), Some("fresh-access"));
    assert_eq!(auth.refresh_token.as_deref(), Some("stored-refresh"));
    assert!(client.authenticated());
}

#[tokio::test]
async fn refresh_without_a_stored_token_fails() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let err = client.refresh().await.expect_err("no refresh token");
    assert!(matches!(err, Error::InvalidParameter(_)), "{err:?}");
}

#[tokio::test]
async fn revoke_with_a_live_token_logs_out_remotely() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping revoke_with_a_live_token_logs_out_remotely: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(
        &server.uri(),
        Auth {
            access_token: Some("live-access".into()),
            expires: Some(OffsetDateTime::now_utc() + Duration::hours(1)),
            ..Default::default()
        },
    );
    client.revoke().await.expect("revoke");
    assert_eq!(client.auth(), Auth::default());
}

#[tokio::test]
async fn revoke_with_an_expired_token_only_clears_local_state() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping revoke_with_an_expired_token_only_clears_local_state: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server.uri(), expired_auth());
    client.revoke().await.expect("revoke");
    assert_eq!(client.auth(), Auth::default());
}

#[tokio::test]
async fn revoke_without_a_token_fails() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let err = client.revoke().await.expect_err("nothing to revoke");
    assert!(matches!(err, Error::InvalidParameter(_)), "{err:?}");
}

#[tokio::test]
async fn restore_heals_an_expired_session_through_refresh() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping restore_heals_an_expired_session_through_refresh: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .and(body_string_contains("\"grant_type\":\"refresh_token\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let auth = client.restore(expired_auth()).await.expect("restore");
    assert_eq!(auth.access_token.as_deref(), Some("fresh-access"));
    assert!(client.authenticated());
}

#[tokio::test]
async fn restore_heals_a_partial_session_without_an_access_token() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping restore_heals_a_partial_session_without_an_access_token: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .and(body_string_contains("\"grant_type\":\"refresh_token\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    // Persisted storage may hold only the refresh token and a stale expiry.
    let client = client(&server.uri(), Auth::default());
    let partial = Auth {
        refresh_token: Some("stored-refresh".into()),
        expires: Some(OffsetDateTime::now_utc() - Duration::hours(1)),
        ..Default::default()
    };
    let auth = client.restore(partial).await.expect("restore");
    assert_eq!(auth.access_token.as_deref(), Some("fresh-access"));
    assert_eq!(auth.refresh_token.as_deref(), Some("stored-refresh"));
    assert!(client.authenticated());
}

#[tokio::test]
async fn restore_adopts_a_live_session_as_is() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let live = Auth {
        access_token: Some("live-access".into()),
        refresh_token: Some("stored-refresh".into()),
        expires: Some(OffsetDateTime::now_utc() + Duration::hours(1)),
        ..Default::default()
    };
    let auth = client.restore(live.clone()).await.expect("restore");
    assert_eq!(auth, live);
    assert_eq!(client.auth(), live);
}
