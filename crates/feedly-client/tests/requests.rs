use std::sync::{Arc, Mutex};

use futures_util::future::FutureExt;
use time::{Duration, OffsetDateTime};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use feedly_client::{
    Auth, CacheBackend, Error, FeedlyClient, Settings,
    models::{StreamRequest, TagEntryRequest, TokenExchangeRequest},
};

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

fn live_auth() -> Auth {
    Auth {
        access_token: Some("token-123".into()),
        expires: Some(OffsetDateTime::now_utc() + Duration::hours(1)),
        ..Default::default()
    }
}

fn client(endpoint: &str, auth: Auth) -> FeedlyClient {
    FeedlyClient::builder()
        .settings(settings(endpoint))
        .auth(auth)
        .build()
        .expect("client")
}

#[tokio::test]
async fn authenticated_calls_carry_the_oauth_scheme() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping authenticated_calls_carry_the_oauth_scheme: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/profile"))
        .and(header("authorization", "OAuth token-123"))
        .and(header("user-agent", "feedly-client-tests"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "user-1",
            "email": "user@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), live_auth());
    let profile = client
        .request(&client.api().profile.get, &())
        .await
        .expect("profile response")
        .parse()
        .expect("profile body");
    assert_eq!(profile.id, "user-1");
    assert_eq!(profile.email.as_deref(), Some("user@example.com"));
}

#[tokio::test]
async fn missing_token_fails_before_any_io() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping missing_token_fails_before_any_io: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let err = client
        .request(&client.api().profile.get, &())
        .await
        .expect_err("no token");
    assert!(matches!(err, Error::InvalidParameter(_)), "{err:?}");
}

#[tokio::test]
async fn expired_token_fails_before_any_io() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping expired_token_fails_before_any_io: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(
        &server.uri(),
        Auth {
            access_token: Some("stale".into()),
            expires: Some(OffsetDateTime::now_utc() - Duration::minutes(1)),
            ..Default::default()
        },
    );
    let err = client
        .request(&client.api().profile.get, &())
        .await
        .expect_err("expired token");
    assert!(matches!(err, Error::ExpiredToken), "{err:?}");
}

#[tokio::test]
async fn missing_required_parameters_fail_before_any_io() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping missing_required_parameters_fail_before_any_io: mock server unavailable");
            return;
        }
    };
    Mock::given(method("POST"))
        .and(path("/v3/auth/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server.uri(), Auth::default());
    let err = client
        .request(
            &client.api().authentication.token,
            &TokenExchangeRequest::default(),
        )
        .await
        .expect_err("missing code");
    assert!(matches!(err, Error::InvalidParameter(_)), "{err:?}");
}

#[tokio::test]
async fn stream_contents_round_trip() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping stream_contents_round_trip: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(query_param("count", "20"))
        .and(query_param("unreadOnly", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "feed/https://example.com/rss",
            "updated": 1717243200000_i64,
            "continuation": "page-2",
            "items": [
                { "id": "entry-1", "title": "First", "unread": true },
                { "id": "entry-2", "title": "Second", "unread": false },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), live_auth());
    let params = StreamRequest {
        id: "feed/https://example.com/rss".into(),
        count: Some(20),
        unread_only: Some(true),
        ..Default::default()
    };
    let stream = client
        .request(&client.api().streams.contents, &params)
        .await
        .expect("stream response")
        .parse()
        .expect("stream body");
    assert_eq!(stream.continuation.as_deref(), Some("page-2"));
    assert_eq!(stream.items.len(), 2);
    assert_eq!(stream.items[0].id, "entry-1");
}

#[tokio::test]
async fn rate_limited_responses_map_to_their_own_error() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping rate_limited_responses_map_to_their_own_error: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/profile"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), live_auth());
    let err = client
        .request(&client.api().profile.get, &())
        .await
        .expect_err("rate limited");
    match err {
        Error::RateLimit(raw) => assert_eq!(raw.text(), "slow down"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_keep_the_raw_response() {
    let server = match try_start_mock().await {
        Some(srv) => srv,
        None => {
            eprintln!("skipping server_errors_keep_the_raw_response: mock server unavailable");
            return;
        }
    };
    Mock::given(method("GET"))
        .and(path("/v3/profile"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"errorMessage": "boom"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), live_auth());
    let err = client
        .request(&client.api().profile.get, &())
        .await
        .expect_err("server error");
    let raw = err.response().expect("raw response");
    assert_eq!(raw.status.as_u16(), 500);
    assert!(raw.text().contains("boom"));
}

#[test]
fn tag_ids_are_joined_and_encoded_into_the_path() {
    let client = client("https://cloud.feedly.com", Auth::default());
    let params = TagEntryRequest {
        ids: vec!["user/1/tag/news".into(), "user/1/tag/tech".into()],
        entry_id: "entry-1".into(),
    };
    let url = client
        .resolve(&client.api().tags.entry, &params)
        .expect("resolved url");
    assert_eq!(
        url.path(),
        "/v3/tags/user%2F1%2Ftag%2Fnews%2Cuser%2F1%2Ftag%2Ftech"
    );
}

#[derive(Default)]
struct RecordingCache {
    evicted: Mutex<Vec<String>>,
}

impl CacheBackend for RecordingCache {
    fn evict(&self, key: &str) {
        self.evicted
            .lock()
            .expect("cache lock")
            .push(key.to_owned());
    }
}

#[test]
fn evictions_use_the_resolved_url_as_the_key() {
    let cache = Arc::new(RecordingCache::default());
    let client = FeedlyClient::builder()
        .settings(settings("https://cloud.feedly.com"))
        .cache(cache.clone())
        .build()
        .expect("client");

    client
        .evict(&client.api().profile.get, &())
        .expect("evict cached endpoint");
    // Mutations are not cache-flagged, so no eviction notice is sent.
    client
        .evict(
            &client.api().authentication.token,
            &TokenExchangeRequest {
                code: Some("code-1".into()),
                client_id: Some("client-id".into()),
                client_secret: Some("client-secret".into()),
                redirect_uri: Some("https://app.example.com/callback".into()),
                ..Default::default()
            },
        )
        .expect("evict uncached endpoint");

    let evicted = cache.evicted.lock().expect("cache lock");
    assert_eq!(evicted.as_slice(), ["https://cloud.feedly.com/v3/profile"]);
}
