use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};

use feedly_core::{ApiRequest, Error, RawResponse, RedirectMode};

/// Network collaborator executing fully-built requests.
///
/// The client is generic over this seam so tests can substitute a spy and
/// callers can layer retries or proxying outside the core.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error>;
}

/// External caching collaborator for cache-flagged endpoints.
///
/// The client never stores responses itself; it only forwards eviction
/// notices keyed by the resolved request URL.
pub trait CacheBackend: Send + Sync {
    fn evict(&self, key: &str);
}

/// reqwest-backed [`Transport`].
///
/// Holds a second client with redirects disabled so manual-redirect calls
/// (the OAuth authorize endpoint) surface the 3xx response instead of
/// following it.
pub struct HttpTransport {
    follow: Client,
    manual: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let follow = Client::builder().timeout(timeout).build()?;
        let manual = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { follow, manual })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let client = match request.init.redirect {
            RedirectMode::Follow => &self.follow,
            RedirectMode::Manual => &self.manual,
        };

        let mut builder = client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
