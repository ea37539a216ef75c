use std::sync::{Arc, RwLock, RwLockReadGuard};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Serialize, de::DeserializeOwned};
use time::OffsetDateTime;
use tracing::debug;
use url::Url;

use feedly_core::{
    ApiResponse, Auth, Endpoint, Error, RequestInit, TokenResponse, check_status, nonce,
};

use crate::{
    api::FeedlyApi,
    config::Settings,
    models::{
        AuthorizeParams, AuthorizeRequest, RefreshTokenRequest, TokenExchangeRequest, TokenParams,
    },
    transport::{CacheBackend, HttpTransport, Transport},
};

/// Typed client for the cloud API.
///
/// Pairs the static endpoint tree with application settings, an OAuth
/// session and a transport collaborator. Session transitions replace the
/// whole [`Auth`] value under a lock, so a failed transition never leaves a
/// half-updated state behind.
pub struct FeedlyClient {
    settings: Settings,
    api: FeedlyApi,
    auth: RwLock<Auth>,
    transport: Arc<dyn Transport>,
    cache: Option<Arc<dyn CacheBackend>>,
}

/// Builder for [`FeedlyClient`], mirroring [`Settings::builder`].
#[derive(Default)]
pub struct FeedlyClientBuilder {
    settings: Option<Settings>,
    auth: Auth,
    transport: Option<Arc<dyn Transport>>,
    cache: Option<Arc<dyn CacheBackend>>,
}

impl FeedlyClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Start from a previously persisted session instead of an empty one.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Substitute the network collaborator (tests, retries, proxying).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Attach an external cache to receive eviction notices for
    /// cache-flagged endpoints.
    pub fn cache(mut self, cache: Arc<dyn CacheBackend>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Result<FeedlyClient, Error> {
        let settings = self
            .settings
            .ok_or_else(|| Error::InvalidParameter("settings are required".into()))?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(settings.timeout)?),
        };
        Ok(FeedlyClient {
            settings,
            api: FeedlyApi::new(),
            auth: RwLock::new(self.auth),
            transport,
            cache: self.cache,
        })
    }
}

impl FeedlyClient {
    pub fn builder() -> FeedlyClientBuilder {
        FeedlyClientBuilder::new()
    }

    /// Shorthand for a client with the default HTTP transport and no cache.
    pub fn new(settings: Settings) -> Result<Self, Error> {
        Self::builder().settings(settings).build()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The static endpoint tree, for dispatch through [`FeedlyClient::request`].
    pub fn api(&self) -> &FeedlyApi {
        &self.api
    }

    /// A snapshot of the current session state.
    pub fn auth(&self) -> Auth {
        self.read_auth().clone()
    }

    /// Whether the session holds a live access token.
    pub fn authenticated(&self) -> bool {
        self.read_auth().authenticated()
    }

    fn read_auth(&self) -> RwLockReadGuard<'_, Auth> {
        self.auth.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn replace_auth(&self, next: Auth) -> Auth {
        let mut guard = self.auth.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        debug!(
            authenticated = next.authenticated(),
            has_refresh_token = next.refresh_token.is_some(),
            "replacing session state"
        );
        *guard = next.clone();
        next
    }

    /// Execute an endpoint template with the given parameters.
    ///
    /// Builds and validates the request, attaches headers, hands it to the
    /// transport and gates the response by status code. Dropping the returned
    /// future aborts the call.
    pub async fn request<P: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<P, R>,
        params: &P,
    ) -> Result<ApiResponse<R>, Error> {
        self.dispatch(endpoint, params, None).await
    }

    /// Execute an endpoint template with per-call overrides on top of the
    /// template's own (e.g. forcing manual redirect handling).
    pub async fn request_with<P: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<P, R>,
        params: &P,
        init: RequestInit,
    ) -> Result<ApiResponse<R>, Error> {
        self.dispatch(endpoint, params, Some(init)).await
    }

    async fn dispatch<P: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<P, R>,
        params: &P,
        init: Option<RequestInit>,
    ) -> Result<ApiResponse<R>, Error> {
        let mut request = endpoint.build(params, &self.settings.endpoint, &self.settings.version)?;
        request.headers = self.headers(endpoint.opts.auth)?;
        if let Some(init) = init {
            request.init = init;
        }
        debug!(method = %request.method, url = %request.url, "dispatching request");
        let raw = self.transport.execute(request).await?;
        check_status(raw)
    }

    /// Resolve the final URL of an endpoint call without any network I/O.
    pub fn resolve<P: Serialize, R>(
        &self,
        endpoint: &Endpoint<P, R>,
        params: &P,
    ) -> Result<Url, Error> {
        endpoint.resolve(params, &self.settings.endpoint, &self.settings.version)
    }

    /// Notify the attached cache that an endpoint's entry is stale.
    ///
    /// The resolved URL doubles as the cache key. A no-op without a cache or
    /// for endpoints that are not cache-flagged.
    pub fn evict<P: Serialize, R>(
        &self,
        endpoint: &Endpoint<P, R>,
        params: &P,
    ) -> Result<(), Error> {
        if !endpoint.opts.cache {
            return Ok(());
        }
        if let Some(cache) = &self.cache {
            let url = self.resolve(endpoint, params)?;
            cache.evict(url.as_str());
        }
        Ok(())
    }

    /// Build the headers attached to every request.
    ///
    /// Auth-flagged calls fail before any I/O when no access token is held or
    /// the held token has expired.
    fn headers(&self, requires_auth: bool) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.settings.user_agent)
                .map_err(|_| Error::InvalidParameter("user_agent is not a valid header".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if requires_auth {
            let auth = self.read_auth();
            let Some(access_token) = auth.access_token.as_deref() else {
                return Err(Error::InvalidParameter(
                    "OAuth required: access_token is missing".into(),
                ));
            };
            if !auth.authenticated() {
                return Err(Error::ExpiredToken);
            }
            // The API uses `OAuth` as the authorization scheme, not `Bearer`.
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("OAuth {access_token}"))
                    .map_err(|_| Error::InvalidParameter("access_token is not a valid header".into()))?,
            );
        }
        Ok(headers)
    }

    fn authorize_request(&self, params: &AuthorizeParams, state: String) -> AuthorizeRequest {
        AuthorizeRequest {
            response_type: None,
            client_id: Some(self.settings.client_id.clone()),
            redirect_uri: Some(
                params
                    .redirect_uri
                    .clone()
                    .unwrap_or_else(|| self.settings.redirect_uri.clone()),
            ),
            scope: params.scope.clone(),
            state: Some(state),
        }
    }

    fn begin_authorization(&self, params: &AuthorizeParams) -> AuthorizeRequest {
        let state = params.state.clone().unwrap_or_else(nonce::random_hex);
        let next = self.read_auth().with_state(state.clone());
        self.replace_auth(next);
        self.authorize_request(params, state)
    }

    /// Start the authorization flow against the live endpoint.
    ///
    /// Stores a CSRF nonce in the session and performs the call with
    /// redirects disabled; the returned response carries the redirect
    /// `Location` holding the `code` and `state` pair.
    pub async fn redirect(&self, params: &AuthorizeParams) -> Result<ApiResponse<()>, Error> {
        let request = self.begin_authorization(params);
        self.request(&self.api.authentication.authorize, &request).await
    }

    /// Build the authorization URL for a browser redirect, without I/O.
    ///
    /// Stores the same CSRF nonce as [`FeedlyClient::redirect`] so the state
    /// echoed back to the redirect URI can be verified by `token`.
    pub fn redirect_url(&self, params: &AuthorizeParams) -> Result<Url, Error> {
        let request = self.begin_authorization(params);
        self.resolve(&self.api.authentication.authorize, &request)
    }

    /// Exchange an authorization code for an access and refresh token.
    ///
    /// When both a stored nonce and an echoed state are present they must
    /// match. On success the whole session state is replaced.
    pub async fn token(&self, params: TokenParams) -> Result<Auth, Error> {
        if params.code.is_empty() {
            return Err(Error::InvalidParameter("missing `code` parameter".into()));
        }
        if let Some(state) = params.state.as_deref() {
            self.validate_state(state)?;
        }

        let request = TokenExchangeRequest {
            code: Some(params.code),
            client_id: Some(self.settings.client_id.clone()),
            client_secret: Some(self.settings.client_secret.clone()),
            redirect_uri: Some(self.settings.redirect_uri.clone()),
            grant_type: None,
            state: params.state,
        };
        let response = self.request(&self.api.authentication.token, &request).await?;
        debug!("authorization code exchanged");
        self.store_token_response(&response.parse()?)
    }

    /// Compare a state echoed by the authorization server against the
    /// stored nonce. A session without a stored nonce accepts any state.
    pub fn validate_state(&self, received: &str) -> Result<(), Error> {
        match self.read_auth().state.as_deref() {
            Some(expected) if expected != received => Err(Error::InvalidCsrf {
                expected: expected.to_owned(),
                received: received.to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Obtain a fresh access token from the stored refresh token.
    pub async fn refresh(&self) -> Result<Auth, Error> {
        let Some(refresh_token) = self.read_auth().refresh_token.clone() else {
            return Err(Error::InvalidParameter("no refresh token found".into()));
        };
        self.refresh_with(refresh_token).await
    }

    /// Obtain a fresh access token from an explicitly supplied refresh token.
    pub async fn refresh_with(&self, refresh_token: String) -> Result<Auth, Error> {
        let request = RefreshTokenRequest {
            refresh_token: Some(refresh_token),
            client_id: Some(self.settings.client_id.clone()),
            client_secret: Some(self.settings.client_secret.clone()),
            grant_type: None,
        };
        let response = self.request(&self.api.authentication.refresh, &request).await?;
        debug!("access token refreshed");
        self.store_token_response(&response.parse()?)
    }

    fn store_token_response(&self, response: &TokenResponse) -> Result<Auth, Error> {
        let next = self
            .read_auth()
            .apply_token_response(response, OffsetDateTime::now_utc());
        Ok(self.replace_auth(next))
    }

    /// Invalidate the session.
    ///
    /// The remote logout is only attempted while the access token is still
    /// live; an expired token cannot authenticate the call. The local state
    /// is cleared in every case.
    pub async fn revoke(&self) -> Result<(), Error> {
        let auth = self.auth();
        if auth.access_token.is_none() {
            return Err(Error::InvalidParameter("no access token found".into()));
        }
        if auth.authenticated() {
            self.request(&self.api.authentication.revoke, &()).await?;
        }
        self.replace_auth(Auth::default());
        debug!("session revoked");
        Ok(())
    }

    /// Adopt a previously persisted session.
    ///
    /// A stale session that still carries a refresh token is healed by an
    /// immediate refresh, whether or not an access token was persisted with
    /// it; otherwise the state is adopted as-is.
    pub async fn restore(&self, auth: Auth) -> Result<Auth, Error> {
        let now = OffsetDateTime::now_utc();
        let heal =
            auth.refresh_token.is_some() && auth.expires.is_some_and(|expires| expires <= now);
        let restored = self.replace_auth(auth);
        if heal {
            return self.refresh().await;
        }
        Ok(restored)
    }
}
