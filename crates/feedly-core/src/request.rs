use std::{borrow::Cow, marker::PhantomData};

use reqwest::{
    Method, StatusCode,
    header::{HeaderMap, LOCATION},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;

/// How the transport should treat HTTP redirect responses for a single call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RedirectMode {
    /// Follow redirects transparently (transport default).
    #[default]
    Follow,
    /// Surface the redirect response so the caller can read its target.
    ///
    /// The authorize endpoint relies on this to capture the `code`/`state`
    /// pair from the redirect location instead of chasing it.
    Manual,
}

/// Per-call overrides applied on top of an endpoint template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestInit {
    pub redirect: RedirectMode,
}

impl RequestInit {
    pub const fn manual_redirect() -> Self {
        Self {
            redirect: RedirectMode::Manual,
        }
    }
}

/// A fully-built, validated request ready for the transport collaborator.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub init: RequestInit,
}

/// Raw transport response: status line, headers and buffered body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// The body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// The `Location` header of a captured redirect, if present.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
    }
}

/// A gated response carrying the expected payload type as a phantom tag.
#[derive(Debug)]
pub struct ApiResponse<R = ()> {
    raw: RawResponse,
    _marker: PhantomData<fn() -> R>,
}

impl<R> ApiResponse<R> {
    pub(crate) fn new(raw: RawResponse) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.raw.status
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn into_raw(self) -> RawResponse {
        self.raw
    }
}

impl<R: DeserializeOwned> ApiResponse<R> {
    /// Deserialize the response body into the endpoint's declared shape.
    pub fn parse(&self) -> Result<R, Error> {
        self.raw.json()
    }
}

/// Classify a transport response by status code before handing it back.
///
/// 401, 403 and 429 map to their dedicated error kinds; any other status of
/// 400 or above becomes a generic [`Error::Response`]. Everything below 400
/// (including captured redirects) passes through unchanged. Classification is
/// purely status-driven; the body is preserved for the caller to inspect.
pub fn check_status<R>(raw: RawResponse) -> Result<ApiResponse<R>, Error> {
    match raw.status.as_u16() {
        401 => Err(Error::Unauthorized(raw)),
        403 => Err(Error::Forbidden(raw)),
        429 => Err(Error::RateLimit(raw)),
        status if status >= 400 => Err(Error::Response(raw)),
        _ => Ok(ApiResponse::new(raw)),
    }
}
