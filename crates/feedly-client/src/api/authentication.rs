use feedly_core::{Endpoint, TokenResponse, optional, required};

use crate::models::{AuthorizeRequest, RefreshTokenRequest, TokenExchangeRequest};

/// The OAuth2 surface: authorization redirect, code exchange, token refresh
/// and revocation. Both token grants hit the same URL and differ only in the
/// seeded `grant_type`.
#[derive(Debug)]
pub struct AuthenticationApi {
    /// Starts the authorization flow. Redirects are never followed so the
    /// `Location` of the response can be captured by the caller.
    pub authorize: Endpoint<AuthorizeRequest>,
    pub token: Endpoint<TokenExchangeRequest, TokenResponse>,
    pub refresh: Endpoint<RefreshTokenRequest, TokenResponse>,
    pub revoke: Endpoint,
}

impl AuthenticationApi {
    pub const fn new() -> Self {
        Self {
            authorize: Endpoint::get("/auth/auth")
                .manual_redirect()
                .query_params(const {
                    &[
                        required("response_type"),
                        required("client_id"),
                        required("redirect_uri"),
                        required("scope"),
                        optional("state"),
                    ]
                })
                .seeds(&[
                    ("response_type", "code"),
                    ("scope", "https://cloud.feedly.com/subscriptions"),
                ]),
            token: Endpoint::post("/auth/token")
                .body_params(const {
                    &[
                        required("code"),
                        required("client_id"),
                        required("client_secret"),
                        required("redirect_uri"),
                        required("grant_type"),
                        optional("state"),
                    ]
                })
                .seeds(&[("grant_type", "authorization_code")]),
            refresh: Endpoint::post("/auth/token")
                .body_params(const {
                    &[
                        required("refresh_token"),
                        required("client_id"),
                        required("client_secret"),
                        required("grant_type"),
                    ]
                })
                .seeds(&[("grant_type", "refresh_token")]),
            revoke: Endpoint::post("/auth/logout").auth(),
        }
    }
}

impl Default for AuthenticationApi {
    fn default() -> Self {
        Self::new()
    }
}
