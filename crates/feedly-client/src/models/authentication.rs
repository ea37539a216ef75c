use serde::Serialize;

/// Wire request for `GET /auth/auth`. All fields are optional at the type
/// level so seeded defaults (`response_type`, `scope`) can fill the gaps;
/// the endpoint contract still rejects a build missing a required field.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AuthorizeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Round-tripped by the authorization server; used as a CSRF nonce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Wire request for `POST /auth/token` with the authorization-code grant.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TokenExchangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Wire request for `POST /auth/token` with the refresh-token grant.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RefreshTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

/// Caller-facing overrides for starting the authorization flow. Credentials
/// and defaults come from the client settings.
#[derive(Clone, Debug, Default)]
pub struct AuthorizeParams {
    /// Access scope; defaults to the subscriptions scope when omitted.
    pub scope: Option<String>,
    /// CSRF state; a random nonce is generated when omitted.
    pub state: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Caller-facing parameters for exchanging an authorization code.
#[derive(Clone, Debug, Default)]
pub struct TokenParams {
    pub code: String,
    /// State echoed by the authorization server, checked against the stored
    /// nonce when both are present.
    pub state: Option<String>,
}
