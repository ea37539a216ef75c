use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Subscription tier attached to an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Standard,
    Pro,
    Business,
}

/// OAuth session state held by the client.
///
/// Every transition replaces the whole value rather than editing fields in
/// place, so concurrent readers observe either the previous or the next state
/// atomically. The value is serializable so callers can persist it across
/// process lifetimes and feed it back through `restore`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    /// Token exchanged for a fresh access token when the session goes stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Bearer token attached to authenticated requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// When the access token was issued.
    #[serde(
        default,
        with = "time::serde::timestamp::milliseconds::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<OffsetDateTime>,
    /// When the access token expires; `None` means it does not expire.
    #[serde(
        default,
        with = "time::serde::timestamp::milliseconds::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires: Option<OffsetDateTime>,
    /// CSRF nonce round-tripped through the authorize redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Subscription tier reported by the token endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

impl Auth {
    /// Whether the session holds a live access token.
    pub fn authenticated(&self) -> bool {
        self.authenticated_at(OffsetDateTime::now_utc())
    }

    pub(crate) fn authenticated_at(&self, now: OffsetDateTime) -> bool {
        self.access_token.is_some() && self.expires.is_none_or(|expires| expires > now)
    }

    /// Whether the session holds a token whose expiry has passed.
    pub fn expired(&self) -> bool {
        self.access_token.is_some() && !self.authenticated()
    }

    /// A copy of this state with the CSRF nonce replaced.
    pub fn with_state(&self, state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            ..self.clone()
        }
    }

    /// Fold a token-endpoint response into a new auth state.
    ///
    /// The refresh token is preserved from the previous state when the
    /// response omits one (refresh-token grants do not return it).
    pub fn apply_token_response(&self, response: &TokenResponse, now: OffsetDateTime) -> Self {
        Self {
            refresh_token: response
                .refresh_token
                .clone()
                .or_else(|| self.refresh_token.clone()),
            access_token: Some(response.access_token.clone()),
            created: Some(now),
            expires: Some(now + Duration::seconds(response.expires_in)),
            state: self.state.clone(),
            plan: response.plan.or(self.plan),
        }
    }
}

/// Payload returned by the token endpoint for both the authorization-code and
/// refresh-token grants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The feedly user id.
    pub id: String,
    pub access_token: String,
    /// Remaining lifetime of the access token, in seconds.
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Only returned by the authorization-code grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
