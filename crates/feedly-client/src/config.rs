use std::time::Duration;

use url::Url;

use feedly_core::Error;

/// Base URL of the Feedly cloud API.
pub const FEEDLY_ENDPOINT: &str = "https://cloud.feedly.com";
/// Public website, used when building user-facing links.
pub const FEEDLY_WEBSITE: &str = "https://feedly.com";
/// Default API version prefix.
pub const FEEDLY_API_VERSION: &str = "v3";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client settings: application credentials and API location.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Client identifier issued during application registration.
    pub client_id: String,
    /// Client secret issued during application registration.
    pub client_secret: String,
    /// Redirect URI registered with the application.
    pub redirect_uri: String,
    /// User-Agent header attached to every request.
    pub user_agent: String,
    /// Base URL of the API.
    pub endpoint: Url,
    /// API version prefix, overridable per endpoint template.
    pub version: String,
    /// Transport timeout applied to each call.
    pub timeout: Duration,
}

/// Builder for [`Settings`].
#[derive(Clone, Debug, Default)]
pub struct SettingsBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    user_agent: Option<String>,
    endpoint: Option<String>,
    version: Option<String>,
    timeout: Option<Duration>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the API base URL (defaults to [`FEEDLY_ENDPOINT`]).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the API version prefix (defaults to [`FEEDLY_API_VERSION`]).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Override the transport timeout (defaults to 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Settings, Error> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::InvalidParameter("client_id is required".into()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| Error::InvalidParameter("client_secret is required".into()))?;
        let redirect_uri = self
            .redirect_uri
            .ok_or_else(|| Error::InvalidParameter("redirect_uri is required".into()))?;
        let user_agent = self
            .user_agent
            .ok_or_else(|| Error::InvalidParameter("user_agent is required".into()))?;
        let endpoint = Url::parse(self.endpoint.as_deref().unwrap_or(FEEDLY_ENDPOINT))?;

        Ok(Settings {
            client_id,
            client_secret,
            redirect_uri,
            user_agent,
            endpoint,
            version: self.version.unwrap_or_else(|| FEEDLY_API_VERSION.into()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }
}
