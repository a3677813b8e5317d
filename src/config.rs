//! Static strategy configuration, fixed at construction time.

use crate::profile::ProfileField;

const DEFAULT_REQUEST_TOKEN_URL: &str = "https://api.linkedin.com/uas/oauth/requestToken";
const DEFAULT_ACCESS_TOKEN_URL: &str = "https://api.linkedin.com/uas/oauth/accessToken";
const DEFAULT_USER_AUTHORIZATION_URL: &str = "https://www.linkedin.com/uas/oauth/authenticate";
const DEFAULT_SESSION_KEY: &str = "oauth:linkedin";

pub(crate) const PROFILE_URL_PREFIX: &str = "https://api.linkedin.com/v1/people/~:(";
pub(crate) const PROFILE_URL_SUFFIX: &str = ")?format=json";
pub(crate) const DEFAULT_PROFILE_URL: &str =
    "https://api.linkedin.com/v1/people/~:(id,first-name,last-name,public-profile-url)?format=json";

/// Strategy configuration. Read-only once built; shared freely across
/// concurrent authentication attempts.
#[derive(Debug, Clone)]
pub struct Config {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub request_token_url: String,
    pub access_token_url: String,
    pub user_authorization_url: String,
    pub session_key: String,
    /// Kept for configuration parity with the full-handshake variant of this
    /// strategy family; the token flow never consults it.
    pub skip_extended_user_profile: bool,
    /// Replaces the stock field set in the profile endpoint URL when set.
    pub profile_fields: Option<Vec<ProfileField>>,
}

impl Config {
    pub fn builder(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(consumer_key.into(), consumer_secret.into())
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    fn new(consumer_key: String, consumer_secret: String) -> Self {
        Self {
            config: Config {
                consumer_key,
                consumer_secret,
                request_token_url: DEFAULT_REQUEST_TOKEN_URL.to_string(),
                access_token_url: DEFAULT_ACCESS_TOKEN_URL.to_string(),
                user_authorization_url: DEFAULT_USER_AUTHORIZATION_URL.to_string(),
                session_key: DEFAULT_SESSION_KEY.to_string(),
                skip_extended_user_profile: false,
                profile_fields: None,
            },
        }
    }

    pub fn request_token_url(mut self, url: impl Into<String>) -> Self {
        self.config.request_token_url = url.into();
        self
    }

    pub fn access_token_url(mut self, url: impl Into<String>) -> Self {
        self.config.access_token_url = url.into();
        self
    }

    pub fn user_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.config.user_authorization_url = url.into();
        self
    }

    pub fn session_key(mut self, key: impl Into<String>) -> Self {
        self.config.session_key = key.into();
        self
    }

    pub fn skip_extended_user_profile(mut self, skip: bool) -> Self {
        self.config.skip_extended_user_profile = skip;
        self
    }

    pub fn profile_fields(mut self, fields: Vec<ProfileField>) -> Self {
        self.config.profile_fields = Some(fields);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
