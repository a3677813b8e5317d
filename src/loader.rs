//! Profile retrieval and normalization.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, DEFAULT_PROFILE_URL, PROFILE_URL_PREFIX, PROFILE_URL_SUFFIX};
use crate::error::StrategyError;
use crate::oauth::OAuthClient;
use crate::profile::{Params, Profile};
use crate::request::Credentials;

/// Capability to turn a credential pair into a normalized profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileLoader: Send + Sync {
    /// Fetches and normalizes the user profile for the given credentials.
    ///
    /// Exactly two error kinds can come back: a wrapped transport/provider
    /// failure ([`StrategyError::ProfileFetch`]) and an unwrapped payload
    /// parse failure ([`StrategyError::ProfileParse`]). Both are terminal;
    /// no retry is performed.
    async fn load(&self, credentials: &Credentials, params: &Params) -> Result<Profile, StrategyError>;
}

/// Loads profiles from the LinkedIn people API through an injected
/// [`OAuthClient`].
pub struct LinkedInProfileLoader {
    oauth: Arc<dyn OAuthClient>,
    profile_url: String,
}

impl LinkedInProfileLoader {
    /// The endpoint URL is assembled once here; a configured field list
    /// replaces the stock selector.
    pub fn new(oauth: Arc<dyn OAuthClient>, config: &Config) -> Self {
        let profile_url = match &config.profile_fields {
            Some(fields) => {
                let tokens: Vec<&str> = fields.iter().map(|f| f.token()).collect();
                format!("{PROFILE_URL_PREFIX}{}{PROFILE_URL_SUFFIX}", tokens.join(","))
            },
            None => DEFAULT_PROFILE_URL.to_string(),
        };

        Self { oauth, profile_url }
    }
}

#[async_trait]
impl ProfileLoader for LinkedInProfileLoader {
    async fn load(&self, credentials: &Credentials, _params: &Params) -> Result<Profile, StrategyError> {
        tracing::debug!(url = %self.profile_url, "fetching user profile");

        let response = self
            .oauth
            .get(&self.profile_url, &credentials.token, &credentials.token_secret)
            .await
            .map_err(|source| {
                tracing::error!(error = %source, "profile fetch failed");
                StrategyError::ProfileFetch { source }
            })?;

        let profile = Profile::from_raw(&response.body).map_err(|err| {
            tracing::error!(error = %err, "profile payload could not be parsed");
            StrategyError::from(err)
        })?;

        tracing::debug!(id = %profile.id, "profile normalized");
        Ok(profile)
    }
}
