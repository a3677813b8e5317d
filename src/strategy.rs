//! The token authentication strategy itself.

use std::sync::Arc;

use crate::config::Config;
use crate::error::StrategyError;
use crate::loader::ProfileLoader;
use crate::profile::{Info, Params};
use crate::request::{AuthRequest, Credentials};
use crate::verify::{Verdict, Verify};

/// Terminal report of one authentication attempt. Errors travel through the
/// surrounding `Result`; exactly one of the three is produced per call.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<U> {
    Success { user: U, info: Option<Info> },
    Failure { info: Option<Info> },
}

/// Authenticates requests carrying a pre-obtained LinkedIn OAuth access
/// token, instead of running the redirect-based handshake.
///
/// The OAuth-signed GET and the identity-to-user mapping are both injected:
/// the former as an [`crate::OAuthClient`] behind the profile loader, the
/// latter as a [`Verify`] callback whose call shape is fixed at construction.
pub struct TokenStrategy<U> {
    config: Config,
    loader: Arc<dyn ProfileLoader>,
    verify: Verify<U>,
}

impl<U> TokenStrategy<U> {
    /// Name under which the host framework registers this strategy.
    pub const NAME: &'static str = "linkedin-token";

    pub fn new(config: Config, loader: Arc<dyn ProfileLoader>, verify: Verify<U>) -> Self {
        Self { config, loader, verify }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one authentication attempt.
    ///
    /// A `denied` query parameter fails the attempt immediately, before any
    /// network activity. Otherwise the credentials are extracted (body first,
    /// query fallback), the profile is loaded, and the verify callback is
    /// invoked exactly once with the configured shape. The verify callback is
    /// never invoked when profile retrieval fails.
    pub async fn authenticate(&self, req: &AuthRequest) -> Result<AuthOutcome<U>, StrategyError> {
        if req.is_denied() {
            tracing::debug!("authorization denied by user");
            return Ok(AuthOutcome::Failure { info: None });
        }

        let credentials = Credentials::from_request(req);
        let params = Params::new();

        let profile = self.loader.load(&credentials, &params).await?;

        match self.verify.dispatch(req, &credentials, &params, profile).await? {
            Verdict::Granted { user, info } => {
                tracing::debug!("verify callback granted the user");
                Ok(AuthOutcome::Success { user, info })
            },
            Verdict::Rejected { info } => {
                tracing::debug!("verify callback rejected the user");
                Ok(AuthOutcome::Failure { info })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::loader::MockProfileLoader;
    use crate::oauth::OAuthClientError;
    use crate::profile::{Name, Profile};

    fn profile() -> Profile {
        Profile {
            provider: "linkedin",
            id: "42".to_string(),
            display_name: "Ada Lovelace".to_string(),
            name: Name { given_name: "Ada".to_string(), family_name: "Lovelace".to_string() },
            emails: None,
            raw: String::new(),
            json: serde_json::Value::Null,
        }
    }

    fn request() -> AuthRequest {
        let mut req = AuthRequest::default();
        req.body.insert("token".to_string(), "t1".to_string());
        req.body.insert("tokenSecret".to_string(), "s1".to_string());
        req
    }

    fn strategy_with(
        loader: MockProfileLoader,
        verify: Verify<String>,
    ) -> TokenStrategy<String> {
        let config = Config::builder("key", "secret").build();
        TokenStrategy::new(config, Arc::new(loader), verify)
    }

    #[tokio::test]
    async fn test_denied_request_fails_without_loading_a_profile() {
        let mut loader = MockProfileLoader::new();
        loader.expect_load().times(0);

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|_, _| async {
                Err(StrategyError::Verify("verify must not run".to_string()))
            }),
        );

        let mut req = AuthRequest::default();
        req.query.insert("denied".to_string(), "abc".to_string());

        let outcome = strategy.authenticate(&req).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Failure { info: None });
    }

    #[tokio::test]
    async fn test_successful_authentication() {
        let mut loader = MockProfileLoader::new();
        loader
            .expect_load()
            .withf(|creds, params| creds.token == "t1" && creds.token_secret == "s1" && params.is_empty())
            .times(1)
            .returning(|_, _| Ok(profile()));

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|creds, profile| async move {
                assert_eq!(creds.token, "t1");
                Ok(Verdict::Granted { user: profile.display_name, info: None })
            }),
        );

        let outcome = strategy.authenticate(&request()).await.unwrap();
        assert_eq!(outcome, AuthOutcome::Success { user: "Ada Lovelace".to_string(), info: None });
    }

    #[tokio::test]
    async fn test_loader_error_propagates_and_verify_never_runs() {
        let mut loader = MockProfileLoader::new();
        loader.expect_load().times(1).returning(|_, _| {
            Err(StrategyError::ProfileFetch {
                source: OAuthClientError::Transport("connection reset".to_string()),
            })
        });

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|_, _| async {
                Err(StrategyError::Verify("verify must not run".to_string()))
            }),
        );

        let err = strategy.authenticate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch user profile");
    }

    #[tokio::test]
    async fn test_rejection_carries_info() {
        let mut loader = MockProfileLoader::new();
        loader.expect_load().returning(|_, _| Ok(profile()));

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|_, _| async {
                Ok(Verdict::Rejected { info: Some(json!({"message": "not found"})) })
            }),
        );

        let outcome = strategy.authenticate(&request()).await.unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Failure { info: Some(json!({"message": "not found"})) }
        );
    }

    #[tokio::test]
    async fn test_verify_error_surfaces() {
        let mut loader = MockProfileLoader::new();
        loader.expect_load().returning(|_, _| Ok(profile()));

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|_, _| async {
                Err(StrategyError::Verify("database unavailable".to_string()))
            }),
        );

        let err = strategy.authenticate(&request()).await.unwrap_err();
        assert!(matches!(err, StrategyError::Verify(_)));
    }

    #[tokio::test]
    async fn test_credentials_fall_back_to_query_parameters() {
        let mut loader = MockProfileLoader::new();
        loader
            .expect_load()
            .withf(|creds, _| creds.token == "qt" && creds.token_secret == "qs")
            .times(1)
            .returning(|_, _| Ok(profile()));

        let strategy = strategy_with(
            loader,
            Verify::token_profile(|_, _| async {
                Ok(Verdict::Granted { user: "u".to_string(), info: None })
            }),
        );

        let mut req = AuthRequest::default();
        req.query.insert("token".to_string(), "qt".to_string());
        req.query.insert("tokenSecret".to_string(), "qs".to_string());

        strategy.authenticate(&req).await.unwrap();
    }

    #[tokio::test]
    async fn test_request_bearing_shape_sees_the_inbound_request() {
        let mut loader = MockProfileLoader::new();
        loader.expect_load().returning(|_, _| Ok(profile()));

        let strategy = strategy_with(
            loader,
            Verify::request_token_params_profile(|req: AuthRequest, creds, params, profile| async move {
                assert_eq!(req.body.get("token").map(String::as_str), Some("t1"));
                assert_eq!(creds.token_secret, "s1");
                assert!(params.is_empty());
                Ok(Verdict::Granted { user: profile.id, info: Some(json!({"via": "request"})) })
            }),
        );

        let outcome = strategy.authenticate(&request()).await.unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::Success { user: "42".to_string(), info: Some(json!({"via": "request"})) }
        );
    }

    #[tokio::test]
    async fn test_strategy_name() {
        assert_eq!(TokenStrategy::<String>::NAME, "linkedin-token");
    }
}
