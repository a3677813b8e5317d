//! LinkedIn access-token authentication strategy.
//!
//! Authenticates requests that already carry a LinkedIn OAuth 1.0a access
//! token and token secret, obtained out-of-band, instead of running the
//! redirect-based handshake. The strategy fetches the user's profile through
//! an injected OAuth client, normalizes it into a provider-agnostic
//! [`Profile`], and hands it to an application-supplied [`Verify`] callback
//! that maps the identity to an application user.
//!
//! The host authentication framework owns request lifecycle, sessions and
//! strategy dispatch; this crate only implements the one strategy.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use linkedin_token_auth::{
//!     AuthRequest, Config, LinkedInProfileLoader, OAuthClient, TokenStrategy, Verdict, Verify,
//! };
//!
//! # async fn run(oauth: Arc<dyn OAuthClient>, req: AuthRequest) {
//! let config = Config::builder("123-456-789", "shhh-its-a-secret").build();
//! let loader = Arc::new(LinkedInProfileLoader::new(oauth, &config));
//!
//! let strategy = TokenStrategy::new(
//!     config,
//!     loader,
//!     Verify::token_profile(|_credentials, profile| async move {
//!         // Look the user up, create it, or reject the identity.
//!         Ok(Verdict::Granted { user: profile.id, info: None })
//!     }),
//! );
//!
//! let outcome = strategy.authenticate(&req).await;
//! # let _ = outcome;
//! # }
//! ```

mod authorize;
mod config;
mod error;
mod loader;
mod oauth;
mod profile;
mod request;
mod strategy;
mod verify;

pub use authorize::{AuthorizeOptions, authorization_params};
pub use config::{Config, ConfigBuilder};
pub use error::StrategyError;
pub use loader::{LinkedInProfileLoader, ProfileLoader};
pub use oauth::{OAuthClient, OAuthClientError, OAuthResponse};
pub use profile::{EmailEntry, Info, Name, Params, Profile, ProfileField};
pub use request::{AuthRequest, Credentials};
pub use strategy::{AuthOutcome, TokenStrategy};
pub use verify::{Verdict, Verify, VerifyResult};
