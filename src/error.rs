//! Error types surfaced by the token authentication strategy.

use thiserror::Error;

use crate::oauth::OAuthClientError;

/// Errors that terminate an authentication attempt.
///
/// A user denying authorization or a verify callback rejecting the user are
/// not errors; those are reported as [`crate::AuthOutcome::Failure`].
#[derive(Error, Debug)]
pub enum StrategyError {
    /// The OAuth client collaborator failed to retrieve the profile payload.
    #[error("failed to fetch user profile")]
    ProfileFetch {
        #[source]
        source: OAuthClientError,
    },

    /// The profile payload could not be parsed.
    #[error(transparent)]
    ProfileParse(#[from] serde_json::Error),

    /// The application's verify callback signalled an error.
    #[error("verify callback failed: {0}")]
    Verify(String),
}
