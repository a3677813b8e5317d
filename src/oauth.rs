//! The outbound seam to the OAuth 1.0a client collaborator.
//!
//! The strategy never performs the OAuth handshake or signs requests itself;
//! it delegates the single authenticated GET to an implementation of
//! [`OAuthClient`] injected at construction.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by the OAuth client collaborator.
#[derive(Error, Debug)]
pub enum OAuthClientError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}")]
    Provider { status: u16, body: String },
}

/// Raw response from an authenticated GET.
#[derive(Debug, Clone)]
pub struct OAuthResponse {
    pub status: u16,
    pub body: String,
}

/// A token-bearing HTTP GET capability.
///
/// Implementations own the OAuth 1.0a signing and the HTTP transport,
/// including any timeout policy. The strategy issues at most one call per
/// authentication attempt and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// Performs one GET against `url`, signed with the given access token
    /// and token secret.
    async fn get(&self, url: &str, token: &str, token_secret: &str)
        -> Result<OAuthResponse, OAuthClientError>;
}
