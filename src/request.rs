//! The inbound request surface consumed by the strategy.

use std::collections::HashMap;

/// The slice of an incoming HTTP request the strategy reads.
///
/// The host framework owns the real request; it hands the strategy the query
/// and body parameters as plain string maps. Only `denied`, `token` and
/// `tokenSecret` are consumed.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    pub query: HashMap<String, String>,
    pub body: HashMap<String, String>,
}

impl AuthRequest {
    /// When a user denies authorization on LinkedIn, the link back to the
    /// application carries a `denied` query parameter holding the request
    /// token. Its presence is an authentication failure, not an error; the
    /// parameter's value is not inspected, so a bare `denied=` also fails
    /// the attempt.
    pub fn is_denied(&self) -> bool {
        self.query.contains_key("denied")
    }

    fn field(&self, name: &str) -> String {
        self.body
            .get(name)
            .or_else(|| self.query.get(name))
            .cloned()
            .unwrap_or_default()
    }
}

/// The access token / token secret pair proving the bearer already completed
/// the out-of-band OAuth authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    /// Extracts credentials from the request body, falling back to the query
    /// string. No format validation happens here; an empty token is allowed
    /// to propagate and fail at the OAuth client.
    pub fn from_request(req: &AuthRequest) -> Self {
        Self { token: req.field("token"), token_secret: req.field("tokenSecret") }
    }
}
