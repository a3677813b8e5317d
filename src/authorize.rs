//! Extra parameters for the provider's authorization redirect URL.
//!
//! Only the full-handshake variant of this strategy family builds that URL;
//! the helper lives here because the configuration surface is shared.

/// Per-request options for the authorization redirect.
#[derive(Debug, Clone, Default)]
pub struct AuthorizeOptions {
    pub force_login: Option<bool>,
    pub screen_name: Option<String>,
}

/// Returns the extra query parameters to append to the authorization URL.
/// Each parameter is included only when explicitly set.
pub fn authorization_params(options: &AuthorizeOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(force_login) = options.force_login {
        params.push(("force_login", force_login.to_string()));
    }
    if let Some(screen_name) = &options.screen_name {
        params.push(("screen_name", screen_name.clone()));
    }
    params
}
