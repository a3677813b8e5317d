//! Provider-agnostic user profile and the LinkedIn payload normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider-specific extra values passed alongside the profile to the verify
/// callback. Empty in the token flow; populated by the full-handshake variant.
pub type Params = serde_json::Map<String, Value>;

/// Contextual detail attached to a success or failure outcome.
pub type Info = Value;

/// The closed set of profile fields an application may request.
///
/// Each field translates to a LinkedIn people-API selector token. Because the
/// set is an enum, the translation table is validated at compile time; there
/// is no runtime lookup that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Id,
    FirstName,
    LastName,
    FormattedName,
    EmailAddress,
    Headline,
    Location,
    Industry,
    Summary,
    PictureUrl,
    PublicProfileUrl,
    NumConnections,
}

impl ProfileField {
    /// The provider-side selector token for this field.
    pub fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::FormattedName => "formatted-name",
            Self::EmailAddress => "email-address",
            Self::Headline => "headline",
            Self::Location => "location",
            Self::Industry => "industry",
            Self::Summary => "summary",
            Self::PictureUrl => "picture-url",
            Self::PublicProfileUrl => "public-profile-url",
            Self::NumConnections => "num-connections",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailEntry {
    pub value: String,
}

/// A normalized user profile.
///
/// `id` and `display_name` are always present when retrieval succeeds;
/// `emails` only when the upstream payload carried an email address. The raw
/// body and parsed JSON are retained verbatim for caller inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub provider: &'static str,
    pub id: String,
    pub display_name: String,
    pub name: Name,
    pub emails: Option<Vec<EmailEntry>>,
    pub raw: String,
    pub json: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLinkedInProfile {
    id: String,
    first_name: String,
    last_name: String,
    email_address: Option<String>,
}

impl Profile {
    /// Parses a raw LinkedIn people-API response body and normalizes it.
    ///
    /// A payload missing any of `id`, `firstName` or `lastName` is treated as
    /// malformed, the same as a body that is not JSON at all.
    pub fn from_raw(body: &str) -> Result<Self, serde_json::Error> {
        let json: Value = serde_json::from_str(body)?;
        let raw: RawLinkedInProfile = serde_json::from_value(json.clone())?;

        Ok(Self {
            provider: "linkedin",
            id: raw.id,
            display_name: format!("{} {}", raw.first_name, raw.last_name),
            name: Name { given_name: raw.first_name, family_name: raw.last_name },
            emails: raw.email_address.map(|value| vec![EmailEntry { value }]),
            raw: body.to_string(),
            json,
        })
    }
}
