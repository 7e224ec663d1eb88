use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserProfile;

/// Distinguishes short-lived access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Payload carried in the `data` claim of session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: String,
    pub role: Role,
    pub kind: TokenKind,
}

impl SessionData {
    pub fn new(profile: &UserProfile, kind: TokenKind) -> Self {
        Self {
            user_id: profile.id.to_string(),
            role: profile.role,
            kind,
        }
    }
}

/// Token lifetimes in duration grammar, e.g. `15m` and `7d`.
#[derive(Debug, Clone)]
pub struct TokenLifetimes {
    pub access_token_expires_in: String,
    pub refresh_token_expires_in: String,
}

impl TokenLifetimes {
    pub fn for_kind(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access_token_expires_in,
            TokenKind::Refresh => &self.refresh_token_expires_in,
        }
    }
}
