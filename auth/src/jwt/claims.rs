use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed session claims.
///
/// Encoded as `{data, iss, iat, exp}`; `iat` and `exp` are Unix timestamps
/// in seconds. `data` is whatever payload the caller wants to carry,
/// usually a reference to the authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    /// Caller-supplied payload
    pub data: T,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> Claims<T> {
    /// Build claims issued at `issued_at` and expiring at `expires_at`.
    ///
    /// # Arguments
    /// * `data` - Payload to embed
    /// * `issuer` - Issuing application name
    /// * `issued_at` - Issue instant
    /// * `expires_at` - Expiry instant (may precede `issued_at`)
    pub fn new(
        data: T,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            data,
            iss: issuer.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}
