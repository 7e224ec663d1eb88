use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::duration;
use crate::duration::DurationError;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Issues signed, time-bounded session tokens.
///
/// The signing secret and issuer name are fixed at construction and only
/// read afterwards, so one issuer can be shared across request handlers.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    issuer: String,
}

/// Token issuance errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid token lifetime: {0}")]
    Expiry(#[from] DurationError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HS256 signing
    /// * `issuer` - Value of the `iss` claim on every token
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            issuer: issuer.into(),
        }
    }

    /// Issue a signed token carrying `payload`, valid for `expires_in`.
    ///
    /// # Arguments
    /// * `payload` - Data embedded as the `data` claim
    /// * `expires_in` - Lifetime in duration grammar, e.g. `15m` or `7d`
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `Expiry` - Lifetime string is malformed or reaches past the
    ///   representable calendar
    /// * `Jwt` - Signing failed
    pub fn issue<T: Serialize>(&self, payload: T, expires_in: &str) -> Result<String, TokenError> {
        self.issue_at(payload, expires_in, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at<T: Serialize>(
        &self,
        payload: T,
        expires_in: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let lifetime = duration::parse(expires_in)?;
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| DurationError::OutOfRange(expires_in.to_string()))?;
        let claims = Claims::new(payload, self.issuer.as_str(), now, expires_at);

        Ok(self.jwt_handler.encode(&claims)?)
    }

    /// Validate and decode a token previously issued with the same secret.
    ///
    /// # Errors
    /// * `Jwt` - Signature invalid, token malformed or expired
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<Claims<T>, TokenError> {
        Ok(self.jwt_handler.decode(token)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_decode() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");

        let token = issuer
            .issue(json!({"user_id": "user123"}), "15m")
            .expect("Failed to issue token");

        let claims: Claims<serde_json::Value> =
            issuer.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.data["user_id"], "user123");
        assert_eq!(claims.iss, "my_blog_app");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_issue_at_sets_timestamps() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");
        let now = Utc::now();

        let token = issuer
            .issue_at("user123", "7d", now)
            .expect("Failed to issue token");

        let claims: Claims<String> = issuer.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, (now + Duration::days(7)).timestamp());
    }

    #[test]
    fn test_issue_invalid_expiry() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");

        assert_eq!(
            issuer.issue("user123", "10q"),
            Err(TokenError::Expiry(DurationError::InvalidUnit('q')))
        );
        assert!(matches!(
            issuer.issue("user123", "5"),
            Err(TokenError::Expiry(DurationError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_issue_lifetime_past_calendar_range() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");

        assert!(duration::parse("1000000y").is_ok());
        assert_eq!(
            issuer.issue("user123", "1000000y"),
            Err(TokenError::Expiry(DurationError::OutOfRange(
                "1000000y".to_string()
            )))
        );
    }

    #[test]
    fn test_decode_with_other_secret_fails() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");
        let other = TokenIssuer::new(b"another_secret_key_at_least_32_bytes", "my_blog_app");

        let token = issuer.issue("user123", "1h").expect("Failed to issue token");

        assert!(matches!(
            other.decode::<String>(&token),
            Err(TokenError::Jwt(JwtError::DecodingFailed(_)))
        ));
    }

    #[test]
    fn test_negative_lifetime_is_already_expired() {
        let issuer = TokenIssuer::new(SECRET, "my_blog_app");

        let token = issuer.issue("user123", "-1h").expect("Failed to issue token");

        assert_eq!(
            issuer.decode::<String>(&token),
            Err(TokenError::Jwt(JwtError::TokenExpired))
        );
    }
}
