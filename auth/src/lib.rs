//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the identity service:
//! - Password hashing (Argon2id)
//! - Duration grammar (`15m`, `7d`, `1M`, ...)
//! - JWT encoding and decoding
//! - Session token issuance
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Durations
//! ```
//! let lifetime = auth::duration::parse("7d").unwrap();
//! assert_eq!(lifetime.num_hours(), 168);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", "my_blog_app");
//! let token = issuer.issue("user123", "15m").unwrap();
//! let claims: Claims<String> = issuer.decode(&token).unwrap();
//! assert_eq!(claims.data, "user123");
//! ```

pub mod duration;
pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use duration::DurationError;
pub use issuer::TokenError;
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
