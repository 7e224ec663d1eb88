pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::user;
pub use outbound::repositories;

/// Value of the `iss` claim on every session token.
pub const APP_NAME: &str = "my_blog_app";
