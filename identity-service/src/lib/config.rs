use std::env;

use chrono::Duration;
use chrono::Utc;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::user::models::RegistrationPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expires_in")]
    pub access_token_expires_in: String,
    #[serde(default = "default_refresh_token_expires_in")]
    pub refresh_token_expires_in: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub allow_admin_creation: bool,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_access_token_expires_in() -> String {
    "15m".to_string()
}

fn default_refresh_token_expires_in() -> String {
    "7d".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// `jwt.secret` has no default; outside development it must come from
    /// `JWT__SECRET` or a `config/{RUN_MODE}.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::load_from(&run_mode, environment())
    }

    fn load_from(run_mode: &str, environment: Environment) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables
            .add_source(environment)
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy {
            allow_admin_creation: self.registration.allow_admin_creation,
        }
    }
}

/// Unprefixed variables with `__` as the section separator.
/// Example: REGISTRATION__ALLOW_ADMIN_CREATION=true
fn environment() -> Environment {
    Environment::default().separator("__").try_parsing(true)
}

impl JwtConfig {
    /// Parse both token lifetimes, failing on the first malformed one.
    ///
    /// A lifetime whose expiry would fall outside the representable
    /// calendar is rejected as `OutOfRange`.
    pub fn token_lifetimes(&self) -> Result<(Duration, Duration), auth::DurationError> {
        let access = parse_lifetime(&self.access_token_expires_in)?;
        let refresh = parse_lifetime(&self.refresh_token_expires_in)?;
        Ok((access, refresh))
    }
}

fn parse_lifetime(input: &str) -> Result<Duration, auth::DurationError> {
    let lifetime = auth::duration::parse(input)?;
    Utc::now()
        .checked_add_signed(lifetime)
        .map(|_| lifetime)
        .ok_or_else(|| auth::DurationError::OutOfRange(input.to_string()))
}

// Keeps the signing secret out of logs
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expires_in", &self.access_token_expires_in)
            .field("refresh_token_expires_in", &self.refresh_token_expires_in)
            .finish()
    }
}
