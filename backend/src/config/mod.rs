//! Configuration management for the Storefront backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: SF__)
//! 4. The plain variables DATABASE_URL, SERVER_PORT and JWT_SECRET
//!
//! The database URL and the JWT secret have no defaults. Loading fails
//! when either is missing.

use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub token_expiry_secs: i64,
}

impl AppConfig {
    /// Build a configuration from explicit values, using defaults elsewhere
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: database_url.into(),
                max_connections: 10,
            },
            jwt: JwtConfig {
                secret: SecretString::new(jwt_secret.into()),
                token_expiry_secs: DEFAULT_TOKEN_EXPIRY_SECS,
            },
        }
    }

    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with SF__ prefix
    /// 4. DATABASE_URL, SERVER_PORT, JWT_SECRET
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.token_expiry_secs", DEFAULT_TOKEN_EXPIRY_SECS)?
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., SF__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("SF").separator("__"))
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", env::var("SERVER_PORT").ok())?
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server must not start with
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            bail!("DATABASE_URL must be set");
        }

        let secret = self.jwt.secret.expose_secret();
        if secret.trim().is_empty() {
            bail!("JWT_SECRET must be set");
        }

        if self.jwt.token_expiry_secs <= 0 {
            bail!("jwt.token_expiry_secs must be positive");
        }

        if Self::is_production() && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters in production",
                MIN_PRODUCTION_SECRET_LEN
            );
        }

        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
