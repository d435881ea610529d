//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,
    pub database_max_connections: u32,

    /// Token verification
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// Comma-separated list of allowed origins; permissive CORS when unset
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow::anyhow!("{key} is required"));

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: lookup("JWT_ISSUER"),
            jwt_audience: lookup("JWT_AUDIENCE"),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "jobly=debug,tower_http=info".to_string()),
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            port,
        })
    }
}
