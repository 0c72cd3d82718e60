/**
 * Server Configuration
 *
 * This module loads the server configuration from the process environment
 * into an explicit struct that is passed at startup. Nothing reads
 * configuration ambiently after boot.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `TOKEN_SECRET` (required) - shared secret for signing identity tokens
 * - `SERVER_PORT` (optional, default 3000)
 * - `APP_ENV` (optional, `development` or `production`; default development)
 */

use std::net::SocketAddr;

use thiserror::Error;

/// Runtime environment. Controls how much detail internal errors expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value. Anything that is not `production` is
    /// treated as development.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}

/// Explicit server configuration, created once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Shared secret used to sign and verify identity tokens.
    pub token_secret: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Runtime environment (gates internal error detail exposure).
    pub environment: Environment,
}

impl ServerConfig {
    /// Load the configuration from environment variables.
    ///
    /// `DATABASE_URL` and `TOKEN_SECRET` are required; the server refuses
    /// to start without them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let token_secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::MissingVar("TOKEN_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);

        Ok(Self {
            database_url,
            token_secret,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            environment,
        })
    }
}
