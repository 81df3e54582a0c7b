//! Application configuration loaded from environment variables.

use std::env;

use crate::auth::AccessPolicy;
use crate::error::AppResult;

/// Gateway header carrying the authenticated caller's email.
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// Gateway header carrying the caller's roles, comma-separated.
pub const USER_ROLES_HEADER: &str = "X-User-Roles";

/// Development default values.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    /// Roles allowed to read the SIC code list when none are configured.
    pub const DEV_PERMITTED_ROLES: &str = "admin,manager";
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Roles permitted to read the SIC code list
    pub permitted_roles: Vec<String>,
}

impl Config {
    /// Load `.env` (if present) and then read configuration from the environment.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_env()?)
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `SIC_HOST`: Server host (default: 127.0.0.1)
    /// - `SIC_PORT`: Server port (default: 8080)
    /// - `SIC_PERMITTED_ROLES`: Comma-separated roles allowed to read SIC codes
    ///   (default: admin,manager)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_str = lookup("RUST_ENV").ok_or(ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = lookup("SIC_HOST").unwrap_or_else(|| defaults::DEV_HOST.to_string());

        let port = match lookup("SIC_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SIC_PORT must be a valid port number"))?,
            None => defaults::DEV_PORT,
        };

        let permitted_roles = parse_role_list(
            &lookup("SIC_PERMITTED_ROLES")
                .unwrap_or_else(|| defaults::DEV_PERMITTED_ROLES.to_string()),
        );

        let config = Config {
            environment,
            host,
            port,
            permitted_roles,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration grants access to at least one role.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.permitted_roles.is_empty() {
            errors.push(
                "SIC_PERMITTED_ROLES is empty. Every caller would be forbidden.".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Access policy for the SIC code route.
    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::new(&self.permitted_roles)
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated role list, dropping blanks.
pub fn parse_role_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
