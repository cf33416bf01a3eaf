//! Server configuration for the medication REST API.
//!
//! Configuration comes from command line flags or environment variables.
//! The server binary loads an optional `.env` file before parsing, so values
//! there act as environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | 8080 | Server port |
//! | `HOST` | 0.0.0.0 | Host to bind |
//! | `LOG_LEVEL` | info | Log level |
//! | `REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ENABLE_CORS` | true | Enable CORS |
//! | `CORS_ORIGINS` | * | Allowed origins |
//! | `DB_DRIVER` | postgres | Storage driver (only `postgres`) |
//! | `DB_HOST` | localhost | Database host |
//! | `DB_PORT` | (required) | Database port |
//! | `DB_USER` | postgres | Database user |
//! | `DB_PASSWORD` | postgres | Database password |
//! | `DB_NAME` | medication | Database name |
//! | `DB_MAX_CONNECTIONS` | 10 | Connection pool size |
//! | `JWT_SECRET` | defaultsecret | HS256 key for bearer tokens |
//! | `TARGET_RELEASE` | DEV | `PROD` enables authentication |
//!
//! # Example
//!
//! ```rust
//! use medication_rest::{ReleaseTarget, ServerConfig};
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     release_target: ReleaseTarget::Production,
//!     ..Default::default()
//! };
//! assert!(config.auth_enabled());
//! ```

use std::convert::Infallible;
use std::fmt;

use clap::Parser;

/// The only storage driver the server knows how to start.
pub const SUPPORTED_DB_DRIVER: &str = "postgres";

/// Deployment environment of the server.
///
/// Production attaches the bearer-token gate to the medication routes.
/// Development leaves them open and serves the Swagger UI instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// `TARGET_RELEASE=DEV` or any value other than `PROD`.
    #[default]
    Dev,
    /// `TARGET_RELEASE=PROD`.
    Production,
}

impl ReleaseTarget {
    /// Parses a `TARGET_RELEASE` value. Only the exact string `PROD` selects
    /// production.
    pub fn parse(value: &str) -> Self {
        if value == "PROD" {
            ReleaseTarget::Production
        } else {
            ReleaseTarget::Dev
        }
    }
}

impl fmt::Display for ReleaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseTarget::Dev => write!(f, "DEV"),
            ReleaseTarget::Production => write!(f, "PROD"),
        }
    }
}

fn parse_release_target(value: &str) -> Result<ReleaseTarget, Infallible> {
    Ok(ReleaseTarget::parse(value))
}

/// Server configuration for the medication REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "medication-server")]
#[command(about = "Medication CRUD REST API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Storage driver.
    #[arg(long, env = "DB_DRIVER", default_value = SUPPORTED_DB_DRIVER)]
    pub db_driver: String,

    /// Database host.
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port.
    #[arg(long, env = "DB_PORT")]
    pub db_port: u16,

    /// Database user.
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password.
    #[arg(long, env = "DB_PASSWORD", default_value = "postgres", hide_env_values = true)]
    pub db_password: String,

    /// Database name.
    #[arg(long, env = "DB_NAME", default_value = "medication")]
    pub db_name: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: usize,

    /// Secret used to verify HS256 bearer tokens.
    #[arg(long, env = "JWT_SECRET", default_value = "defaultsecret", hide_env_values = true)]
    pub jwt_secret: String,

    /// Deployment environment (DEV or PROD).
    #[arg(
        long,
        env = "TARGET_RELEASE",
        default_value = "DEV",
        value_parser = parse_release_target
    )]
    pub release_target: ReleaseTarget,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            db_driver: SUPPORTED_DB_DRIVER.to_string(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "postgres".to_string(),
            db_password: "postgres".to_string(),
            db_name: "medication".to_string(),
            db_max_connections: 10,
            jwt_secret: "defaultsecret".to_string(),
            release_target: ReleaseTarget::Dev,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true when the medication routes require a bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.release_target == ReleaseTarget::Production
    }

    /// Returns true when the Swagger UI should be served.
    pub fn docs_enabled(&self) -> bool {
        self.release_target == ReleaseTarget::Dev
    }

    /// Builds the PostgreSQL backend configuration from the `DB_*` settings.
    #[cfg(feature = "postgres")]
    pub fn postgres_config(&self) -> medication_persistence::backends::postgres::PostgresConfig {
        medication_persistence::backends::postgres::PostgresConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            dbname: self.db_name.clone(),
            user: self.db_user.clone(),
            password: Some(self.db_password.clone()),
            max_connections: self.db_max_connections,
            ..Default::default()
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.db_driver != SUPPORTED_DB_DRIVER {
            errors.push(format!("Unsupported DB driver: {}", self.db_driver));
        }

        if self.db_port == 0 {
            errors.push("DB port cannot be 0".to_string());
        }

        if self.db_max_connections == 0 {
            errors.push("DB max connections cannot be 0".to_string());
        }

        if self.auth_enabled() && self.jwt_secret.is_empty() {
            errors.push("JWT secret cannot be empty when authentication is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        }
    }
}
