//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Default SQLite database used when neither `DB_URL` nor `DATABASE_URL` is set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:exercise-tracker.db";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Directory served for static assets (stylesheets, scripts)
    pub public_dir: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string or file path
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DB_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "PORT",
        "HOST",
        "PUBLIC_DIR",
        "DB_URL",
        "DATABASE_URL",
        "DB_MAX_CONNECTIONS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.public_dir, "public");
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("PORT", "8081");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("DB_URL", "sqlite:/tmp/tracker.db");
        env::set_var("DATABASE_URL", "sqlite:/tmp/ignored.db");
        env::set_var("DB_MAX_CONNECTIONS", "2");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:8081");
        assert_eq!(config.database.url, "sqlite:/tmp/tracker.db");
        assert_eq!(config.database.max_connections, 2);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_database_url_fallback_and_bad_numbers() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite:fallback.db");
        env::set_var("PORT", "not-a-port");
        env::set_var("DB_MAX_CONNECTIONS", "0");

        let config = Config::from_env();
        assert_eq!(config.database.url, "sqlite:fallback.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 5);
        clear_env();
    }
}
