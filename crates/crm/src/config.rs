use std::{env, fmt};

use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "postgres";
const DEFAULT_DATABASE: &str = "customers";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection settings loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host (default: "localhost")
    pub host: String,
    /// Database port (default: 5432)
    pub port: u16,
    /// Database user (default: "postgres")
    pub user: String,
    /// Database password (no default, may be empty)
    pub password: String,
    /// Database name (default: "customers")
    pub database: String,
    /// Maximum pooled connections (default: 5)
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DB_HOST` - Database host (default: "localhost")
    /// - `DB_PORT` - Database port (default: 5432)
    /// - `DB_USER` - Database user (default: "postgres")
    /// - `DB_PASSWORD` - Database password (default: empty)
    /// - `DB_NAME` - Database name (default: "customers")
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            host: var("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: var("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            user: var("DB_USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: var("DB_PASSWORD").unwrap_or_default(),
            database: var("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Connection options for the PostgreSQL driver. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
