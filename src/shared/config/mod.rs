//! Application configuration module
//!
//! Configuration is read once at startup from the process environment and
//! validated before the server binds a socket. A missing secret or a
//! malformed number is reported as a `ConfigError` naming the variable.
//!
//! | Variable | Default |
//! |---|---|
//! | `JWT_SECRET` | required |
//! | `PORT` | `3000` |
//! | `USER_STORE` | `postgres` (`memory` for a throwaway store) |
//! | `DATABASE_URL` | unset; otherwise built from the `DB_*` variables |
//! | `DB_USERNAME` / `DB_PASSWORD` | required for Postgres without `DATABASE_URL` |
//! | `DB_NAME` | `test` |
//! | `DB_HOST` / `DB_PORT` | `localhost` / `5432` |
//! | `REQUIRE_AUTH` | `true` |
//! | `TOKEN_TTL_SECS` | `2592000` (30 days) |
//! | `BCRYPT_COST` | `12` |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);
pub const DEFAULT_BCRYPT_COST: u32 = 12;
pub const DEFAULT_DB_NAME: &str = "test";

/// Which user store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// Postgres connection settings
///
/// Either a full `url`, or the individual parts the URL would be built from.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: String,
}

impl DatabaseConfig {
    /// Load only the database settings from the process environment
    ///
    /// Unlike `AppConfig::from_env`, this needs no `JWT_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load only the database settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&get, "DB_PORT", 5432)?,
            username: get("DB_USERNAME"),
            password: get("DB_PASSWORD"),
            name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Listen port
    pub port: u16,
    /// HMAC secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Whether `GET /api/users` sits behind the access guard
    pub require_auth: bool,
    /// Store backend
    pub store: StoreKind,
    /// Postgres settings, ignored for the memory store
    pub database: DatabaseConfig,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("require_auth", &self.require_auth)
            .field("store", &self.store)
            .field("database", &self.database)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let store = match get("USER_STORE") {
            Some(raw) => raw
                .parse::<StoreKind>()
                .map_err(|()| ConfigError::invalid("USER_STORE", raw))?,
            None => StoreKind::default(),
        };

        let config = Self {
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            jwt_secret: get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: Duration::from_secs(parse_or(
                &get,
                "TOKEN_TTL_SECS",
                DEFAULT_TOKEN_TTL.as_secs(),
            )?),
            bcrypt_cost: parse_or(&get, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            require_auth: match get("REQUIRE_AUTH") {
                Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::invalid("REQUIRE_AUTH", raw))?,
                None => true,
            },
            store,
            database: DatabaseConfig::from_lookup(&lookup)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::invalid("TOKEN_TTL_SECS", "0"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid("BCRYPT_COST", self.bcrypt_cost.to_string()));
        }
        if self.store == StoreKind::Postgres && self.database.url.is_none() {
            if self.database.username.is_none() {
                return Err(ConfigError::MissingValue("DB_USERNAME"));
            }
            if self.database.password.is_none() {
                return Err(ConfigError::MissingValue("DB_PASSWORD"));
            }
        }
        Ok(())
    }
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::invalid(key, raw)),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            config: AppConfig {
                port: DEFAULT_PORT,
                jwt_secret: String::new(),
                token_ttl: DEFAULT_TOKEN_TTL,
                bcrypt_cost: DEFAULT_BCRYPT_COST,
                require_auth: true,
                store: StoreKind::Memory,
                database: DatabaseConfig {
                    host: "localhost".to_string(),
                    port: 5432,
                    name: DEFAULT_DB_NAME.to_string(),
                    ..DatabaseConfig::default()
                },
            },
        }
    }
}

impl AppConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.config.token_ttl = ttl;
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Turn the access guard on `GET /api/users` on or off
    pub fn require_auth(mut self, require: bool) -> Self {
        self.config.require_auth = require;
        self
    }

    /// Select the store backend
    pub fn store(mut self, store: StoreKind) -> Self {
        self.config.store = store;
        self
    }

    /// Use a Postgres store at the given URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.store = StoreKind::Postgres;
        self.config.database.url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

impl ConfigError {
    fn invalid(var: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            var,
            value: value.into(),
        }
    }
}
