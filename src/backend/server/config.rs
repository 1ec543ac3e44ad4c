/**
 * Server Configuration
 *
 * All configuration is read once at startup into an immutable
 * `ServerConfig`. Nothing below the `main` function reads the environment.
 *
 * # Variables
 *
 * | Variable | Required | Purpose |
 * |---|---|---|
 * | `ADMIN_USERNAME`, `ADMIN_PASSWORD` | yes | administrator login |
 * | `JWT_SECRET` | yes | token signing secret |
 * | `DATABASE_URL` | no | PostgreSQL; signup routes answer 503 without it |
 * | `DATABASE_MAX_CONNECTIONS` | no | pool size, default 5 |
 * | `SMTP_USER`, `SMTP_PASSWORD`, `SMTP_FROM_EMAIL` | no | all three or none |
 * | `SMTP_HOST` | no | relay host, default `smtp.zoho.com` |
 * | `CORS_ALLOWED_ORIGINS` | no | comma-separated allow-list |
 * | `CORS_ORIGIN` | no | single allowed origin, used when no list is set |
 * | `CORS_ALLOW_CREDENTIALS` | no | default `true` |
 * | `SERVER_PORT` | no | default 3000 |
 *
 * Missing optional services are logged and the server starts without them.
 */

use std::collections::BTreeSet;
use std::fmt;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::AdminCredentials;
use crate::backend::middleware::cors::{CorsConfig, OriginPolicy, DEFAULT_ALLOWED_ORIGIN};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SMTP_HOST: &str = "smtp.zoho.com";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// PostgreSQL connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// SMTP relay settings
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    /// Sender address, also the visible recipient of bulk mail
    pub from: String,
}

/// Immutable server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub admin: AdminCredentials,
    pub jwt_secret: String,
    pub cors: CorsConfig,
    pub database: Option<DatabaseConfig>,
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Blank values count as unset. Credentials and the JWT secret are kept
    /// exactly as given; every other value is trimmed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_raw = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get = |key: &str| get_raw(key).map(|v| v.trim().to_string());
        let require = |key: &'static str| get_raw(key).ok_or(ConfigError::Missing(key));

        let admin = AdminCredentials::new(require("ADMIN_USERNAME")?, require("ADMIN_PASSWORD")?);
        let jwt_secret = require("JWT_SECRET")?;

        let port = match get("SERVER_PORT") {
            Some(raw) => parse_number("SERVER_PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let database = match get("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: match get("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => parse_number("DATABASE_MAX_CONNECTIONS", &raw)?,
                    None => DEFAULT_MAX_CONNECTIONS,
                },
            }),
            None => None,
        };

        let smtp = match (get("SMTP_USER"), get("SMTP_PASSWORD"), get("SMTP_FROM_EMAIL")) {
            (None, None, None) => None,
            (Some(user), Some(password), Some(from)) => Some(SmtpConfig {
                host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                user,
                password,
                from,
            }),
            (user, password, _) => {
                let missing = if user.is_none() {
                    "SMTP_USER"
                } else if password.is_none() {
                    "SMTP_PASSWORD"
                } else {
                    "SMTP_FROM_EMAIL"
                };
                return Err(ConfigError::Missing(missing));
            }
        };

        let origins = match (get("CORS_ALLOWED_ORIGINS"), get("CORS_ORIGIN")) {
            (Some(list), _) => OriginPolicy::AllowList(parse_origin_list(&list)?),
            (None, Some(origin)) => {
                check_origin_value("CORS_ORIGIN", &origin)?;
                OriginPolicy::SingleOrigin(origin)
            }
            (None, None) => OriginPolicy::SingleOrigin(DEFAULT_ALLOWED_ORIGIN.to_string()),
        };

        let allow_credentials = match get("CORS_ALLOW_CREDENTIALS") {
            Some(raw) => raw.parse::<bool>().map_err(|_| ConfigError::Invalid {
                key: "CORS_ALLOW_CREDENTIALS",
                message: format!("expected true or false, got '{}'", raw),
            })?,
            None => true,
        };

        Ok(Self {
            port,
            admin,
            jwt_secret,
            cors: CorsConfig {
                origins,
                allow_credentials,
                ..CorsConfig::default()
            },
            database,
            smtp,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        message: format!("'{}' is not a valid number", raw),
    })
}

fn parse_origin_list(raw: &str) -> Result<BTreeSet<String>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| check_origin_value("CORS_ALLOWED_ORIGINS", origin).map(|_| origin.to_string()))
        .collect::<Result<BTreeSet<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::Invalid {
            key: "CORS_ALLOWED_ORIGINS",
            message: "no origins listed".to_string(),
        });
    }
    Ok(origins)
}

/// Origins are matched exactly, so wildcards would never match anything.
fn check_origin_value(key: &'static str, origin: &str) -> Result<(), ConfigError> {
    if origin.contains('*') {
        return Err(ConfigError::Invalid {
            key,
            message: "wildcard origins are not supported".to_string(),
        });
    }
    Ok(())
}

/// Connect to PostgreSQL and run migrations
///
/// Returns `None` when no database is configured or the connection fails;
/// signup and bulk-mail routes then answer 503.
pub async fn load_database(config: Option<&DatabaseConfig>) -> Option<PgPool> {
    let Some(config) = config else {
        tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Continuing without migrations - database might not be up to date");
    }

    Some(pool)
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("admin", &self.admin)
            .field("jwt_secret", &"<redacted>")
            .field("cors", &self.cors)
            .field("database", &self.database)
            .field("smtp", &self.smtp)
            .finish()
    }
}
