//! Application configuration structs
//!
//! Built once at startup from environment variables (and an optional `.env`
//! file), then passed down explicitly. Nothing else reads the environment.

use invite_core::LookupStrategy;
use serde::Deserialize;
use std::env;

use crate::telemetry::LogFormat;

/// Signing secret used when `JWT_SECRET` is unset outside production
const INSECURE_DEV_SECRET: &str = "a-secure-default-secret-key-for-testing";

/// Longest accepted token validity window (10 years, in seconds)
const MAX_TOKEN_EXPIRY: i64 = 10 * 365 * 24 * 60 * 60;

/// Front-end origin allowed by default
const DEFAULT_ALLOWED_ORIGIN: &str = "https://flmkneg32ca.netlify.app";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub jwt: JwtConfig,
    pub store: StoreConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    /// Explicit log format; `None` picks one from `env`
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token validity window in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
    /// True when `secret` is the built-in development fallback
    #[serde(default)]
    pub insecure_default: bool,
}

/// Which row store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "memory" | "in-memory" | "inmemory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Row store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub lookup: LookupStrategy,
    #[serde(default = "default_table")]
    pub table: String,
    /// Required for the postgres backend
    pub database: Option<DatabaseConfig>,
    /// Unused codes preloaded into the memory backend
    #[serde(default)]
    pub seed_codes: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "invite-verify".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_token_expiry() -> i64 {
    2_592_000 // 30 days
}

fn default_table() -> String {
    "invitation_codes".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = match var("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        let log_format = match var("LOG_FORMAT") {
            Some(raw) => Some(
                raw.parse::<LogFormat>()
                    .map_err(|_| ConfigError::InvalidValue("LOG_FORMAT", raw))?,
            ),
            None => None,
        };

        let port = match var("API_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))?,
            None => default_port(),
        };

        let (secret, insecure_default) = match var("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => (secret, false),
            None if app_env.is_production() => return Err(ConfigError::MissingVar("JWT_SECRET")),
            None => (INSECURE_DEV_SECRET.to_string(), true),
        };

        let token_expiry = match var("JWT_TOKEN_EXPIRY") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|secs| (1..=MAX_TOKEN_EXPIRY).contains(secs))
                .ok_or(ConfigError::InvalidValue("JWT_TOKEN_EXPIRY", raw))?,
            None => default_token_expiry(),
        };

        let backend = match var("STORE_BACKEND") {
            Some(raw) => StoreBackend::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("STORE_BACKEND", raw))?,
            None => StoreBackend::default(),
        };

        let lookup = match var("STORE_LOOKUP") {
            Some(raw) => raw
                .parse::<LookupStrategy>()
                .map_err(|e| ConfigError::InvalidValue("STORE_LOOKUP", e.to_string()))?,
            None => LookupStrategy::default(),
        };

        let database = match var("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            }),
            None if backend == StoreBackend::Postgres => {
                return Err(ConfigError::MissingVar("DATABASE_URL"))
            }
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: app_env,
                log_format,
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            jwt: JwtConfig {
                secret,
                token_expiry,
                insecure_default,
            },
            store: StoreConfig {
                backend,
                lookup,
                table: var("INVITATION_TABLE").unwrap_or_else(default_table),
                database,
                seed_codes: var("MEMORY_SEED_CODES")
                    .map(|s| split_list(&s))
                    .unwrap_or_default(),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s))
                    .filter(|origins| !origins.is_empty())
                    .unwrap_or_else(default_allowed_origins),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
