//! Process configuration, read from environment variables.
//!
//! Settings are loaded once per invocation inside the handler's fault
//! boundary, so a missing variable becomes a fault response instead of a
//! crashed function.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use sqlx::postgres::PgSslMode;

use crate::error::ConfigError;

pub const LIVE_HOST: &str = "LIVE_HOST";
pub const LIVE_PORT: &str = "LIVE_PORT";
pub const LIVE_SHADOW_DBNAME: &str = "LIVE_SHADOW_DBNAME";
pub const LIVE_USER: &str = "LIVE_USER";
pub const LIVE_PASSWORD: &str = "LIVE_PASSWORD";
pub const LIVE_SSLMODE: &str = "LIVE_SSLMODE";
pub const AUTH_URL: &str = "AUTH_URL";
pub const AUTH_TIMEOUT_SECS: &str = "AUTH_TIMEOUT_SECS";
pub const REDACT_FAULT_DETAILS: &str = "REDACT_FAULT_DETAILS";

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything an invocation needs to reach its collaborators.
#[derive(Debug, Clone)]
pub struct Settings {
    pub shadow_db: ShadowDbConfig,
    pub auth: AuthConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build settings from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Settings {
            shadow_db: ShadowDbConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
        })
    }
}

/// Connection parameters for the shadow live Postgres database.
#[derive(Clone)]
pub struct ShadowDbConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
}

impl ShadowDbConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ssl_mode = required(lookup, LIVE_SSLMODE)?;
        let ssl_mode = PgSslMode::from_str(&ssl_mode).map_err(|_| ConfigError::Invalid {
            var: LIVE_SSLMODE,
            reason: format!(
                "`{ssl_mode}` is not one of disable, allow, prefer, require, verify-ca, verify-full"
            ),
        })?;

        let port = match optional(lookup, LIVE_PORT) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: LIVE_PORT,
                reason: format!("`{raw}` is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(ShadowDbConfig {
            host: required(lookup, LIVE_HOST)?,
            port,
            dbname: required(lookup, LIVE_SHADOW_DBNAME)?,
            user: required(lookup, LIVE_USER)?,
            password: required(lookup, LIVE_PASSWORD)?,
            ssl_mode,
        })
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ShadowDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowDbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// Where and how long to ask for token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub url: Url,
    pub timeout: Duration,
}

impl AuthConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = required(lookup, AUTH_URL)?;
        let url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            var: AUTH_URL,
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                var: AUTH_URL,
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        let timeout = match optional(lookup, AUTH_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: AUTH_TIMEOUT_SECS,
                        reason: format!("`{raw}` is not a positive number of seconds"),
                    })
                }
            },
            None => DEFAULT_AUTH_TIMEOUT,
        };

        Ok(AuthConfig { url, timeout })
    }
}

/// What a fault response exposes to the caller.
///
/// Faults always answer 400. `Detailed` puts the error chain in the body,
/// `Redacted` replaces it with a fixed message. Both log the full chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    #[default]
    Detailed,
    Redacted,
}

impl FaultPolicy {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    /// Unparseable values fall back to the default so that the fault path
    /// itself can never fail on configuration.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match optional(lookup, REDACT_FAULT_DETAILS).as_deref() {
            None => FaultPolicy::default(),
            Some(raw) => match parse_flag(raw) {
                Some(true) => FaultPolicy::Redacted,
                Some(false) => FaultPolicy::Detailed,
                None => {
                    tracing::warn!(
                        value = raw,
                        "ignoring unrecognized {REDACT_FAULT_DETAILS} value"
                    );
                    FaultPolicy::default()
                }
            },
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn optional<F>(lookup: &F, key: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}
