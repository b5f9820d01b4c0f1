//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `MAISON_DATA_DIR` - Directory holding persisted state (default: .maison)
//! - `MAISON_SIMULATE_LATENCY` - Apply mock API delays (default: true)
//! - `MAISON_TAX_RATE` - Tax rate shown in the cart summary (default: 0.10)
//! - `MAISON_CACHE_TTL_SECS` - Product cache time-to-live (default: 300)
//! - `MAISON_CACHE_CAPACITY` - Product cache entry limit (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

use crate::api::LatencyProfile;

const DEFAULT_DATA_DIR: &str = ".maison";
const DEFAULT_TAX_RATE: &str = "0.10";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for file-backed storage
    pub data_dir: PathBuf,
    /// Whether the mock API sleeps before answering
    pub simulate_latency: bool,
    /// Tax rate applied to the cart summary (0.10 = 10%)
    pub tax_rate: Decimal,
    /// Product cache settings
    pub cache: CacheConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<SecretString>,
}

/// In-memory product cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached entries
    pub capacity: u64,
    /// Time-to-live for each entry
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulate_latency: true,
            tax_rate: Decimal::new(10, 2),
            cache: CacheConfig::default(),
            sentry_dsn: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("MAISON_DATA_DIR", DEFAULT_DATA_DIR));
        let simulate_latency = parse_bool(
            "MAISON_SIMULATE_LATENCY",
            &get_env_or_default("MAISON_SIMULATE_LATENCY", "true"),
        )?;
        let tax_rate = parse_tax_rate(&get_env_or_default("MAISON_TAX_RATE", DEFAULT_TAX_RATE))?;
        let cache = CacheConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN").map(SecretString::from);

        Ok(Self {
            data_dir,
            simulate_latency,
            tax_rate,
            cache,
            sentry_dsn,
        })
    }

    /// Delays the mock API should apply.
    #[must_use]
    pub fn latency_profile(&self) -> LatencyProfile {
        if self.simulate_latency {
            LatencyProfile::default()
        } else {
            LatencyProfile::none()
        }
    }
}

impl CacheConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let ttl_secs = get_parsed_env("MAISON_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let capacity = get_parsed_env("MAISON_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?;
        Ok(Self {
            capacity,
            ttl: Duration::from_secs(ttl_secs),
        })
    }
}

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// Tax rate must be a decimal fraction in `[0, 1]`.
fn parse_tax_rate(value: &str) -> Result<Decimal, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("MAISON_TAX_RATE".to_string(), reason);

    let rate = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| invalid(e.to_string()))?;
    if rate.is_sign_negative() || rate > Decimal::ONE {
        return Err(invalid(format!("must be between 0 and 1 (got {rate})")));
    }
    Ok(rate)
}
