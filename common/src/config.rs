//! Seeder configuration loaded from `.env` and environment variables.
//!
//! Every value has a default except the database target, which may also be
//! supplied on the command line and is therefore optional here.

use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PASSWORD: &str = "123";
pub const DEFAULT_HASH_SCHEME: &str = "bcrypt";
pub const DEFAULT_HASH_COST: u32 = 12;
pub const DEFAULT_USER_COUNT: u32 = 70;
pub const DEFAULT_USERNAME_PREFIX: &str = "user";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Represents the complete seeder configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// SQLite path or a `sqlite:`/`postgres://`/`mysql://` DSN.
    pub database_url: Option<String>,
    pub default_password: String,
    pub hash_scheme: String,
    /// bcrypt cost or argon2 time cost, depending on `hash_scheme`.
    pub hash_cost: u32,
    pub user_count: u32,
    pub username_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "master-user-seeder".into(),
            log_level: "info".into(),
            log_file: "logs/seeder.log".into(),
            log_to_stdout: false,
            database_url: None,
            default_password: DEFAULT_PASSWORD.into(),
            hash_scheme: DEFAULT_HASH_SCHEME.into(),
            hash_cost: DEFAULT_HASH_COST,
            user_count: DEFAULT_USER_COUNT,
            username_prefix: DEFAULT_USERNAME_PREFIX.into(),
        }
    }
}

impl Config {
    /// Loads `env_path` (if present) into the process environment, then reads
    /// the configuration from it.
    pub fn load(env_path: &str) -> Result<Self, ConfigError> {
        dotenvy::from_filename(env_path).ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            project_name: lookup("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: lookup("LOG_FILE").unwrap_or(defaults.log_file),
            log_to_stdout: lookup("LOG_TO_STDOUT").is_some_and(|v| v == "true"),
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            default_password: lookup("SEED_DEFAULT_PASSWORD").unwrap_or(defaults.default_password),
            hash_scheme: lookup("SEED_HASH_SCHEME").unwrap_or(defaults.hash_scheme),
            hash_cost: parse_or("SEED_HASH_COST", lookup("SEED_HASH_COST"), defaults.hash_cost)?,
            user_count: parse_or("SEED_USER_COUNT", lookup("SEED_USER_COUNT"), defaults.user_count)?,
            username_prefix: lookup("SEED_USERNAME_PREFIX").unwrap_or(defaults.username_prefix),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
