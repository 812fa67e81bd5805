// SPDX-License-Identifier: Apache-2.0

//! Configuration management for classmark.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `CLASSMARK_`, `__` for nesting)
//! 2. Config file: `~/.config/classmark/config.toml`
//!
//! Four settings are required for a run: the GitHub token, the classroom
//! organization, the roster file path, and the audit-log directory.
//! `GITHUB_TOKEN` is accepted as a fallback for the token setting.
//!
//! # Examples
//!
//! ```bash
//! CLASSMARK_GITHUB__ORG=cs104-fall classmark -p hw1- -a
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

use crate::error::ClassmarkError;

/// Raw application configuration as deserialized from the layered sources.
///
/// All fields are optional at this stage; [`AppConfig::into_settings`]
/// enforces the required ones with an error naming the missing key.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Roster file settings.
    pub roster: RosterConfig,
    /// Audit log settings.
    pub log: LogConfig,
}

/// GitHub API settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token for the GitHub API.
    pub token: Option<String>,
    /// Classroom organization that holds the student repositories.
    pub org: Option<String>,
}

/// Roster file settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path to the two-column name/username CSV.
    pub path: Option<PathBuf>,
}

/// Audit log settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory that receives the per-assignment audit logs.
    pub dir: Option<PathBuf>,
}

/// Validated settings for one run.
#[derive(Debug)]
pub struct Settings {
    /// GitHub API token.
    pub token: SecretString,
    /// Classroom organization name.
    pub org: String,
    /// Path to the roster CSV.
    pub roster_path: PathBuf,
    /// Directory for audit logs.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Validates the required settings, consuming the raw config.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmarkError::Config`] naming the first missing setting
    /// and the environment variable that would supply it.
    pub fn into_settings(self) -> Result<Settings, ClassmarkError> {
        let token_fallback = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        self.resolve(token_fallback)
    }

    fn resolve(self, token_fallback: Option<String>) -> Result<Settings, ClassmarkError> {
        let token = self
            .github
            .token
            .filter(|t| !t.is_empty())
            .or(token_fallback)
            .ok_or_else(|| missing("github.token", "CLASSMARK_GITHUB__TOKEN or GITHUB_TOKEN"))?;
        let org = self
            .github
            .org
            .filter(|o| !o.is_empty())
            .ok_or_else(|| missing("github.org", "CLASSMARK_GITHUB__ORG"))?;
        let roster_path = self
            .roster
            .path
            .ok_or_else(|| missing("roster.path", "CLASSMARK_ROSTER__PATH"))?;
        let log_dir = self
            .log
            .dir
            .ok_or_else(|| missing("log.dir", "CLASSMARK_LOG__DIR"))?;

        Ok(Settings {
            token: SecretString::from(token),
            org,
            roster_path,
            log_dir,
        })
    }
}

fn missing(key: &str, env: &str) -> ClassmarkError {
    ClassmarkError::Config {
        message: format!("missing required setting `{key}` - set {env} or add it to the config file"),
    }
}

/// Returns the classmark configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/classmark`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("classmark");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("classmark")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from the config file (if it exists) and environment variables.
/// Environment variables use the prefix `CLASSMARK_` and double underscore
/// for nested keys (e.g., `CLASSMARK_GITHUB__ORG`).
///
/// # Errors
///
/// Returns [`ClassmarkError::Config`] if the config file exists but is
/// invalid.
pub fn load_config() -> Result<AppConfig, ClassmarkError> {
    let config_path = config_file_path();

    let config = Config::builder()
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        .add_source(
            Environment::with_prefix("CLASSMARK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
