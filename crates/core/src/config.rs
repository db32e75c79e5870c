//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the optional
//! `config.toml` under the user config directory, `PREDICTOR__*` environment
//! variables, and finally the `SUPABASE_URL` / `SUPABASE_ANON_KEY` pair.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use ::config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Public FPL bootstrap endpoint listing teams and players.
pub const DEFAULT_CATALOG_URL: &str = "https://fantasy.premierleague.com/api/bootstrap-static/";
/// Table written when no override is configured.
pub const DEFAULT_PREDICTIONS_TABLE: &str = "predictions";
/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the store URL.
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the store access key.
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_ANON_KEY";

const CONFIG_DIR: &str = "predictor";
const CONFIG_FILE: &str = "config.toml";

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Season predictor configuration.
#
# Store credentials are read from SUPABASE_URL and SUPABASE_ANON_KEY.
# Any key below may also be overridden with PREDICTOR__<KEY>.

catalog_url = "https://fantasy.premierleague.com/api/bootstrap-static/"
predictions_table = "predictions"
request_timeout_secs = 10
"#;

/// Resolved settings for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Team/player catalog endpoint.
    pub catalog_url: String,
    /// Supabase project URL.
    #[serde(default)]
    pub supabase_url: String,
    /// Supabase anonymous (public) API key.
    #[serde(default)]
    pub supabase_anon_key: String,
    /// Table receiving prediction rows.
    pub predictions_table: String,
    /// Per-request timeout for the shared HTTP client.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from the default file location and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            &config_path(),
            std::env::var(SUPABASE_URL_ENV).ok(),
            std::env::var(SUPABASE_KEY_ENV).ok(),
        )
    }

    /// Load configuration from `path` with explicit store credentials.
    pub fn load_from(
        path: &Path,
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("catalog_url", DEFAULT_CATALOG_URL)?
            .set_default("predictions_table", DEFAULT_PREDICTIONS_TABLE)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("PREDICTOR").separator("__"))
            .set_override_option("supabase_url", supabase_url)?
            .set_override_option("supabase_anon_key", supabase_anon_key)?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "supabase_url",
                env_var: SUPABASE_URL_ENV,
            });
        }
        if self.supabase_anon_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "supabase_anon_key",
                env_var: SUPABASE_KEY_ENV,
            });
        }
        Ok(())
    }

    /// Configured per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the HTTP client shared by the catalog loader and the store.
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!("season-predictor/", env!("CARGO_PKG_VERSION")))
            .timeout(self.request_timeout())
            .build()?;
        Ok(client)
    }
}

/// Location of the user configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the default configuration file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_config_at(&config_path())
}

fn ensure_config_at(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn creds() -> (Option<String>, Option<String>) {
        (
            Some("https://abc.supabase.co".to_string()),
            Some("anon".to_string()),
        )
    }

    #[test]
    fn defaults_apply_without_a_file() -> Result<()> {
        let dir = tempdir()?;
        let (url, key) = creds();
        let config = AppConfig::load_from(&dir.path().join("missing.toml"), url, key)?;
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.predictions_table, "predictions");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "catalog_url = \"http://localhost:9000/bootstrap\"\nrequest_timeout_secs = 3\n",
        )?;
        let (url, key) = creds();
        let config = AppConfig::load_from(&path, url, key)?;
        assert_eq!(config.catalog_url, "http://localhost:9000/bootstrap");
        assert_eq!(config.request_timeout_secs, 3);
        Ok(())
    }

    #[test]
    fn missing_credentials_fail_at_startup() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");

        let err = AppConfig::load_from(&path, None, Some("anon".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { key: "supabase_url", .. }));

        let url = Some("https://abc.supabase.co".to_string());
        let err = AppConfig::load_from(&path, url, Some(" ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { key: "supabase_anon_key", .. }));
        Ok(())
    }

    #[test]
    fn default_config_is_written_once_and_loadable() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.toml");
        ensure_config_at(&path)?;
        assert!(path.exists());

        fs::write(&path, "predictions_table = \"custom\"\n")?;
        ensure_config_at(&path)?;
        let (url, key) = creds();
        let config = AppConfig::load_from(&path, url, key)?;
        assert_eq!(config.predictions_table, "custom");
        Ok(())
    }
}
