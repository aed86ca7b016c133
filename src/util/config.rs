use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use serde::Deserialize;
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SkinProfitDashboard";
const APP_NAME: &str = "SkinProfitDashboard";

/// Start-up defaults read from `config.json` in the platform config directory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_buy_price: f64,
    pub default_sell_price: f64,
    pub default_fee_pct: f64,
    pub default_item_count: usize,
    pub currency_symbol: String,
    pub export_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_buy_price: 100.0,
            default_sell_price: 150.0,
            default_fee_pct: 8.0,
            default_item_count: 2,
            currency_symbol: "$".to_string(),
            export_dir: None,
        }
    }
}

impl DashboardConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let mut config: DashboardConfig = serde_json::from_str(json)?;
        config.default_item_count = config.default_item_count.max(1);
        Ok(config)
    }

    /// Directory exports are written to: the configured one, else the user's
    /// download directory, else the working directory.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf)))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn read_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    DashboardConfig::parse(&data)
}

/// Loads the dashboard config, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config() -> DashboardConfig {
    let Some(path) = config_file() else {
        tracing::warn!("config directory unavailable; using defaults");
        return DashboardConfig::default();
    };

    match read_config(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded dashboard config");
            config
        }
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            DashboardConfig::default()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring config file: {err}");
            DashboardConfig::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = DashboardConfig::parse(r#"{ "default_fee_pct": 15.0, "currency_symbol": "€" }"#)
            .unwrap();

        assert_eq!(config.default_fee_pct, 15.0);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_buy_price, 100.0);
        assert_eq!(config.default_item_count, 2);
    }

    #[test]
    fn item_count_is_at_least_one() {
        let config = DashboardConfig::parse(r#"{ "default_item_count": 0 }"#).unwrap();
        assert_eq!(config.default_item_count, 1);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            DashboardConfig::parse("{ not json"),
            Err(ConfigError::Serde(_))
        ));
    }

    #[test]
    fn configured_export_dir_wins() {
        let config = DashboardConfig {
            export_dir: Some(PathBuf::from("/tmp/skins")),
            ..Default::default()
        };
        assert_eq!(config.resolved_export_dir(), PathBuf::from("/tmp/skins"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_config(Path::new("/definitely/not/here/config.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
