use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::i18n::Locale;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Label of the root node
    pub root_label: String,
    /// Start with the demo tree instead of a bare root
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Interface language: en, ru
    pub locale: Locale,
    /// How long status messages stay visible (milliseconds)
    pub status_timeout_ms: u64,
    /// Event poll interval (milliseconds)
    pub tick_rate_ms: u64,
    /// Spaces per tree level (1-8)
    pub indent_width: usize,
    /// Show the pre-order traversal panel
    pub show_order_panel: bool,
    /// Capture mouse input
    pub mouse: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_label: "Root".to_string(),
            seed_demo: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            status_timeout_ms: 1600,
            tick_rate_ms: 100,
            indent_width: 2,
            show_order_panel: true,
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if it
    /// exists, falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/treeview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("treeview").join("config.toml"))
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".into()));
        }
        if self.tui.status_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "status_timeout_ms must be positive".into(),
            ));
        }
        if !(1..=8).contains(&self.tui.indent_width) {
            return Err(ConfigError::Invalid(format!(
                "indent_width must be 1-8, got {}",
                self.tui.indent_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tui.status_timeout_ms, 1600);
        assert_eq!(config.tree.root_label, "Root");
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[tui]"));
        assert!(toml_str.contains("locale = \"en\""));
    }

    #[test]
    fn zero_indent_is_rejected() {
        let mut config = Config::default();
        config.tui.indent_width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let mut config = Config::default();
        config.tui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
