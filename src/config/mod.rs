use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

fn default_theme() -> String {
    "dark".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme name passed to the grid ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Alternate row backgrounds
    #[serde(default = "default_true")]
    pub striped: bool,

    /// Ask before deleting a row
    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    /// Per-slot theme color overrides, hex strings keyed by slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            page_size: default_page_size(),
            striped: true,
            confirm_delete: true,
            colors: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tabulon");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // A zero page size would render an empty grid forever
        let mut clean_config = self.clone();
        if clean_config.page_size == 0 {
            clean_config.page_size = default_page_size();
        }

        let content = toml::to_string_pretty(&clean_config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let mut colors = HashMap::new();
        colors.insert("accent".to_string(), "#ffc107".to_string());

        let config = AppConfig {
            theme: "light".to_string(),
            page_size: 10,
            striped: false,
            confirm_delete: true,
            colors,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.page_size, deserialized.page_size);
        assert_eq!(config.striped, deserialized.striped);
        assert_eq!(config.colors.len(), deserialized.colors.len());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.page_size, 5);
        assert!(config.striped);
        assert!(config.confirm_delete);
    }
}
