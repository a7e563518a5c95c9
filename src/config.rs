use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_image_preview_enabled")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_base_url() -> String {
    "https://dog.ceo/api".to_string()
}

fn default_image_count() -> u32 {
    12
}

fn default_image_preview_enabled() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

/// Dog API caps random image requests at 50
const MAX_IMAGE_COUNT: u32 = 50;

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_count: default_image_count(),
            vim_mode: false,
            image_preview_enabled: default_image_preview_enabled(),
            image_protocol: default_image_protocol(),
            open_command: None,
        }
    }
}

impl Config {
    /// Parse and validate a YAML config document
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // An empty file is a valid config with every field defaulted
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config =
            serde_yaml::from_str(contents).context("Failed to parse config")?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        if config.image_count == 0 || config.image_count > MAX_IMAGE_COUNT {
            anyhow::bail!(
                "image_count must be between 1 and {}, got {}",
                MAX_IMAGE_COUNT,
                config.image_count
            );
        }

        Ok(config)
    }

    /// Load config from the resolved path, or fall back to defaults
    pub fn load(cli_path: Option<String>) -> Result<(Self, Option<PathBuf>)> {
        let Some(path) = resolve_config_path(cli_path)? else {
            return Ok((Self::default(), None));
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok((config, Some(path)))
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists in the default locations.
/// An explicit CLI path that doesn't exist is an error.
pub fn resolve_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // ~/.config/dogtui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dogtui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config.base_url, "https://dog.ceo/api");
        assert_eq!(config.image_count, 12);
        assert!(!config.vim_mode);
        assert!(config.image_preview_enabled);
        assert_eq!(config.image_protocol, "auto");
        assert!(config.open_command.is_none());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_yaml_str("vim_mode: true\nopen_command: xdg-open\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.image_count, 12);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::from_yaml_str("base_url: http://localhost:8080/api/\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_image_count_out_of_range_rejected() {
        assert!(Config::from_yaml_str("image_count: 0\n").is_err());
        assert!(Config::from_yaml_str("image_count: 51\n").is_err());
        assert!(Config::from_yaml_str("image_count: 50\n").is_ok());
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        let result = resolve_config_path(Some("/definitely/not/here/config.yaml".to_string()));
        assert!(result.is_err());
    }
}
