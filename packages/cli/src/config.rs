use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "themeloom.config.json";

/// Themeloom configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Annotated theme source file
    pub theme_path: String,

    /// Destination for the resolved theme
    pub output_path: String,

    /// Component generation options; wrapper output is off when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsConfig {
    /// Directory the wrapper and story files are written under
    pub out_dir: String,

    /// Emit a story next to each wrapper
    #[serde(default = "default_stories")]
    pub stories: bool,
}

fn default_stories() -> bool {
    true
}

impl Config {
    /// Load config from an explicit path, or DEFAULT_CONFIG_NAME in `cwd`.
    pub fn load(cwd: &str, path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME),
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("cannot read {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", config_path.display()))?;
        Ok(config)
    }

    /// Absolute path to the theme source file
    pub fn theme_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.theme_path)
    }

    /// Absolute path to the resolved theme destination
    pub fn output_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.output_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_path: "src/theme.ts".to_string(),
            output_path: "src/theme.gen.ts".to_string(),
            components: None,
        }
    }
}
