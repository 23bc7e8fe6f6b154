use crate::validate::DEFAULT_ENTRY_POINTS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Functions every combined script must define
    #[serde(default = "default_entry_points")]
    pub required_entry_points: Vec<String>,
    /// Shared fragments merged ahead of the per-test files
    #[serde(default)]
    pub base: Vec<String>,
    /// Default output location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            required_entry_points: default_entry_points(),
            base: Vec::new(),
            output: None,
        }
    }
}

impl GeneratorConfig {
    /// Base fragments to use: explicit ones win over the configured list
    pub fn base_paths(&self, explicit: Vec<PathBuf>) -> Vec<PathBuf> {
        if explicit.is_empty() {
            self.base.iter().map(PathBuf::from).collect()
        } else {
            explicit
        }
    }

    /// Output location to use: an explicit one wins over the configured one
    pub fn output_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.output.as_ref().map(PathBuf::from))
    }
}

fn default_entry_points() -> Vec<String> {
    DEFAULT_ENTRY_POINTS.iter().map(|s| s.to_string()).collect()
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("fixturegen.toml")
}

pub fn load_config(path: Option<&Path>) -> crate::Result<Option<GeneratorConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: GeneratorConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &GeneratorConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
