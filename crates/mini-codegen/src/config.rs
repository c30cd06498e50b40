//! Project configuration (`mini.toml`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::generator::GeneratorOptions;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "mini.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiniConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub generate: GenerateSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateSection {
    /// Base directory for generated components, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Service used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_service: Option<String>,
}

impl MiniConfig {
    /// Load `mini.toml` from `project_dir`. A missing file yields the defaults.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve generator options. Command-line values win over the config.
    pub fn generator_options(
        &self,
        project_dir: &Path,
        service: Option<String>,
        directory: Option<PathBuf>,
    ) -> GeneratorOptions {
        let directory = directory.unwrap_or_else(|| match &self.generate.directory {
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        });

        GeneratorOptions {
            service: service.or_else(|| self.generate.default_service.clone()),
            directory: Some(directory),
        }
    }
}
