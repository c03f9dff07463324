/* src/cli/core/src/config.rs */

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TrellisConfig {
  #[serde(default)]
  pub project: ProjectSection,
  #[serde(default)]
  pub build: BuildSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProjectSection {
  #[serde(default)]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BuildSection {
  /// Directory of transpiled page sources, relative to the config file.
  #[serde(default = "default_pages_dir")]
  pub pages_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { pages_dir: default_pages_dir() }
  }
}

fn default_pages_dir() -> String {
  "pages".to_string()
}

/// Load trellis.toml. A missing file is not an error; defaults apply.
pub(crate) fn load_config(path: &Path) -> Result<TrellisConfig> {
  if !path.exists() {
    return Ok(TrellisConfig::default());
  }
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
}
