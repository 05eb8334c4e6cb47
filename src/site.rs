//! Site configuration loaded from YAML.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site-wide configuration decoded from the configuration YAML.
///
/// Loaded once at startup and passed by reference into the render passes.
/// Every field is optional in the YAML; missing fields decode to their
/// empty defaults rather than failing the load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub social_links: Vec<SocialLink>,
    pub author: String,
    pub email: String,
    pub about: String,
}

/// A single social media link rendered in the page sidebar.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
    pub color: String,
}

impl SiteConfig {
    /// Loads site configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the YAML is malformed.
    /// No partial or default configuration is substituted on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {}", path.display()))?;

        serde_yaml_ng::from_str(&raw)
            .with_context(|| format!("Failed to parse site config: {}", path.display()))
    }
}
