//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Default syntax highlighting theme for fenced code blocks.
///
/// Posts are highlighted with a single fixed color theme baked into the
/// generated HTML, so every page shares the same palette. The default can
/// be swapped for any theme shipped with syntect's default theme set.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Command line configuration for mdblog.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdblog", version, about, long_about = None)]
pub struct Config {
    /// Path to the site configuration YAML
    #[arg(long, default_value = "global.config.yaml")]
    pub config: PathBuf,

    /// Root directory containing Markdown posts
    #[arg(long, default_value = "blog")]
    pub markdown: PathBuf,

    /// Output directory for generated HTML
    #[arg(short, long, default_value = "docs")]
    pub output: PathBuf,

    /// Syntax highlighting theme for fenced code blocks
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the posts directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.markdown.exists() {
            bail!(
                "Posts directory does not exist: {}",
                self.markdown.display()
            );
        }

        Ok(())
    }
}
