//! Shared test utilities for integration tests.
//!
//! Provides helper functions for building temporary post directories and
//! site configuration files used across multiple test files.

use anyhow::Result;
use mdblog::{DEFAULT_THEME, MarkdownRenderer, SiteConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temporary directory pair (posts directory, output directory).
///
/// # Errors
///
/// Returns error if directory creation fails.
pub fn create_build_dirs() -> Result<(TempDir, TempDir)> {
    Ok((TempDir::new()?, TempDir::new()?))
}

/// Writes a post file with the given front matter and body.
///
/// # Arguments
///
/// * `dir`: Posts directory
/// * `name`: File name, typically `YYYY-MM-DD-slug.md`
/// * `front`: Front-matter lines without the `---` delimiters
/// * `body`: Markdown body
///
/// # Errors
///
/// Returns error if the file write fails.
pub fn write_post(dir: &Path, name: &str, front: &str, body: &str) -> Result<()> {
    fs::write(dir.join(name), format!("---\n{}---\n\n{}\n", front, body))?;
    Ok(())
}

/// Returns a site configuration used by the end-to-end scenarios.
pub fn test_site() -> SiteConfig {
    SiteConfig {
        social_links: vec![],
        author: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        about: "A technical blog".to_string(),
    }
}

/// Creates a Markdown renderer with the default highlighting theme.
pub fn test_renderer() -> MarkdownRenderer<'static> {
    MarkdownRenderer::with_theme(DEFAULT_THEME).expect("Default theme should load")
}

/// Runs all three render passes in the orchestrator's order.
///
/// # Errors
///
/// Returns the first error from any pass.
pub fn build_site(site: &SiteConfig, posts_dir: &Path, output: &Path) -> Result<()> {
    let renderer = test_renderer();
    mdblog::render_index(site, &renderer, posts_dir, output)?;
    mdblog::render_tag_pages(site, &renderer, posts_dir, output)?;
    mdblog::render_posts(site, &renderer, posts_dir, output)?;
    Ok(())
}
