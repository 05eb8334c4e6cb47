use anyhow::{Context, Result};
use mdblog::{Config, MarkdownRenderer, SiteConfig};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = SiteConfig::load(&config.config).context("Failed to load site configuration")?;

    let renderer = MarkdownRenderer::with_theme(&config.theme)
        .context("Failed to create markdown renderer")?;

    println!("Rendering index page for posts");
    mdblog::render_index(&site, &renderer, &config.markdown, &config.output)
        .context("Failed to render index page")?;

    println!("Rendering tag pages for posts");
    mdblog::render_tag_pages(&site, &renderer, &config.markdown, &config.output)
        .context("Failed to render tag pages")?;

    println!("Rendering individual blog posts");
    mdblog::render_posts(&site, &renderer, &config.markdown, &config.output)
        .context("Failed to render blog posts")?;

    println!("Generated site at {}", config.output.display());

    Ok(())
}
