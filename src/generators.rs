//! Render passes that write the output HTML tree.

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::components::layout::base_page;
use crate::discovery::find_post_files;
use crate::markdown::MarkdownRenderer;
use crate::page::{META_DATE_FORMAT, PageContext};
use crate::pages;
use crate::post::Post;
use crate::site::SiteConfig;

/// Discovers, parses, and sorts all posts under a directory.
///
/// Every render pass re-collects posts instead of sharing a parsed set;
/// builds are small enough that the repeated parsing is accepted.
///
/// # Arguments
///
/// * `renderer`: Shared Markdown renderer
/// * `posts_dir`: Root directory of Markdown posts
///
/// # Returns
///
/// Posts sorted descending by publish date (stable sort)
///
/// # Errors
///
/// Returns error if discovery fails or any post fails to parse.
pub fn collect_posts(
    renderer: &MarkdownRenderer<'_>,
    posts_dir: impl AsRef<Path>,
) -> Result<Vec<Post>> {
    let files = find_post_files(posts_dir)?;

    let mut posts = Vec::with_capacity(files.len());
    for file in &files {
        posts.push(Post::from_file(file, renderer)?);
    }

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Renders the index page listing all posts.
///
/// Writes `<output>/index.html`. The page metadata uses the configured
/// author as the single source of truth and the about text as the
/// description; the render timestamp becomes the metadata date.
///
/// # Errors
///
/// Returns error if post collection or the file write fails.
pub fn render_index(
    site: &SiteConfig,
    renderer: &MarkdownRenderer<'_>,
    posts_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let posts = collect_posts(renderer, posts_dir)?;
    let body = pages::index::generate(&posts);

    let page = PageContext {
        tag: None,
        about: &site.about,
        email: &site.email,
        social_links: &site.social_links,
        contents: body.into_string(),
        meta_title: "Blog".to_string(),
        meta_author: site.author.clone(),
        meta_date: Local::now().format(META_DATE_FORMAT).to_string(),
        meta_description: site.about.clone(),
    };

    write_page(&output.as_ref().join("index.html"), &page)
}

/// Renders one listing page per distinct tag.
///
/// Posts are grouped after the descending date sort, so each tag group
/// keeps that order while the set of tags itself has no defined order.
/// Writes `<output>/tag/<tag>/index.html` for every distinct tag.
///
/// # Errors
///
/// Returns error if post collection or any file write fails.
pub fn render_tag_pages(
    site: &SiteConfig,
    renderer: &MarkdownRenderer<'_>,
    posts_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let posts = collect_posts(renderer, posts_dir)?;
    let output = output.as_ref();

    let mut tag_index: HashMap<&str, Vec<&Post>> = HashMap::new();
    for post in &posts {
        for tag in &post.tags {
            tag_index.entry(tag.as_str()).or_default().push(post);
        }
    }

    for (tag, tagged) in &tag_index {
        let body = pages::tags::generate(tag, tagged);

        let page = PageContext {
            tag: Some(tag),
            about: &site.about,
            email: &site.email,
            social_links: &site.social_links,
            contents: body.into_string(),
            meta_title: tag.to_string(),
            meta_author: site.author.clone(),
            meta_date: Local::now().format(META_DATE_FORMAT).to_string(),
            meta_description: site.about.clone(),
        };

        write_page(&output.join("tag").join(tag).join("index.html"), &page)?;
    }

    Ok(())
}

/// Renders every discovered post to its own page.
///
/// Each post is written to `<output><derived-url>` with directories
/// created as needed. The post is parsed before its output file is
/// created, so a malformed post aborts the pass without leaving a
/// half-written page behind.
///
/// # Errors
///
/// Returns error if discovery, parsing, or any file write fails.
pub fn render_posts(
    site: &SiteConfig,
    renderer: &MarkdownRenderer<'_>,
    posts_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let files = find_post_files(posts_dir)?;
    let output = output.as_ref();

    for file in &files {
        let post = Post::from_file(file, renderer)?;
        let body = pages::post::generate(&post);

        let meta_date = post
            .date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format(META_DATE_FORMAT)
            .to_string();

        let page = PageContext {
            tag: None,
            about: &site.about,
            email: &site.email,
            social_links: &site.social_links,
            contents: body.into_string(),
            meta_title: post.title.clone(),
            meta_author: site.author.clone(),
            meta_date,
            meta_description: post.description.clone(),
        };

        // The derived URL keeps the directory-boundary separator; strip it
        // so the join stays inside the output tree.
        let relative = post.url.trim_start_matches('/');
        write_page(&output.join(relative), &page)?;
    }

    Ok(())
}

/// Wraps a page body in the base layout and writes it to disk.
///
/// Creates parent directories as needed. The file handle is scoped to the
/// write and released on both success and error paths.
fn write_page(path: &Path, page: &PageContext<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, base_page(page).into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))
}
