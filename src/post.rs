//! Post parsing: front matter extraction and URL derivation.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::markdown::MarkdownRenderer;

/// Required format for the front-matter `date` field, e.g. `2023-Jan-05`.
pub const DATE_FORMAT: &str = "%Y-%b-%d";

/// Front-matter fields decoded from a post's leading YAML block.
///
/// Every field is optional at decode time; `date` is validated as
/// mandatory when the [`Post`] is built. `tags` is a heterogeneous YAML
/// list so that non-string entries survive decoding and can be mapped to
/// their placeholder form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub preview: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<serde_yaml_ng::Value>>,
}

/// A fully parsed blog post.
///
/// Built fresh from a Markdown file on each render pass that needs it and
/// dropped at the end of the pass; nothing is cached across passes.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub date: NaiveDate,
    pub date_string: String,
    pub preview: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: String,
    pub contents: String,
}

impl Post {
    /// Parses a post from a Markdown file.
    ///
    /// Reads the file, decodes its front matter into typed fields, renders
    /// the body to HTML, and derives the canonical URL from the file path.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the Markdown file
    /// * `renderer`: Shared Markdown renderer
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file cannot be read
    /// - The front matter is malformed YAML
    /// - The `date` field is missing or does not match `YYYY-Mon-DD`
    /// - Markdown rendering fails
    pub fn from_file(path: impl AsRef<Path>, renderer: &MarkdownRenderer<'_>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post file: {}", path.display()))?;

        let front = match extract_front_matter(&content) {
            Some(raw) => serde_yaml_ng::from_str::<FrontMatter>(raw)
                .with_context(|| format!("Malformed front matter in {}", path.display()))?,
            None => FrontMatter::default(),
        };

        let date_string = front
            .date
            .ok_or_else(|| anyhow!("Missing front-matter date in {}", path.display()))?;
        let date = NaiveDate::parse_from_str(&date_string, DATE_FORMAT).with_context(|| {
            format!(
                "Invalid front-matter date {:?} in {} (expected YYYY-Mon-DD)",
                date_string,
                path.display()
            )
        })?;

        // Non-string tag entries become empty-string placeholders so the
        // tag list length always equals the front-matter list length.
        let tags = front
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|value| value.as_str().map(str::to_string).unwrap_or_default())
            .collect();

        let contents = renderer
            .render(&content)
            .with_context(|| format!("Failed to render post body: {}", path.display()))?;

        Ok(Self {
            title: front.title.unwrap_or_default(),
            date,
            date_string,
            preview: front.preview.unwrap_or_default(),
            description: front.description.unwrap_or_default(),
            tags,
            url: derive_url(path),
            contents,
        })
    }
}

/// Extracts the raw YAML front-matter block from post content.
///
/// The block is delimited by `---` lines at the very start of the file.
/// Returns None when there is no opening delimiter on the first line or
/// no closing delimiter at all.
fn extract_front_matter(content: &str) -> Option<&str> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let start = content.find('\n')? + 1;
    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&content[start..offset]);
        }
        offset += line.len();
    }

    None
}

/// Derives a post's canonical URL from its file path.
///
/// Takes the file name with its parent-directory prefix stripped (which
/// leaves the directory-boundary separator in place), removes the `.md`
/// suffix, replaces exactly the first three `-` occurrences with `/`, and
/// appends `.html`. For `blog/2023-01-05-my-first-post.md` this yields
/// `/2023/01/05/my-first-post.html`. Deterministic for a fixed path.
pub(crate) fn derive_url(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let parent = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = path_str.strip_prefix(parent.as_str()).unwrap_or(&path_str);
    let stem = name.strip_suffix(".md").unwrap_or(name);

    let mut url = replace_first_n(stem, '-', '/', 3);
    url.push_str(".html");
    url
}

/// Replaces the first `n` occurrences of a character.
fn replace_first_n(s: &str, from: char, to: char, n: usize) -> String {
    let mut replaced = 0;
    s.chars()
        .map(|c| {
            if c == from && replaced < n {
                replaced += 1;
                to
            } else {
                c
            }
        })
        .collect()
}
