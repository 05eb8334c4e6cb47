//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;

use crate::highlight::Highlighter;

/// Renders post Markdown to HTML.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, and footnotes. A leading `---`-delimited front-matter block
/// is excluded from the rendered output; metadata extraction from that
/// block is the post parser's job. Fenced code blocks are highlighted with
/// syntect using a fixed color theme.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures GFM extensions, smart punctuation, raw HTML passthrough
    /// (post content is trusted) and the YAML front-matter delimiter.
    ///
    /// # Arguments
    ///
    /// * `theme`: Syntax highlighting theme name
    ///
    /// # Errors
    ///
    /// Returns error if the highlighting theme cannot be loaded.
    pub fn with_theme(theme: &str) -> Result<Self> {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.front_matter_delimiter = Some("---".to_string());

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (post content is trusted)
        options.render.unsafe_ = true;

        let highlighter = Highlighter::with_theme(theme)
            .with_context(|| format!("Failed to create syntax highlighter with theme: {}", theme))?;

        Ok(Self {
            options,
            highlighter,
        })
    }

    /// Renders Markdown content to an HTML string.
    ///
    /// Front matter is dropped from the output. Code blocks with a language
    /// fence are replaced by syntect highlighted HTML.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content, including any front-matter block
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails.
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Post-processes HTML to apply syntax highlighting.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the plain text content with inline-styled highlighted HTML.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        // Pattern: <code class="language-LANG">CODE</code>
        while let Some(code_start) = html[search_pos..].find("<code class=\"language-") {
            let code_start = search_pos + code_start;

            let lang_start = code_start + "<code class=\"language-".len();
            let lang_end = match html[lang_start..].find('"') {
                Some(pos) => lang_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let language = &html[lang_start..lang_end];

            let content_start = match html[lang_end..].find('>') {
                Some(pos) => lang_end + pos + 1,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let code_content = &html[content_start..content_end];

            // comrak escapes &, <, >, ", ' inside code blocks
            let decoded_content = html_decode(code_content);

            result.push_str(&html[last_end..code_start]);

            let highlighted = self
                .highlighter
                .highlight_block(&decoded_content, language)
                .context("Failed to highlight code block")?;

            result.push_str("<code class=\"language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str("</code>");

            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }
}

/// Decodes HTML entities in code block content.
///
/// Reverses comrak's escaping before the code is passed to syntect.
fn html_decode(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
