//! Syntax highlighting with syntect.

use anyhow::{Context, Result, anyhow};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights fenced code blocks with a fixed color theme.
///
/// Holds the loaded syntax definitions and the selected theme so a single
/// instance can be reused across every post in a build. Output uses inline
/// styles, keeping the generated pages free of any stylesheet dependency
/// for code coloring.
#[derive(Debug)]
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Creates a highlighter using a named theme from syntect's defaults.
    ///
    /// # Arguments
    ///
    /// * `theme`: Theme name (base16-ocean.dark, InspiredGitHub, etc.)
    ///
    /// # Errors
    ///
    /// Returns error if the theme name is not in the default theme set.
    pub fn with_theme(theme: &str) -> Result<Self> {
        let themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .get(theme)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown highlighting theme: {}", theme))?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlights a code block for a language token.
    ///
    /// The token is the info string of a fenced code block (rust, python,
    /// etc.) and is matched against syntax names and file extensions.
    /// Unknown languages fall back to escaped plain text.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `token`: Language identifier from the fence info string
    ///
    /// # Returns
    ///
    /// HTML string of inline-styled spans
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to highlight a line.
    pub fn highlight_block(&self, code: &str, token: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token));

        let Some(syntax) = syntax else {
            return Ok(escape_html(code));
        };

        let mut lines = HighlightLines::new(syntax, &self.theme);
        let mut html = String::with_capacity(code.len() * 2);

        for line in LinesWithEndings::from(code) {
            let regions = lines
                .highlight_line(line, &self.syntax_set)
                .context("Failed to highlight code line")?;
            let rendered = styled_line_to_highlighted_html(&regions[..], IncludeBackground::No)
                .context("Failed to render highlighted line")?;
            html.push_str(&rendered);
        }

        Ok(html)
    }
}

/// Escapes HTML special characters.
///
/// Used for plain text fallback when the language is unknown.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_theme_default_set() {
        // Arrange & Act
        let result = Highlighter::with_theme("base16-ocean.dark");

        // Assert
        assert!(result.is_ok(), "Default theme should load");
    }

    #[test]
    fn test_with_theme_unknown() {
        // Arrange & Act
        let result = Highlighter::with_theme("no-such-theme");

        // Assert
        assert!(result.is_err(), "Unknown theme should fail");
        assert!(
            result.unwrap_err().to_string().contains("no-such-theme"),
            "Error should name the theme"
        );
    }

    #[test]
    fn test_highlight_block_rust() -> Result<()> {
        // Arrange
        let highlighter = Highlighter::with_theme("base16-ocean.dark")?;
        let code = "fn main() {\n    println!(\"hello\");\n}\n";

        // Act
        let html = highlighter.highlight_block(code, "rust")?;

        // Assert
        assert!(
            html.contains("<span style="),
            "Should emit inline-styled spans: {}",
            html
        );
        assert!(html.contains("main"), "Should contain function name");
        Ok(())
    }

    #[test]
    fn test_highlight_block_unknown_language_fallback() -> Result<()> {
        // Arrange
        let highlighter = Highlighter::with_theme("base16-ocean.dark")?;
        let code = "let x = <y>;";

        // Act
        let html = highlighter.highlight_block(code, "unknownlang")?;

        // Assert
        assert!(
            !html.contains("<span"),
            "Unknown language should not produce spans"
        );
        assert!(html.contains("&lt;y&gt;"), "Fallback should escape HTML");
        Ok(())
    }

    #[test]
    fn test_highlight_block_empty() -> Result<()> {
        // Arrange
        let highlighter = Highlighter::with_theme("base16-ocean.dark")?;

        // Act
        let html = highlighter.highlight_block("", "rust")?;

        // Assert
        assert_eq!(html, "", "Empty code should return empty string");
        Ok(())
    }

    #[test]
    fn test_escape_html_all_characters() {
        // Arrange
        let input = r#"<>&"'"#;

        // Act
        let output = escape_html(input);

        // Assert
        assert_eq!(output, "&lt;&gt;&amp;&quot;&#39;");
    }
}
