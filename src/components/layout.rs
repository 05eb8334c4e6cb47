//! Base page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::page::PageContext;

use super::social::social_links;

/// Wraps rendered page content in the outer HTML shell.
///
/// Provides the DOCTYPE, head metadata (title, author, description, date),
/// the sidebar with the site's about text and social links, and the main
/// content area. Every interpolated string is escaped by maud; only the
/// already-rendered inner HTML is injected verbatim.
///
/// # Arguments
///
/// * `page`: Page context with site fields and per-page metadata
///
/// # Returns
///
/// Complete HTML document as Markup
pub fn base_page(page: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.meta_title) }
                meta name="author" content=(page.meta_author);
                meta name="description" content=(page.meta_description);
                meta name="date" content=(page.meta_date);
                @if let Some(tag) = page.tag {
                    meta name="keywords" content=(tag);
                }
                link rel="stylesheet" href="/css/main.css";
            }
            body {
                div class="container" {
                    aside class="sidebar" {
                        @if !page.about.is_empty() {
                            p class="about" { (page.about) }
                        }
                        (social_links(page.social_links))
                        @if !page.email.is_empty() {
                            a class="email" href=(format!("mailto:{}", page.email)) {
                                (page.email)
                            }
                        }
                    }
                    main class="content" {
                        (PreEscaped(page.contents.as_str()))
                    }
                }
                footer {
                    p { "© " (page.meta_author) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(contents: &str) -> PageContext<'static> {
        PageContext {
            tag: None,
            about: "About the blog",
            email: "author@example.com",
            social_links: &[],
            contents: contents.to_string(),
            meta_title: "Blog".to_string(),
            meta_author: "Jane Doe".to_string(),
            meta_date: "2023-01-05T00:00:00+0000".to_string(),
            meta_description: "A technical blog".to_string(),
        }
    }

    #[test]
    fn test_base_page_structure() {
        // Arrange
        let page = context("<p>inner</p>");

        // Act
        let html = base_page(&page).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"), "Should emit doctype");
        assert!(html.contains("<title>Blog</title>"), "Should set title");
        assert!(
            html.contains("name=\"author\" content=\"Jane Doe\""),
            "Should set author meta"
        );
        assert!(
            html.contains("name=\"description\" content=\"A technical blog\""),
            "Should set description meta"
        );
        assert!(
            html.contains("name=\"date\" content=\"2023-01-05T00:00:00+0000\""),
            "Should set date meta"
        );
        assert!(html.contains("<p>inner</p>"), "Should inject inner HTML");
        assert!(html.contains("About the blog"), "Should render about text");
        assert!(
            html.contains("mailto:author@example.com"),
            "Should render email link"
        );
    }

    #[test]
    fn test_base_page_escapes_metadata() {
        // Arrange
        let mut page = context("<p>inner</p>");
        page.meta_title = "Ampersands & <angles>".to_string();

        // Act
        let html = base_page(&page).into_string();

        // Assert
        assert!(
            html.contains("Ampersands &amp; &lt;angles&gt;"),
            "User-supplied metadata must be escaped: {}",
            html
        );
    }

    #[test]
    fn test_base_page_tag_keywords() {
        // Arrange
        let mut page = context("");
        page.tag = Some("rust");

        // Act
        let html = base_page(&page).into_string();

        // Assert
        assert!(
            html.contains("name=\"keywords\" content=\"rust\""),
            "Tag pages should carry the tag as keywords"
        );
    }

    #[test]
    fn test_base_page_empty_optional_fields() {
        // Arrange
        let mut page = context("");
        page.about = "";
        page.email = "";

        // Act
        let html = base_page(&page).into_string();

        // Assert
        assert!(
            !html.contains("class=\"about\""),
            "Empty about text should be omitted"
        );
        assert!(!html.contains("mailto:"), "Empty email should be omitted");
    }
}
