//! Per-page rendering context for the base layout.

use crate::site::SocialLink;

/// Metadata date format used in page `<meta>` tags, ISO-8601 with offset.
pub const META_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Data handed to the base layout for a single output page.
///
/// Combines the site-wide fields (about text, email, social links) with
/// page-specific metadata and the already-rendered inner HTML. Rebuilt for
/// every page that is written.
pub struct PageContext<'a> {
    /// Tag label when rendering a tag page.
    pub tag: Option<&'a str>,
    pub about: &'a str,
    pub email: &'a str,
    pub social_links: &'a [SocialLink],
    /// Rendered inner HTML, injected unescaped into the layout.
    pub contents: String,
    pub meta_title: String,
    pub meta_author: String,
    pub meta_date: String,
    pub meta_description: String,
}
