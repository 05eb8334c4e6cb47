//! Static blog generator for directories of Markdown posts.

pub mod components;
mod config;
mod discovery;
mod generators;
mod highlight;
mod markdown;
mod page;
pub mod pages;
mod post;
mod site;

pub use config::{Config, DEFAULT_THEME};
pub use discovery::find_post_files;
pub use generators::{collect_posts, render_index, render_posts, render_tag_pages};
pub use highlight::Highlighter;
pub use markdown::MarkdownRenderer;
pub use page::{META_DATE_FORMAT, PageContext};
pub use post::{DATE_FORMAT, FrontMatter, Post};
pub use site::{SiteConfig, SocialLink};
