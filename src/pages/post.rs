//! Individual post page body generation

use maud::{Markup, PreEscaped, html};

use crate::post::Post;

/// Generates the body for an individual post page.
///
/// Shows the title, the original date string, the tag links, and the
/// already-rendered Markdown body (injected unescaped).
///
/// # Arguments
///
/// * `post`: Parsed post
///
/// # Returns
///
/// Post body markup for the base layout
pub fn generate(post: &Post) -> Markup {
    html! {
        article class="post" {
            header class="post-header" {
                h1 class="post-title" { (post.title) }
                span class="post-date" { (post.date_string) }
                @if !post.tags.is_empty() {
                    div class="post-tags" {
                        @for tag in &post.tags {
                            a class="tag" href=(format!("/tag/{}/", tag)) { "#" (tag) }
                        }
                    }
                }
            }
            div class="post-body" {
                (PreEscaped(post.contents.as_str()))
            }
        }
    }
}
