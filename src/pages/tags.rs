//! Tag page body generation

use maud::{Markup, html};

use crate::components::post_list::post_list;
use crate::post::Post;

/// Generates a tag page body listing the posts carrying one tag.
///
/// # Arguments
///
/// * `tag`: Tag label for the page heading
/// * `posts`: Posts carrying the tag, sorted descending by publish date
///
/// # Returns
///
/// Tag listing body markup for the base layout
pub fn generate(tag: &str, posts: &[&Post]) -> Markup {
    html! {
        section class="tag-index" {
            header class="tag-header" {
                h1 { "Posts tagged " span class="tag-name" { (tag) } }
                span class="badge" { (posts.len()) " posts" }
            }
            (post_list(posts.iter().copied()))
        }
    }
}
