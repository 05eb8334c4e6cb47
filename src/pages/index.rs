//! Index page body generation

use maud::{Markup, html};

use crate::components::post_list::post_list;
use crate::post::Post;

/// Generates the index page body listing all posts.
///
/// Posts are rendered in the order given, which the caller has sorted
/// newest first.
///
/// # Arguments
///
/// * `posts`: All posts, sorted descending by publish date
///
/// # Returns
///
/// Index body markup for the base layout
pub fn generate(posts: &[Post]) -> Markup {
    html! {
        section class="post-index" {
            @if posts.is_empty() {
                p class="empty-state" { "No posts yet." }
            } @else {
                (post_list(posts))
            }
        }
    }
}
