//! Post listing components shared by the index and tag pages

use maud::{Markup, html};

use crate::post::Post;

/// Renders a single post entry in a listing.
///
/// Shows the linked title, the original date string, the preview text when
/// present, and the post's tags as links to their tag pages.
pub fn post_entry(post: &Post) -> Markup {
    html! {
        li class="post-entry" {
            a class="post-title" href=(post.url) {
                h2 { (post.title) }
            }
            span class="post-date" { (post.date_string) }
            @if !post.preview.is_empty() {
                p class="post-preview" { (post.preview) }
            }
            @if !post.tags.is_empty() {
                div class="post-tags" {
                    @for tag in &post.tags {
                        a class="tag" href=(format!("/tag/{}/", tag)) { "#" (tag) }
                    }
                }
            }
        }
    }
}

/// Renders an ordered post listing.
///
/// Callers pass posts already sorted newest first; this component renders
/// them in the order given.
pub fn post_list<'a, I>(posts: I) -> Markup
where
    I: IntoIterator<Item = &'a Post>,
{
    html! {
        ul class="post-list" {
            @for post in posts {
                (post_entry(post))
            }
        }
    }
}
