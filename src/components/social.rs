//! Social link list component

use maud::{Markup, html};

use crate::site::SocialLink;

/// Renders the configured social links as an icon list.
///
/// Each link gets its icon class and display color from configuration.
/// Returns empty markup when no links are configured.
pub fn social_links(links: &[SocialLink]) -> Markup {
    html! {
        @if !links.is_empty() {
            nav class="social-links" {
                @for link in links {
                    a class="social-link"
                        href=(link.url)
                        target="_blank"
                        rel="noopener"
                        style=(format!("color: {}", link.color)) {
                        i class=(format!("fa fa-{}", link.icon)) {}
                    }
                }
            }
        }
    }
}
