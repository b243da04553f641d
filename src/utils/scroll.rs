//! Smooth scrolling for in-page anchors. The nav, footer, and CTA buttons all
//! point at section ids on the same page, so default anchor jumps are
//! intercepted and replaced with a smooth scroll.

use gloo_console::warn;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Scrolls the section named by `href` (with or without the leading `#`)
/// into view. A missing target is logged and otherwise ignored.
pub fn scroll_to(href: &str) {
    let id = href.trim_start_matches('#');
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        match document.get_element_by_id(id) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => warn!("no scroll target for anchor:", id),
        }
    }
}

/// Click handler that cancels the default anchor jump and smooth-scrolls to
/// `href` instead.
pub fn anchor_callback(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(href);
    })
}
