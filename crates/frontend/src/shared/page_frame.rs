//! PageFrame — standard root wrapper for a page.
//!
//! Puts `id` and `data-page-category` on the root DOM element so a page can be
//! found from the browser inspector.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on a page.
///
/// `custom` pages get the `page page--custom` class, everything else `page`.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    if !is_valid_page_id(&page_id) {
        log::warn!("page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
