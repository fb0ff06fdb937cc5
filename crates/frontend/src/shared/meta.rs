//! Per-page document metadata.

use leptos::prelude::Effect;
use web_sys::window;

/// Set the document title and meta description for the current page.
/// Runs as an effect so it applies after the page mounts.
pub fn use_page_meta(title: &'static str, description: &'static str) {
    Effect::new(move |_| {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        document.set_title(title);
        if let Ok(Some(meta)) = document.query_selector("meta[name='description']") {
            let _ = meta.set_attribute("content", description);
        }
    });
}
