//! Links leaving the widget.

/// Open `url` in a new browsing context. Fire-and-forget.
pub fn open_in_new_tab(url: &str) {
    if let Err(e) = gloo_utils::window().open_with_url_and_target(url, "_blank") {
        log::warn!("Could not open {}: {:?}", url, e);
    }
}
