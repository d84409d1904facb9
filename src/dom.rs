use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scrolls an element into view at the given block position.
pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls the first element matching `selector` to the top of
/// the viewport. Missing targets are ignored.
pub fn scroll_to_selector(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Ok(Some(target)) = document.query_selector(selector) {
            scroll_into_view(&target, ScrollLogicalPosition::Start);
        }
    }
}
