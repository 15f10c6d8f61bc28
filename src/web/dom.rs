use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::error::{describe_js, DomError};

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DomError::ElementMissing("document".to_string()))
}

fn body() -> Result<HtmlElement, DomError> {
    document()?
        .body()
        .ok_or_else(|| DomError::ElementMissing("body".to_string()))
}

/// Locks or restores page scrolling through the body's `overflow`.
pub fn set_scroll_locked(locked: bool) -> Result<(), DomError> {
    let overflow = if locked { "hidden" } else { "auto" };
    body()?
        .style()
        .set_property("overflow", overflow)
        .map_err(|e| DomError::Script(describe_js(&e)))
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let window = web_sys::window().ok_or_else(|| DomError::ElementMissing("window".to_string()))?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smoothly brings the element with the given id to the top of the viewport.
pub fn scroll_to_anchor(id: &str) -> Result<(), DomError> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementMissing(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
