use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use super::dom;
use crate::clipboard::settle_copy;
use crate::error::{describe_js, ClipboardError, DomError, SiteError};
use crate::toast::Notice;

/// `navigator.clipboard.writeText`. Reports `Unavailable` when the API is not
/// exposed, e.g. outside a secure context.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| ClipboardError::Unavailable)?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
}

/// Copies through an off-screen textarea and `execCommand("copy")`.
pub fn copy_via_selection(text: &str) -> Result<(), ClipboardError> {
    match select_and_copy(text) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::CommandFailed),
        Err(e) => {
            log::debug!("Selection copy unavailable: {}", e);
            Err(ClipboardError::CommandFailed)
        }
    }
}

fn select_and_copy(text: &str) -> Result<bool, SiteError> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| DomError::ElementMissing("body".to_string()))?;
    let script = |e: JsValue| DomError::Script(describe_js(&e));

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(script)?
        .dyn_into()
        .map_err(|_| DomError::Script("textarea cast".to_string()))?;
    textarea.set_value(text);
    let style = textarea.style();
    for (name, value) in [("position", "fixed"), ("left", "-999999px"), ("top", "-999999px")] {
        style.set_property(name, value).map_err(script)?;
    }
    body.append_child(&textarea).map_err(script)?;
    if let Err(e) = textarea.focus() {
        log::debug!("Copy textarea could not take focus: {}", describe_js(&e));
    }
    textarea.select();

    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html) => html.exec_command("copy").map_err(script),
        None => Err(DomError::Script("document has no execCommand".to_string())),
    };
    if let Err(e) = body.remove_child(&textarea) {
        log::debug!("Copy textarea left in the document: {}", describe_js(&e));
    }
    Ok(copied?)
}

/// Full copy flow: clipboard API, then selection fallback, then a manual copy
/// message. Resolves to the notice to show.
pub async fn copy_text(text: String, success_message: String) -> Notice {
    let primary = write_text(&text).await;
    settle_copy(primary, copy_via_selection, &text, &success_message)
}
