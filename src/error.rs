use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage access failed: {0}")]
    Access(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is unavailable")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("copy command failed")]
    CommandFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element `{0}` is missing")]
    ElementMissing(String),
    #[error("script error: {0}")]
    Script(String),
}

/// Any non-fatal failure raised by the site's features.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Renders a thrown JS value for logs and error variants.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
