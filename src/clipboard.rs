use log::{info, warn};

use crate::error::ClipboardError;
use crate::toast::{Notice, ToastKind};

pub fn manual_copy_message(text: &str) -> String {
    format!("请手动复制：{}", text)
}

/// Decides what the visitor sees after a copy attempt.
///
/// `primary` is the outcome of the clipboard API. Only when it failed is
/// `fallback` run, which stands for the hidden-textarea selection copy.
pub fn settle_copy<F>(
    primary: Result<(), ClipboardError>,
    fallback: F,
    text: &str,
    success_message: &str,
) -> Notice
where
    F: FnOnce(&str) -> Result<(), ClipboardError>,
{
    let primary_error = match primary {
        Ok(()) => return Notice::new(success_message, ToastKind::Success),
        Err(e) => e,
    };
    info!("Clipboard API failed ({}), trying selection copy", primary_error);

    match fallback(text) {
        Ok(()) => Notice::new(success_message, ToastKind::Success),
        Err(e) => {
            warn!("Selection copy failed: {}", e);
            Notice::new(manual_copy_message(text), ToastKind::Info)
        }
    }
}
