use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub caption: String,
}

impl LightboxImage {
    /// Builds the modal content from a clicked image; images without alt text
    /// get a generic caption.
    pub fn from_image(src: &str, alt: &str) -> Self {
        let caption = if alt.trim().is_empty() {
            config::DEFAULT_IMAGE_CAPTION
        } else {
            alt
        };
        Self {
            src: src.to_string(),
            caption: caption.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// A click somewhere in the modal; `on_backdrop` is true when the click
    /// target is the backdrop itself rather than the image or caption.
    Click { on_backdrop: bool },
    Key,
}

pub fn should_close(trigger: CloseTrigger, key: Option<&str>) -> bool {
    match trigger {
        CloseTrigger::CloseButton => true,
        CloseTrigger::Click { on_backdrop } => on_backdrop,
        CloseTrigger::Key => key == Some("Escape"),
    }
}
