use crate::config;

pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TO_TOP_THRESHOLD_PX
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= config::MOBILE_BREAKPOINT_PX
}
