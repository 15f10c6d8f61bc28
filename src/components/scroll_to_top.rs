use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll::scroll_to_top_visible;
use crate::web::dom;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_to_top() {
            log::warn!("Scroll to top failed: {}", e);
        }
    });
    let display = if scroll_to_top_visible(scroll_y) { "block" } else { "none" };

    html! {
        <button
            id="scrollToTop"
            onclick={onclick}
            style={format!(
                "position: fixed; bottom: 30px; right: 30px; background: #0d6efd; color: white; \
                 border: none; border-radius: 50%; width: 50px; height: 50px; font-size: 20px; \
                 cursor: pointer; display: {}; z-index: 1000; transition: all 0.3s ease;",
                display
            )}
        >
            {"↑"}
        </button>
    }
}
