use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{Element, KeyboardEvent};
use log::warn;

use crate::lightbox::{should_close, CloseTrigger, LightboxImage};
use crate::web::dom;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: LightboxImage,
    pub on_close: Callback<()>,
}

/// Image modal. Mounted only while open, so its Escape listener and the
/// scroll lock live exactly as long as the modal does.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let backdrop = use_node_ref();

    use_effect_with_deps(
        move |_| {
            if let Err(e) = dom::set_scroll_locked(true) {
                warn!("Lightbox could not lock scrolling: {}", e);
            }
            || {
                if let Err(e) = dom::set_scroll_locked(false) {
                    warn!("Lightbox could not restore scrolling: {}", e);
                }
            }
        },
        (),
    );

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if should_close(CloseTrigger::Key, Some(e.key().as_str())) {
                on_close.emit(());
            }
        });
    }

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if should_close(CloseTrigger::CloseButton, None) {
                on_close.emit(());
            }
        })
    };

    let backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target_dyn_into::<Element>(), backdrop.cast::<Element>()) {
                (Some(target), Some(modal)) => target == modal,
                _ => false,
            };
            if should_close(CloseTrigger::Click { on_backdrop }, None) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id="imageModal" class="modal" style="display: block;" ref={backdrop} onclick={backdrop_click}>
            <span class="close-modal" onclick={close_button}>{"×"}</span>
            <img class="modal-content" src={props.image.src.clone()} alt={props.image.caption.clone()} />
            <div id="caption">{ props.image.caption.clone() }</div>
        </div>
    }
}
