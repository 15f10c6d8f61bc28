use yew::prelude::*;

use crate::nav::anchor_target;
use crate::web::dom;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = anchor_target(&href) else {
                return;
            };
            e.prevent_default();
            if let Err(e) = dom::scroll_to_anchor(id) {
                log::debug!("Anchor not scrolled: {}", e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
