use yew::prelude::*;

use crate::config::ContactTarget;
use crate::context::use_site;
use crate::web::clipboard::copy_text;

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub target: &'static ContactTarget,
}

#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let site = use_site();
    let target = props.target;

    let onclick = Callback::from(move |_: MouseEvent| {
        let notify = site.notify.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let notice = copy_text(target.value.to_string(), target.copied_message.to_string()).await;
            notify.emit(notice);
        });
    });

    html! {
        <div class="contact-card">
            <span class="contact-label">{ target.label }</span>
            <span class="contact-value">{ target.value }</span>
            <button class="copy-btn" onclick={onclick}>{"复制"}</button>
        </div>
    }
}
