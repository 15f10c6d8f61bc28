use yew::prelude::*;

use crate::components::contact::ContactCard;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <h1>{"联系我们"}</h1>
            <p>{"欢迎合作与交流，点击复制联系方式。"}</p>
            <div class="contact-list">
                { for config::CONTACTS.iter().map(|target| html! { <ContactCard target={target} /> }) }
            </div>
        </div>
    }
}
