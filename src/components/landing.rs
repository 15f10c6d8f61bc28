use std::rc::Rc;

use yew::prelude::*;

use crate::session::gate::GateIntent;

/// What the gate and the content wrapper look like right now.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GateView {
    pub gate_visible: bool,
    pub fading: bool,
    pub hint_visible: bool,
    pub content_visible: bool,
}

impl Reducible for GateView {
    type Action = GateIntent;

    fn reduce(self: Rc<Self>, action: GateIntent) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GateIntent::Conceal => {
                next.gate_visible = true;
                next.content_visible = false;
            }
            GateIntent::FadeOut => next.fading = true,
            GateIntent::Reveal => {
                next.gate_visible = false;
                next.content_visible = true;
            }
            GateIntent::ShowHint => next.hint_visible = true,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub view: GateView,
    pub on_enter: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    if !props.view.gate_visible {
        return html! {};
    }

    let onclick = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| on_enter.emit(()))
    };
    let prompt_style = if props.view.hint_visible { "opacity: 1;" } else { "opacity: 0;" };

    html! {
        <div id="landing-page" class={classes!("landing-page", props.view.fading.then(|| "hidden"))} onclick={onclick}>
            <div class="landing-content">
                <img class="landing-logo" src="/assets/logo.png" alt="蜂鸟创新工作室" />
                <h1>{"蜂鸟创新工作室"}</h1>
                <p class="landing-tagline">{"小而敏捷，持续创新"}</p>
            </div>
            <p class="enter-prompt" style={prompt_style}>{"点击任意处进入"}</p>
        </div>
    }
}
