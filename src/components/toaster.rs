use yew::prelude::*;

use crate::toast::{Toast, ToastId};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<ToastId>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toast-stack" style="position: fixed; top: 20px; right: 20px; z-index: 4000; display: flex; flex-direction: column; gap: 10px;">
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOut {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                "#}
            </style>
            {
                props.toasts.iter().map(|toast| {
                    let animation = if toast.leaving { "slideOut" } else { "slideIn" };
                    let style = format!(
                        "background: {}; color: white; padding: 1rem 1.5rem; border-radius: 8px; \
                         font-size: 1rem; box-shadow: 0 4px 12px rgba(0,0,0,0.2); \
                         animation: {} 0.3s ease forwards; max-width: 300px; word-wrap: break-word; cursor: pointer;",
                        toast.kind.background(),
                        animation,
                    );
                    let dismiss = {
                        let on_dismiss = props.on_dismiss.clone();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                    };
                    html! {
                        <div key={toast.id.to_string()} class="toast" style={style} onclick={dismiss}>
                            { toast.message.clone() }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
