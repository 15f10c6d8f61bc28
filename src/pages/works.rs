use yew::prelude::*;

use crate::config;
use crate::context::use_site;
use crate::lightbox::LightboxImage;

#[function_component(Works)]
pub fn works() -> Html {
    let site = use_site();

    html! {
        <div class="page works-page">
            <h1>{"作品展示"}</h1>
            <div class="works-grid">
                {
                    config::SLIDES.iter().chain(config::AWARD_CERTIFICATES.iter()).map(|picture| {
                        let onclick = {
                            let open_image = site.open_image.clone();
                            Callback::from(move |_: MouseEvent| {
                                open_image.emit(LightboxImage::from_image(picture.src, picture.alt))
                            })
                        };
                        html! {
                            <figure class="work-item">
                                <img class="award-certificate" src={picture.src} alt={picture.alt} onclick={onclick} />
                                <figcaption>{ picture.alt }</figcaption>
                            </figure>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
