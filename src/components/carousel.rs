use yew::prelude::*;

use crate::config::Picture;
use crate::lightbox::LightboxImage;
use crate::session::carousel::SlideView;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: &'static [Picture],
    pub view: SlideView,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_select: Callback<usize>,
    /// Pointer or focus entered the carousel.
    pub on_pause: Callback<()>,
    pub on_resume: Callback<()>,
    pub on_image: Callback<LightboxImage>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slides: &'static [Picture] = props.slides;
    let CarouselProps {
        view,
        on_prev,
        on_next,
        on_select,
        on_pause,
        on_resume,
        on_image,
        ..
    } = props;

    let pause = {
        let on_pause = on_pause.clone();
        move || on_pause.emit(())
    };
    let resume = {
        let on_resume = on_resume.clone();
        move || on_resume.emit(())
    };
    let onmouseenter = {
        let pause = pause.clone();
        Callback::from(move |_: MouseEvent| pause())
    };
    let onmouseleave = {
        let resume = resume.clone();
        Callback::from(move |_: MouseEvent| resume())
    };
    let onfocusin = Callback::from(move |_: FocusEvent| pause());
    let onfocusout = Callback::from(move |_: FocusEvent| resume());

    let prev_click = {
        let on_prev = on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let next_click = {
        let on_next = on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="carousel-container" onmouseenter={onmouseenter} onmouseleave={onmouseleave} onfocusin={onfocusin} onfocusout={onfocusout}>
            <div class="carousel-slides" style={format!("transform: {};", view.transform())}>
                {
                    slides.iter().map(|slide| {
                        let open = {
                            let on_image = on_image.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_image.emit(LightboxImage::from_image(slide.src, slide.alt))
                            })
                        };
                        html! {
                            <div class="carousel-slide">
                                <img src={slide.src} alt={slide.alt} onclick={open} />
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button class="carousel-btn prev-btn" onclick={prev_click}>{"‹"}</button>
            <button class="carousel-btn next-btn" onclick={next_click}>{"›"}</button>
            <div class="carousel-dots">
                {
                    (0..view.total).map(|i| {
                        let select = {
                            let on_select = on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(i))
                        };
                        html! {
                            <span class={classes!("dot", view.is_active(i).then(|| "active"))} onclick={select}></span>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
