use std::rc::Rc;

use log::warn;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::carousel::Carousel;
use crate::components::landing::{GateView, Landing};
use crate::config::{self, Picture};
use crate::context::use_site;
use crate::lightbox::LightboxImage;
use crate::session::carousel::{CarouselEngine, CarouselState, SlideView};
use crate::session::controller::PresentationSession;
use crate::session::gate::GateIntent;
use crate::web::dom;
use crate::web::storage::BrowserSessionStorage;
use crate::web::timers::BrowserScheduler;

type Session = PresentationSession<BrowserScheduler, BrowserSessionStorage>;

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_site();
    let gate_view = use_reducer(GateView::default);
    let slide_view = use_state(|| CarouselState::new(config::SLIDES.len()).view());
    let session = use_mut_ref(|| None::<Rc<Session>>);

    {
        let session = session.clone();
        let gate_view = gate_view.clone();
        let slide_view = slide_view.clone();
        use_effect_with_deps(
            move |_| {
                let gate_intents = Callback::from(move |intent: GateIntent| {
                    let locked = match intent {
                        GateIntent::Conceal => Some(true),
                        GateIntent::Reveal => Some(false),
                        _ => None,
                    };
                    if let Some(locked) = locked {
                        if let Err(e) = dom::set_scroll_locked(locked) {
                            warn!("Landing gate could not toggle scrolling: {}", e);
                        }
                    }
                    gate_view.dispatch(intent);
                });
                let slide_render = Callback::from(move |view: SlideView| slide_view.set(view));

                let started = PresentationSession::start(
                    BrowserScheduler,
                    BrowserSessionStorage::open(),
                    config::SLIDES.len(),
                    gate_intents,
                    slide_render,
                );
                *session.borrow_mut() = Some(Rc::new(started));

                // Dropping the session cancels every timer it owns.
                move || {
                    session.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let session = session.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(session) = session.borrow().as_ref() {
                session.handle_key(&e.key());
            }
        });
    }

    // Every carousel control goes through the live engine, if any.
    let with_carousel = {
        let session = session.clone();
        move |action: fn(&CarouselEngine<BrowserScheduler>)| {
            let session = session.clone();
            Callback::from(move |_: ()| {
                if let Some(session) = session.borrow().as_ref() {
                    action(session.carousel());
                }
            })
        }
    };
    let on_prev = with_carousel(|c| c.prev());
    let on_next = with_carousel(|c| c.next());
    let on_pause = with_carousel(|c| c.pause());
    let on_resume = with_carousel(|c| c.resume());
    let on_select = {
        let session = session.clone();
        Callback::from(move |index: usize| {
            if let Some(session) = session.borrow().as_ref() {
                session.carousel().go_to(index as i64);
            }
        })
    };
    let on_enter = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            if let Some(session) = session.borrow().as_ref() {
                session.gate().dismiss();
            }
        })
    };

    let content_style = if gate_view.content_visible { "display: flex;" } else { "display: none;" };

    html! {
        <>
            <Landing view={(*gate_view).clone()} on_enter={on_enter} />
            <div id="main-content-wrapper" style={content_style}>
                <section class="hero">
                    <Carousel
                        slides={config::SLIDES}
                        view={*slide_view}
                        on_prev={on_prev}
                        on_next={on_next}
                        on_select={on_select}
                        on_pause={on_pause}
                        on_resume={on_resume}
                        on_image={site.open_image.clone()}
                    />
                    <AnchorLink href="#awards" class={classes!("hero-cta")}>{"查看荣誉"}</AnchorLink>
                </section>

                <section id="awards" class="awards">
                    <h2>{"荣誉奖项"}</h2>
                    <div class="awards-grid">
                        { for config::AWARD_CERTIFICATES.iter().map(|award| certificate(award, &site.open_image)) }
                    </div>
                </section>
            </div>
        </>
    }
}

fn certificate(award: &'static Picture, open_image: &Callback<LightboxImage>) -> Html {
    let onclick = {
        let open_image = open_image.clone();
        Callback::from(move |_: MouseEvent| open_image.emit(LightboxImage::from_image(award.src, award.alt)))
    };
    html! {
        <figure class="award-item">
            <img class="award-certificate" src={award.src} alt={award.alt} onclick={onclick} />
            <figcaption>{ award.alt }</figcaption>
        </figure>
    }
}
