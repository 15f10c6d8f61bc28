use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use yew_router::hooks::use_location;
use log::{debug, error, info};
use web_sys::{ErrorEvent, Event, MouseEvent};

use hummingbird_frontend::components::lightbox::Lightbox;
use hummingbird_frontend::components::scroll_to_top::ScrollToTop;
use hummingbird_frontend::components::toaster::Toaster;
use hummingbird_frontend::config;
use hummingbird_frontend::context::SiteContext;
use hummingbird_frontend::error::{DomError, SiteError};
use hummingbird_frontend::lightbox::LightboxImage;
use hummingbird_frontend::nav;
use hummingbird_frontend::pages::{about::About, contact::Contact, home::Home, works::Works};
use hummingbird_frontend::scroll;
use hummingbird_frontend::timer::Debouncer;
use hummingbird_frontend::toast::{Notice, Toast, ToastId, Toasts};
use hummingbird_frontend::web::dom;
use hummingbird_frontend::web::timers::BrowserScheduler;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/about.html")]
    About,
    #[at("/works.html")]
    Works,
    #[at("/contact.html")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Works => {
            info!("Rendering Works page");
            html! { <Works /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let location = use_location();
    let current = nav::resolve_page(location.map(|l| l.path().to_string()), dom::pathname);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header>
            <nav class="top-nav">
                <a href="/" class="nav-logo">{"蜂鸟创新工作室"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    {
                        config::NAV_LINKS.iter().map(|link| {
                            let active = nav::is_active(link.href, &current);
                            html! {
                                <li>
                                    <a href={format!("/{}", link.href)} class={classes!("nav-link", active.then(|| "active"))}>
                                        { link.label }
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let lightbox = use_state(|| None::<LightboxImage>);

    let toast_stack = {
        let toasts = toasts.clone();
        use_memo(
            move |_| Toasts::new(BrowserScheduler, Callback::from(move |list: Vec<Toast>| toasts.set(list))),
            (),
        )
    };
    let resize = use_memo(|_| Debouncer::new(BrowserScheduler, config::RESIZE_DEBOUNCE_MS), ());

    {
        let resize = resize.clone();
        use_effect_with_deps(move |_| move || resize.cancel(), ());
    }

    use_event_with_window("resize", move |_: Event| {
        resize.call(Box::new(|| {
            if let Some(width) = dom::viewport_width() {
                debug!("Viewport resized to {}px, mobile layout: {}", width, scroll::is_mobile(width));
            }
        }));
    });

    use_event_with_window("error", |e: ErrorEvent| {
        let err = SiteError::from(DomError::Script(e.message()));
        error!("Uncaught error: {}", err);
    });

    use_event_with_window("visibilitychange", |_: Event| {
        let hidden = dom::document().map(|d| d.hidden()).unwrap_or(false);
        debug!("Page visibility changed, hidden: {}", hidden);
    });

    let context = {
        let notify = {
            let toast_stack = toast_stack.clone();
            Callback::from(move |notice: Notice| {
                toast_stack.show(notice);
            })
        };
        let open_image = {
            let lightbox = lightbox.clone();
            Callback::from(move |image: LightboxImage| lightbox.set(Some(image)))
        };
        SiteContext { notify, open_image }
    };

    let dismiss_toast = {
        let toast_stack = toast_stack.clone();
        Callback::from(move |id: ToastId| toast_stack.dismiss(id))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| lightbox.set(None))
    };

    html! {
        <ContextProvider<SiteContext> context={context}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ScrollToTop />
            <Toaster toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            {
                if let Some(image) = (*lightbox).clone() {
                    html! { <Lightbox image={image} on_close={close_lightbox} /> }
                } else {
                    html! {}
                }
            }
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
