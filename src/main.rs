use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod hoteles;
mod pages {
    pub mod home;
    pub mod hotel;
}

mod components {
    pub mod booking_form;
    pub mod fallback_img;
    pub mod gallery;
    pub mod hotel_card;
    pub mod lightbox;
    pub mod reveal;
    pub mod scroll_top;
    pub mod testimonials;
}

use pages::home::Home;
use pages::hotel::HotelDetail;
use components::scroll_top::ScrollTopButton;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hotel/:id")]
    Hotel { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Smooth-scrolls the viewport to the first element matching `target`
/// (a selector like `"#hoteles"`). Missing targets are ignored so the nav
/// links can be rendered on pages that don't contain the section.
pub fn scroll_to_section(target: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.query_selector(target).ok().flatten() {
            let mut options = web_sys::ScrollIntoViewOptions::new();
            options
                .behavior(web_sys::ScrollBehavior::Smooth)
                .block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Hotel { id } => {
            info!("Rendering hotel page for {}", id);
            html! { <HotelDetail {id} /> }
        },
        Route::NotFound => {
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"La página que buscas no existe."}</p>
                    <Link<Route> to={Route::Home} classes="back-home-link">
                        {"Volver al inicio"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Close the mobile menu before jumping so the overlay doesn't cover
    // the section we just scrolled to.
    let nav_link = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(target);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Hoteles Costa"}
                </Link<Route>>

                <button
                    class={classes!("mobile-menu-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("main-nav", (*menu_open).then(|| "active"))}>
                    <a href="#hoteles" class="nav-link" onclick={nav_link("#hoteles")}>
                        {"Hoteles"}
                    </a>
                    <a href="#servicios" class="nav-link" onclick={nav_link("#servicios")}>
                        {"Servicios"}
                    </a>
                    <a href="#testimonios" class="nav-link" onclick={nav_link("#testimonios")}>
                        {"Opiniones"}
                    </a>
                    <a href="#reservar" class="nav-link" onclick={nav_link("#reservar")}>
                        {"Reservar"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <ScrollTopButton />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
