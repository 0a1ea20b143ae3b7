use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::fallback_img::FallbackImg;
use crate::components::gallery::Gallery;
use crate::components::lightbox::{Lightbox, LightboxState};
use crate::components::reveal;
use crate::hoteles;
use crate::Route;

// Same demo text the original site shows; there is no real video.
const TRAILER_ALERT: &str = "¡Bienvenido al tráiler! En una implementación real, \
aquí se reproduciría un video sobre la experiencia en el hotel.";

#[derive(Properties, PartialEq)]
pub struct HotelDetailProps {
    pub id: String,
}

#[function_component(HotelDetail)]
pub fn hotel_detail(props: &HotelDetailProps) -> Html {
    let lightbox = use_state(LightboxState::default);

    // Jumping between hotels keeps the component mounted, so both effects
    // re-run per id.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id.clone(),
    );
    use_effect_with_deps(|_| reveal::observe_page(), props.id.clone());

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |src: String| lightbox.set(LightboxState::opened(src)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(LightboxState::Closed))
    };

    let play_trailer = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(TRAILER_ALERT);
        }
    });

    let Some(hotel) = hoteles::find(&props.id) else {
        // Flask's hotel_detalle answered unknown ids with this exact text.
        return html! {
            <div class="not-found">
                <h1>{"Hotel no encontrado"}</h1>
                <Link<Route> to={Route::Home} classes="back-home-link">
                    {"Volver al inicio"}
                </Link<Route>>
            </div>
        };
    };

    html! {
        <div class="hotel-page">
            <header class="hotel-hero">
                <FallbackImg
                    class="hotel-hero-image"
                    src={hotel.imagenes.hotel.clone()}
                    alt={hotel.nombre.clone()}
                />
                <div class="hotel-hero-text">
                    <h1>{&hotel.nombre}</h1>
                    <p class="hotel-ubicacion">{&hotel.ubicacion}</p>
                    <p class="hotel-precio">{format!("desde {} €/noche", hotel.precio_noche)}</p>
                </div>
            </header>

            <section class="hotel-descripcion-section">
                <p>{&hotel.descripcion}</p>
            </section>

            <section class="hotel-servicios">
                <h2>{"Servicios"}</h2>
                <div class="services-grid">
                    { for hotel.amenities.iter().map(|amenity| html! {
                        <div class="service-item">{amenity}</div>
                    }) }
                </div>
            </section>

            <section class="hotel-trailer">
                <h2>{"Descubre la experiencia"}</h2>
                <div class="trailer-frame">
                    <button class="play-button" onclick={play_trailer} aria-label="Reproducir tráiler">
                        {"▶"}
                    </button>
                </div>
            </section>

            <section class="hotel-galeria">
                <h2>{"Galería"}</h2>
                <Gallery
                    hotel_nombre={hotel.nombre.clone()}
                    imagenes={hotel.imagenes.galeria.clone()}
                    on_open={open_lightbox}
                />
            </section>

            <section class="hotel-reserva" id="reservar">
                <h2>{format!("Reserva en {}", hotel.nombre)}</h2>
                <BookingForm hotel_nombre={hotel.nombre.clone()} />
            </section>

            <Lightbox state={(*lightbox).clone()} on_close={close_lightbox} />

            <style>
                {r#"
.hotel-hero {
    position: relative;
}
.hotel-hero-image {
    width: 100%;
    max-height: 60vh;
    object-fit: cover;
}
.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1rem;
    padding: 1rem 2rem;
}
.gallery-item {
    cursor: pointer;
}
.gallery-item img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.gallery-item,
.service-item {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.gallery-item.animate,
.service-item.animate {
    opacity: 1;
    transform: translateY(0);
}
.trailer-frame {
    display: flex;
    justify-content: center;
    padding: 2rem;
}
.play-button {
    width: 72px;
    height: 72px;
    border-radius: 50%;
    font-size: 1.5rem;
    cursor: pointer;
}
                "#}
            </style>
        </div>
    }
}
