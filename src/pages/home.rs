use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::hotel_card::HotelCard;
use crate::components::reveal;
use crate::components::testimonials::Testimonials;
use crate::hoteles;
use crate::scroll_to_section;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🏖️",
        "Destinos con encanto",
        "Costa, montaña y centros históricos: hoteles escogidos uno a uno.",
    ),
    (
        "💶",
        "Mejor precio garantizado",
        "Si encuentras tu habitación más barata, igualamos la tarifa.",
    ),
    (
        "🕐",
        "Cancelación flexible",
        "Cancela sin coste hasta 48 horas antes de tu llegada.",
    ),
];

const SERVICIOS: &[(&str, &str)] = &[
    ("🍽️", "Restaurante y desayuno buffet"),
    ("💆", "Spa y masajes"),
    ("🏊", "Piscinas exteriores"),
    ("🚗", "Parking privado"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Cards and sections fade in the first time they scroll into view.
    use_effect_with_deps(|_| reveal::observe_page(), ());

    let goto_hoteles = Callback::from(|_: MouseEvent| scroll_to_section("#hoteles"));

    html! {
        <div class="home-page">
            <header class="hero" id="inicio">
                <h1>{"Encuentra tu próxima escapada"}</h1>
                <p class="hero-subtitle">
                    {"Hoteles con carácter en la costa, la sierra y el corazón de la ciudad."}
                </p>
                <button class="cta-button" onclick={goto_hoteles}>
                    {"Ver hoteles"}
                </button>
            </header>

            <section id="reservar" class="booking-section">
                <h2>{"Reserva tu estancia"}</h2>
                <BookingForm />
            </section>

            <section id="hoteles" class="hotels-section">
                <h2>{"Nuestros hoteles"}</h2>
                <div class="hotels-grid">
                    { for hoteles::catalog().iter().map(|hotel| html! {
                        <HotelCard key={hotel.id.clone()} hotel={hotel.clone()} />
                    }) }
                </div>
            </section>

            <section id="servicios" class="features-section">
                <h2>{"Por qué reservar con nosotros"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|&(icono, titulo, texto)| html! {
                        <div class="feature-item">
                            <span class="feature-icon">{icono}</span>
                            <h3>{titulo}</h3>
                            <p>{texto}</p>
                        </div>
                    }) }
                </div>
                <div class="services-grid">
                    { for SERVICIOS.iter().map(|&(icono, nombre)| html! {
                        <div class="service-item">
                            <span class="service-icon">{icono}</span>
                            <span>{nombre}</span>
                        </div>
                    }) }
                </div>
            </section>

            <Testimonials />

            <footer class="site-footer">
                <p>{"© 2026 Hoteles Costa. Todos los derechos reservados."}</p>
            </footer>

            <style>
                {r#"
.hero {
    min-height: 70vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 2rem;
}
.hotels-grid,
.features-grid,
.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
    padding: 2rem;
}
.services-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    padding: 0 2rem 2rem;
}
.hotel-card,
.testimonial-card,
.gallery-item,
.feature-item,
.service-item {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.hotel-card.animate,
.testimonial-card.animate,
.gallery-item.animate,
.feature-item.animate,
.service-item.animate {
    opacity: 1;
    transform: translateY(0);
}
.testimonial-card {
    transition: opacity 0.6s ease, transform 0.25s ease;
}
.star {
    display: inline-block;
    transition: transform 0.15s ease;
}
                "#}
            </style>
        </div>
    }
}
