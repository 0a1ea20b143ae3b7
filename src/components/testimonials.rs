use web_sys::HtmlElement;
use yew::prelude::*;

// Guest quotes shown on the index page.
const TESTIMONIOS: &[(&str, &str, u8)] = &[
    (
        "María G.",
        "El trato del personal fue inmejorable y las vistas desde la habitación, de postal. Repetiremos seguro.",
        5,
    ),
    (
        "Javier R.",
        "Reservamos para un fin de semana y acabamos quedándonos cuatro noches. El desayuno merece la pena por sí solo.",
        5,
    ),
    (
        "Lucía M.",
        "Ubicación perfecta para recorrer el centro a pie. La habitación era algo pequeña pero muy cuidada.",
        4,
    ),
];

fn star_symbol(filled: bool) -> &'static str {
    if filled {
        "★"
    } else {
        "☆"
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    nombre: &'static str,
    texto: &'static str,
    estrellas: u8,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let card_ref = use_node_ref();

    // Lift on pointer-enter, settle back on pointer-leave. Style only, no
    // state survives the hover.
    let lift = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().set_property("transform", "translateY(-8px)");
            }
        })
    };
    let settle = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().remove_property("transform");
            }
        })
    };

    let grow_star = Callback::from(|e: MouseEvent| {
        if let Some(star) = e.target_dyn_into::<HtmlElement>() {
            let _ = star.style().set_property("transform", "scale(1.3)");
        }
    });
    let shrink_star = Callback::from(|e: MouseEvent| {
        if let Some(star) = e.target_dyn_into::<HtmlElement>() {
            let _ = star.style().remove_property("transform");
        }
    });

    html! {
        <div class="testimonial-card" ref={card_ref} onmouseenter={lift} onmouseleave={settle}>
            <div class="testimonial-rating">
                { for (0..5u8).map(|i| html! {
                    <span
                        class="star"
                        onmouseenter={grow_star.clone()}
                        onmouseleave={shrink_star.clone()}
                    >
                        { star_symbol(i < props.estrellas) }
                    </span>
                }) }
            </div>
            <p class="testimonial-texto">{props.texto}</p>
            <p class="testimonial-autor">{props.nombre}</p>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonios" class="testimonials-section">
            <h2>{"Lo que dicen nuestros huéspedes"}</h2>
            <div class="testimonials-grid">
                { for TESTIMONIOS.iter().map(|&(nombre, texto, estrellas)| html! {
                    <TestimonialCard {nombre} {texto} {estrellas} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_symbols() {
        assert_eq!(star_symbol(true), "★");
        assert_eq!(star_symbol(false), "☆");
    }

    #[test]
    fn testimonial_ratings_fit_the_five_star_row() {
        for (_, _, estrellas) in TESTIMONIOS {
            assert!(*estrellas <= 5);
        }
    }
}
