use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fallback_img::FallbackImg;
use crate::hoteles::Hotel;
use crate::Route;

fn stars(estrellas: u8) -> String {
    let filled = usize::from(estrellas.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[derive(Properties, PartialEq)]
pub struct HotelCardProps {
    pub hotel: Hotel,
}

#[function_component(HotelCard)]
pub fn hotel_card(props: &HotelCardProps) -> Html {
    let hotel = &props.hotel;

    html! {
        <div class="hotel-card">
            <FallbackImg
                class="hotel-card-image"
                src={hotel.imagenes.hotel.clone()}
                alt={hotel.nombre.clone()}
            />
            <div class="hotel-card-body">
                <h3>{&hotel.nombre}</h3>
                <p class="hotel-ubicacion">{&hotel.ubicacion}</p>
                <div class="hotel-estrellas">{stars(hotel.estrellas)}</div>
                <p class="hotel-descripcion">{&hotel.descripcion}</p>
                <ul class="hotel-amenities">
                    { for hotel.amenities.iter().map(|a| html! { <li>{a}</li> }) }
                </ul>
                <div class="hotel-card-footer">
                    <span class="hotel-precio">{format!("desde {} €/noche", hotel.precio_noche)}</span>
                    <Link<Route>
                        to={Route::Hotel { id: hotel.id.clone() }}
                        classes="hotel-link"
                    >
                        {"Ver hotel"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_is_always_five_wide() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(7), "★★★★★"); // clamped
    }
}
