use chrono::{Duration, Local, NaiveDate};
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

// Native date inputs speak ISO dates ("2026-08-06") or the empty string.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn min_checkout(checkin: NaiveDate) -> NaiveDate {
    checkin + Duration::days(1)
}

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

/// Decides what the checkout field should hold once its minimum moves to
/// `min`. `None` means the current value is still valid and stays untouched;
/// an empty (or unparseable) value counts as violating the minimum and gets
/// filled in, matching the original site's behavior.
fn corrected_checkout(current: &str, min: NaiveDate) -> Option<NaiveDate> {
    match parse_input_date(current) {
        Some(date) if date >= min => None,
        _ => Some(min),
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    #[prop_or_default]
    pub hotel_nombre: Option<String>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let checkin_ref = use_node_ref();
    let checkout_ref = use_node_ref();

    // Neither field may start before today.
    {
        let checkin_ref = checkin_ref.clone();
        let checkout_ref = checkout_ref.clone();
        use_effect_with_deps(
            move |_| {
                let min = today().format(INPUT_DATE_FORMAT).to_string();
                if let Some(input) = checkin_ref.cast::<HtmlInputElement>() {
                    let _ = input.set_attribute("min", &min);
                }
                if let Some(input) = checkout_ref.cast::<HtmlInputElement>() {
                    let _ = input.set_attribute("min", &min);
                }
                || ()
            },
            (),
        );
    }

    let on_checkin_change = {
        let checkout_ref = checkout_ref.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(checkin) = parse_input_date(&input.value()) else {
                return;
            };
            let min = min_checkout(checkin);
            let min_value = min.format(INPUT_DATE_FORMAT).to_string();

            if let Some(checkout) = checkout_ref.cast::<HtmlInputElement>() {
                let _ = checkout.set_attribute("min", &min_value);
                if corrected_checkout(&checkout.value(), min).is_some() {
                    checkout.set_value(&min_value);
                }
            }
        })
    };

    let onsubmit = {
        let hotel = props.hotel_nombre.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match &hotel {
                Some(nombre) => info!("Solicitud de reserva para {}", nombre),
                None => info!("Solicitud de reserva general"),
            }
        })
    };

    html! {
        <form class="booking-form" {onsubmit}>
            <div class="form-group">
                <label for="checkin">{"Entrada"}</label>
                <input
                    type="date"
                    id="checkin"
                    name="checkin"
                    required=true
                    ref={checkin_ref}
                    onchange={on_checkin_change}
                />
            </div>
            <div class="form-group">
                <label for="checkout">{"Salida"}</label>
                <input
                    type="date"
                    id="checkout"
                    name="checkout"
                    required=true
                    ref={checkout_ref}
                />
            </div>
            <div class="form-group">
                <label for="huespedes">{"Huéspedes"}</label>
                <select id="huespedes" name="huespedes">
                    <option value="1">{"1 huésped"}</option>
                    <option value="2" selected=true>{"2 huéspedes"}</option>
                    <option value="3">{"3 huéspedes"}</option>
                    <option value="4">{"4 o más"}</option>
                </select>
            </div>
            <button type="submit" class="booking-submit">{"Comprobar disponibilidad"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn min_checkout_is_next_day() {
        assert_eq!(min_checkout(d(2026, 8, 6)), d(2026, 8, 7));
    }

    #[test]
    fn min_checkout_rolls_over_month_and_year() {
        assert_eq!(min_checkout(d(2026, 8, 31)), d(2026, 9, 1));
        assert_eq!(min_checkout(d(2026, 12, 31)), d(2027, 1, 1));
        assert_eq!(min_checkout(d(2028, 2, 28)), d(2028, 2, 29)); // leap year
    }

    #[test]
    fn too_early_checkout_is_reset_to_exactly_the_minimum() {
        let min = d(2026, 8, 7);
        assert_eq!(corrected_checkout("2026-08-06", min), Some(min));
        assert_eq!(corrected_checkout("2025-01-01", min), Some(min));
    }

    #[test]
    fn valid_checkout_is_left_alone() {
        let min = d(2026, 8, 7);
        assert_eq!(corrected_checkout("2026-08-07", min), None);
        assert_eq!(corrected_checkout("2026-09-01", min), None);
    }

    #[test]
    fn empty_checkout_is_filled_with_the_minimum() {
        let min = d(2026, 8, 7);
        assert_eq!(corrected_checkout("", min), Some(min));
        assert_eq!(corrected_checkout("   ", min), Some(min));
    }

    #[test]
    fn unparseable_input_is_ignored() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("mañana"), None);
        assert_eq!(parse_input_date("2026-08-06"), Some(d(2026, 8, 6)));
    }
}
