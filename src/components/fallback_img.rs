use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config;

// The placeholder itself failing must not retrigger the swap.
fn needs_fallback(current_src: &str) -> bool {
    current_src != config::FALLBACK_IMAGE_URL
}

#[derive(Properties, PartialEq)]
pub struct FallbackImgProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps in the fixed placeholder when the real asset fails
/// to load.
#[function_component(FallbackImg)]
pub fn fallback_img(props: &FallbackImgProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if needs_fallback(&img.src()) {
            img.set_src(config::FALLBACK_IMAGE_URL);
            img.set_alt(config::FALLBACK_IMAGE_ALT);
        }
    });

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_images_get_the_placeholder() {
        assert!(needs_fallback("https://images.example.com/rota.jpg"));
        assert!(needs_fallback(""));
    }

    #[test]
    fn a_failing_placeholder_does_not_loop() {
        assert!(!needs_fallback(config::FALLBACK_IMAGE_URL));
    }
}
