use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const VISIBILITY_THRESHOLD_PX: f64 = 300.0;

// Strictly greater: at exactly 300px the button stays hidden.
fn visible_at(scroll_offset: f64) -> bool {
    scroll_offset > VISIBILITY_THRESHOLD_PX
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if let Some(window) = web_sys::window() {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = window_clone.scroll_y().unwrap_or(0.0);
                        visible.set(visible_at(offset));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        cleanup = Some(Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        }));
                    }
                }
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = web_sys::ScrollToOptions::new();
            options.top(0.0).behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <button
                class={classes!("scroll-top-button", (*visible).then(|| "visible"))}
                {onclick}
                aria-label="Volver arriba"
            >
                {"↑"}
            </button>
            <style>
                {r#"
.scroll-top-button {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    width: 48px;
    height: 48px;
    border-radius: 50%;
    cursor: pointer;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
    z-index: 50;
}
.scroll-top-button.visible {
    opacity: 1;
    pointer-events: auto;
}
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_near_the_top() {
        assert!(!visible_at(0.0));
        assert!(!visible_at(299.9));
    }

    #[test]
    fn exactly_at_the_threshold_stays_hidden() {
        assert!(!visible_at(300.0));
    }

    #[test]
    fn visible_past_the_threshold() {
        assert!(visible_at(300.1));
        assert!(visible_at(2000.0));
    }
}
