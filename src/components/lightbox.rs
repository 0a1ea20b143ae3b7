use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

/// At most one image is ever shown; opening while already open just swaps
/// the displayed source.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String },
}

impl LightboxState {
    pub fn opened(src: impl Into<String>) -> Self {
        Self::Open { src: src.into() }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Open { src } => Some(src),
            Self::Closed => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: LightboxState,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // Escape closes the lightbox; the listener only exists while it is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if *is_open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        if document
                            .add_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            cleanup = Some(Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    keydown.as_ref().unchecked_ref(),
                                );
                            }));
                        }
                    }
                }
                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            props.state.is_open(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicking the dimmed background closes, clicking the image does not.
    let overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let is_overlay = e
                .target_dyn_into::<Element>()
                .map(|el| el.id() == "imageModal")
                .unwrap_or(false);
            if is_overlay {
                on_close.emit(());
            }
        })
    };

    let Some(src) = props.state.src().map(str::to_owned) else {
        return html! {};
    };

    html! {
        <div id="imageModal" class="modal-overlay" onclick={overlay_click}>
            <span class="close" onclick={close}>{"×"}</span>
            <img id="modalImage" class="modal-content" {src} alt="Vista ampliada de la galería" />
            <style>
                {r#"
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.85);
    display: flex;
    justify-content: center;
    align-items: center;
    z-index: 100;
}
.modal-content {
    max-width: 90vw;
    max-height: 85vh;
    object-fit: contain;
}
.modal-overlay .close {
    position: absolute;
    top: 1rem;
    right: 1.5rem;
    font-size: 2.5rem;
    color: #fff;
    cursor: pointer;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(LightboxState::default(), LightboxState::Closed);
        assert!(LightboxState::default().src().is_none());
    }

    #[test]
    fn opening_shows_the_given_source() {
        let state = LightboxState::opened("https://example.com/a.jpg");
        assert!(state.is_open());
        assert_eq!(state.src(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn opening_while_open_replaces_the_image() {
        let mut state = LightboxState::opened("a.jpg");
        assert_eq!(state.src(), Some("a.jpg"));
        state = LightboxState::opened("b.jpg");
        assert_eq!(state.src(), Some("b.jpg"));
    }

    #[test]
    fn closing_returns_to_closed() {
        // Close control, overlay click and Escape all funnel into this same
        // transition via the parent's on_close callback.
        let mut state = LightboxState::opened("a.jpg");
        assert!(state.is_open());
        state = LightboxState::Closed;
        assert!(!state.is_open());
        assert_eq!(state.src(), None);
    }
}
