use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Terminal class applied the first time an element scrolls into view. Its
/// presence doubles as the per-element "has been animated" flag.
pub const REVEALED_CLASS: &str = "animate";

const REVEAL_THRESHOLD: f64 = 0.1;

// Canonical selector set; the divergent .testimonial-item / .gallery-image
// variants are gone.
const REVEAL_SELECTORS: &str =
    ".hotel-card, .testimonial-card, .gallery-item, .feature-item, .service-item";

fn should_reveal(is_intersecting: bool, already_revealed: bool) -> bool {
    is_intersecting && !already_revealed
}

/// Owns the IntersectionObserver and the callback keeping it alive.
/// Dropping it disconnects the observer, so a page effect can hand it back
/// as its cleanup value.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(document: &Document) -> Option<Self> {
        let on_intersect = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let already = target.class_list().contains(REVEALED_CLASS);
                    if should_reveal(entry.is_intersecting(), already) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        // One-shot: once revealed the element is never watched
                        // again.
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options
            .root(None)
            .root_margin("0px")
            .threshold(&JsValue::from(REVEAL_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        let targets = document.query_selector_all(REVEAL_SELECTORS).ok()?;
        for i in 0..targets.length() {
            if let Some(node) = targets.item(i) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    observer.observe(element);
                }
            }
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Mount-effect body for pages with reveal targets:
/// `use_effect_with_deps(|_| reveal::observe_page(), ())`.
pub fn observe_page() -> impl FnOnce() {
    let observer = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| RevealObserver::attach(&d));
    move || drop(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        assert!(should_reveal(true, false));
        // Repeated intersection events after the class is set are ignored.
        assert!(!should_reveal(true, true));
    }

    #[test]
    fn never_reveals_outside_the_viewport() {
        assert!(!should_reveal(false, false));
        assert!(!should_reveal(false, true));
    }
}
