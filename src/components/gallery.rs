use yew::prelude::*;

use crate::components::fallback_img::FallbackImg;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub hotel_nombre: String,
    pub imagenes: Vec<String>,
    /// "Open the lightbox with this image URL" — the one operation the page
    /// behavior set exposes to markup.
    pub on_open: Callback<String>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <div class="gallery-grid">
            { for props.imagenes.iter().enumerate().map(|(i, src)| {
                let onclick = {
                    let on_open = props.on_open.clone();
                    let src = src.clone();
                    Callback::from(move |_: MouseEvent| on_open.emit(src.clone()))
                };
                html! {
                    <div class="gallery-item" key={src.clone()} {onclick}>
                        <FallbackImg
                            src={src.clone()}
                            alt={format!("Galería de {}, foto {}", props.hotel_nombre, i + 1)}
                        />
                    </div>
                }
            }) }
        </div>
    }
}
