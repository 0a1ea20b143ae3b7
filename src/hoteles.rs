use serde::Deserialize;
use std::sync::OnceLock;

// Same data the Flask site served from data/hoteles.json, embedded so the
// frontend needs no backend or fetch.
const HOTELES_JSON: &str = include_str!("../data/hoteles.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Imagenes {
    pub hotel: String,
    #[serde(default)]
    pub galeria: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub precio_noche: u32,
    pub estrellas: u8,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub imagenes: Imagenes,
}

pub fn catalog() -> &'static [Hotel] {
    static CATALOG: OnceLock<Vec<Hotel>> = OnceLock::new();
    CATALOG.get_or_init(|| match serde_json::from_str(HOTELES_JSON) {
        Ok(hoteles) => hoteles,
        Err(e) => {
            gloo_console::error!("failed to parse embedded hotel catalog:", e.to_string());
            Vec::new()
        }
    })
}

pub fn find(id: &str) -> Option<&'static Hotel> {
    catalog().iter().find(|h| h.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let hoteles = catalog();
        assert!(!hoteles.is_empty());
        for hotel in hoteles {
            assert!(!hotel.imagenes.hotel.is_empty());
            assert!((1..=5).contains(&hotel.estrellas), "{}", hotel.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let hoteles = catalog();
        for (i, a) in hoteles.iter().enumerate() {
            for b in &hoteles[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_matches_by_id() {
        let first = &catalog()[0];
        assert_eq!(find(&first.id).map(|h| &h.nombre), Some(&first.nombre));
        assert!(find("no-existe").is_none());
    }
}
