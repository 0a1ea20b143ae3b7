use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Substitute asset for images that fail to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://via.placeholder.com/800x600?text=Imagen+no+disponible";
pub const FALLBACK_IMAGE_ALT: &str = "Imagen no disponible";
