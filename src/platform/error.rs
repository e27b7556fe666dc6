//! Browser platform errors

use std::fmt;

/// Failures while wiring the game into the page
#[derive(Debug)]
pub enum PlatformError {
    /// `window` is not available
    NoWindow,
    /// `document` is not available
    NoDocument,
    /// A required element id is missing from the page
    MissingElement(String),
    /// The canvas refused a 2D context
    NoContext2d,
    /// An image failed to load
    AssetLoad(String),
    /// Any other JS exception
    Js(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NoWindow => write!(f, "No window available"),
            PlatformError::NoDocument => write!(f, "No document available"),
            PlatformError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            PlatformError::NoContext2d => write!(f, "Canvas 2D context unavailable"),
            PlatformError::AssetLoad(url) => write!(f, "Failed to load asset: {}", url),
            PlatformError::Js(msg) => write!(f, "JS error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
