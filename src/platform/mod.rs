//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names, tap buttons)
//! - Image loading
//! - Page wiring errors

pub mod assets;
pub mod error;
pub mod input;

pub use assets::AssetManifest;
pub use error::PlatformError;
pub use input::{KeyBinding, map_key};
