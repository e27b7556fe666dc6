//! Rendering module
//!
//! `sprites` builds a platform-free draw list; `canvas` blits it with the
//! browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use sprites::{Sprite, SpriteKind, draw_list};
