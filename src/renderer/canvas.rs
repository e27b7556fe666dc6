//! Canvas 2D renderer
//!
//! Blits the draw list with `drawImage`. No per-frame allocation beyond the
//! draw list itself.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::sprites::{SpriteKind, draw_list};
use crate::platform::PlatformError;
use crate::platform::assets::SpriteImages;
use crate::sim::GameState;

/// Fill used when the background image is unavailable
const FALLBACK_BACKGROUND: &str = "#1b6ca8";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: SpriteImages,
    pub size: (f64, f64),
}

impl CanvasRenderer {
    pub fn new(
        canvas: &HtmlCanvasElement,
        images: SpriteImages,
    ) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(PlatformError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::NoContext2d)?;
        Ok(Self {
            ctx,
            images,
            size: (canvas.width() as f64, canvas.height() as f64),
        })
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) {
        let (w, h) = self.size;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        for sprite in draw_list(state) {
            let Some(image) = self.images.ready(sprite.kind) else {
                if sprite.kind == SpriteKind::Background {
                    self.ctx.set_fill_style_str(FALLBACK_BACKGROUND);
                    self.ctx.fill_rect(0.0, 0.0, w, h);
                }
                continue;
            };
            if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                sprite.pos.x as f64,
                sprite.pos.y as f64,
                sprite.size.x as f64,
                sprite.size.y as f64,
            ) {
                log::debug!("drawImage failed for {:?}: {:?}", sprite.kind, e);
            }
        }
    }
}
