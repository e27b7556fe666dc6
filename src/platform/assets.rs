//! Sprite assets
//!
//! Five images, loaded by URL. Only the background is awaited; the others
//! decode in the background and are skipped at draw time until ready.

use serde::{Deserialize, Serialize};

use crate::renderer::sprites::SpriteKind;

/// Image URLs for each sprite kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub background: String,
    pub player: String,
    pub collectible: String,
    pub hazard: String,
    pub boost: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "./assets/background.png".to_string(),
            player: "./assets/pirate.png".to_string(),
            collectible: "./assets/lime.png".to_string(),
            hazard: "./assets/shark.png".to_string(),
            boost: "./assets/boost.png".to_string(),
        }
    }
}

impl AssetManifest {
    pub fn url(&self, kind: SpriteKind) -> &str {
        match kind {
            SpriteKind::Background => &self.background,
            SpriteKind::Player => &self.player,
            SpriteKind::Collectible => &self.collectible,
            SpriteKind::Hazard => &self.hazard,
            SpriteKind::Boost => &self.boost,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{SpriteImages, load_image};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use super::AssetManifest;
    use crate::platform::PlatformError;
    use crate::renderer::sprites::SpriteKind;

    /// Start loading `url` and wait for it to decode
    pub async fn load_image(url: &str) -> Result<HtmlImageElement, PlatformError> {
        let image = HtmlImageElement::new()?;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(url);

        let result = JsFuture::from(promise).await;
        image.set_onload(None);
        image.set_onerror(None);
        result.map_err(|_| PlatformError::AssetLoad(url.to_string()))?;
        Ok(image)
    }

    /// Start loading `url` without waiting
    fn spawn_image(url: &str) -> Result<HtmlImageElement, PlatformError> {
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        Ok(image)
    }

    /// Loaded sprite images
    pub struct SpriteImages {
        /// `None` when the background failed to load
        pub background: Option<HtmlImageElement>,
        pub player: HtmlImageElement,
        pub collectible: HtmlImageElement,
        pub hazard: HtmlImageElement,
        pub boost: HtmlImageElement,
    }

    impl SpriteImages {
        /// Kick off every load, then wait for the background only
        pub async fn load(manifest: &AssetManifest) -> Result<Self, PlatformError> {
            let player = spawn_image(manifest.url(SpriteKind::Player))?;
            let collectible = spawn_image(manifest.url(SpriteKind::Collectible))?;
            let hazard = spawn_image(manifest.url(SpriteKind::Hazard))?;
            let boost = spawn_image(manifest.url(SpriteKind::Boost))?;

            let background = match load_image(manifest.url(SpriteKind::Background)).await {
                Ok(image) => {
                    log::info!("Background loaded");
                    Some(image)
                }
                Err(e) => {
                    log::error!("{} - starting with a plain background", e);
                    None
                }
            };

            Ok(Self {
                background,
                player,
                collectible,
                hazard,
                boost,
            })
        }

        /// Image for `kind`, if it has finished decoding
        pub fn ready(&self, kind: SpriteKind) -> Option<&HtmlImageElement> {
            let image = match kind {
                SpriteKind::Background => self.background.as_ref()?,
                SpriteKind::Player => &self.player,
                SpriteKind::Collectible => &self.collectible,
                SpriteKind::Hazard => &self.hazard,
                SpriteKind::Boost => &self.boost,
            };
            (image.complete() && image.natural_width() > 0).then_some(image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.url(SpriteKind::Player), "./assets/pirate.png");
        assert_eq!(manifest.url(SpriteKind::Collectible), "./assets/lime.png");
        assert_eq!(manifest.url(SpriteKind::Hazard), "./assets/shark.png");
        assert_eq!(manifest.url(SpriteKind::Boost), "./assets/boost.png");
        assert_eq!(manifest.url(SpriteKind::Background), "./assets/background.png");
    }

    #[test]
    fn test_partial_manifest() {
        let manifest: AssetManifest =
            serde_json::from_str(r#"{ "hazard": "./cdn/shark@2x.png" }"#).unwrap();
        assert_eq!(manifest.hazard, "./cdn/shark@2x.png");
        assert_eq!(manifest.boost, "./assets/boost.png");
    }
}
