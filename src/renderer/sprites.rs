//! Draw list generation
//!
//! Turns a state snapshot into the ordered list of sprites to blit. Collected
//! items stay in the state but never reach the list.

use glam::Vec2;

use crate::sim::GameState;

/// Which image a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Background,
    Player,
    Collectible,
    Hazard,
    Boost,
}

/// One image blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner in canvas pixels
    pub pos: Vec2,
    pub size: Vec2,
}

impl Sprite {
    fn square(kind: SpriteKind, pos: Vec2, size: f32) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::splat(size),
        }
    }
}

/// Sprites in back-to-front order: background, player, collectibles, hazards, boost
pub fn draw_list(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(3 + state.collectibles.len() + state.hazards.len());

    sprites.push(Sprite {
        kind: SpriteKind::Background,
        pos: Vec2::ZERO,
        size: state.arena,
    });

    sprites.push(Sprite::square(
        SpriteKind::Player,
        state.player.pos,
        state.player.size,
    ));

    sprites.extend(
        state
            .collectibles
            .iter()
            .filter(|c| !c.collected)
            .map(|c| Sprite::square(SpriteKind::Collectible, c.pos, c.size)),
    );

    sprites.extend(
        state
            .hazards
            .iter()
            .map(|h| Sprite::square(SpriteKind::Hazard, h.pos, h.size)),
    );

    if let Some(boost) = state.boost.as_ref().filter(|b| !b.collected) {
        sprites.push(Sprite::square(SpriteKind::Boost, boost.pos, boost.size));
    }

    sprites
}
