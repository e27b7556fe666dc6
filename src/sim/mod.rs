//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Wall-clock time only through `TickInput::now_ms`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod step;
pub mod tick;

pub use collision::{Aabb, Bounded, collides};
pub use input::{Controls, Direction};
pub use state::{
    Boost, Collectible, GameEvent, GameOverReason, GamePhase, GameState, Hazard, Player,
};
pub use step::FixedStep;
pub use tick::{TickInput, generate_level, tick};
