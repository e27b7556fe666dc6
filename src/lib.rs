//! Lime Pirate - collect the limes, dodge the sharks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, level progression)
//! - `renderer`: Draw list construction and canvas 2D drawing
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance
//! - `config`: JSON configuration loading
//! - `ui`: HUD model

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per frame at 60 fps)
    pub const FPS: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 5.0; // px per tick

    /// Collectible (lime) size
    pub const COLLECTIBLE_SIZE: f32 = 50.0;

    /// Hazard (shark) defaults
    pub const HAZARD_SIZE: f32 = 80.0;
    pub const HAZARD_SPEED: f32 = 2.0; // px per tick, per axis

    /// Speed boost defaults
    pub const BOOST_SIZE: f32 = 50.0;
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    /// Wall-clock boost duration
    pub const BOOST_DURATION_MS: f64 = 10_000.0;

    /// Countdown per level (seconds)
    pub const LEVEL_DURATION_SECS: f32 = 30.0;
    /// Collectibles per level = level + this
    pub const EXTRA_COLLECTIBLES: u32 = 4;
    /// Hazards per level = level + this
    pub const EXTRA_HAZARDS: u32 = 1;

    /// Delay before a tapped direction is released
    pub const TAP_RELEASE_MS: f64 = 100.0;
    /// Free space kept between a freshly spawned hazard and the player
    pub const SPAWN_CLEARANCE: f32 = 40.0;
    /// Re-roll budget when a hazard spawns inside the clearance zone
    pub const MAX_SPAWN_ATTEMPTS: u32 = 32;
}
