//! Game state and core simulation types
//!
//! Everything the loop mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::fmt;

use super::collision::{Aabb, Bounded, clamp_to_arena};
use super::tick::generate_level;
use crate::tuning::Tuning;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Player touched a hazard
    HazardCollision,
    /// Level countdown reached zero
    TimeUp,
}

impl GameOverReason {
    /// Message shown on the game-over overlay
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::HazardCollision => "Game Over!",
            GameOverReason::TimeUp => "Time's up!",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active level
    Playing,
    /// Run ended; frozen until acknowledged
    GameOver(GameOverReason),
}

/// Things that happened during a tick, drained by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Collectible at `index` picked up
    Collected { index: usize },
    BoostCollected,
    BoostExpired,
    /// Every collectible of `level` gathered
    LevelComplete { level: u32 },
    GameOver(GameOverReason),
    /// Run reset to level 1
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Collected { index } => write!(f, "Collected lime #{}", index),
            GameEvent::BoostCollected => write!(f, "Speed boost!"),
            GameEvent::BoostExpired => write!(f, "Speed boost expired"),
            GameEvent::LevelComplete { level } => write!(f, "Level {} complete", level),
            GameEvent::GameOver(reason) => write!(f, "{}", reason.message()),
            GameEvent::Restarted => write!(f, "Run restarted at level 1"),
        }
    }
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Current speed (px per tick), doubled while boosted
    pub speed: f32,
}

impl Player {
    /// Player centered in the arena at base speed
    pub fn centered(arena: Vec2, tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        Self {
            pos: clamp_to_arena((arena - Vec2::splat(size)) / 2.0, size, arena),
            size,
            speed: tuning.player_speed,
        }
    }

    /// Move by `delta` then clamp inside the arena
    pub fn translate(&mut self, delta: Vec2, arena: Vec2) {
        self.pos = clamp_to_arena(self.pos + delta, self.size, arena);
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// An item to gather. Never removed from its level's set, only flagged.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

impl Bounded for Collectible {
    fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// A bouncing obstacle
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec2,
    /// Velocity (px per tick)
    pub vel: Vec2,
    pub size: f32,
}

impl Hazard {
    /// Advance one tick, bouncing off the arena edges
    ///
    /// No position correction: a hazard may overshoot an edge by up to one
    /// step before the reflected velocity carries it back.
    pub fn advance(&mut self, arena: Vec2) {
        self.pos += self.vel;

        let max = arena - Vec2::splat(self.size);
        if self.pos.x <= 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x >= max.x {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y <= 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y >= max.y {
            self.vel.y = -self.vel.y.abs();
        }
    }
}

impl Bounded for Hazard {
    fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// The per-level speed boost pickup
#[derive(Debug, Clone)]
pub struct Boost {
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

impl Bounded for Boost {
    fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub(crate) rng: Pcg32,
    /// Gameplay numbers
    pub tuning: Tuning,
    /// Playfield size (canvas size at load)
    pub arena: Vec2,
    /// Current level (1-based)
    pub level: u32,
    /// Seconds left in this level
    pub timer: f32,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// This level's collectibles
    pub collectibles: Vec<Collectible>,
    /// This level's hazards
    pub hazards: Vec<Hazard>,
    /// This level's boost pickup
    pub boost: Option<Boost>,
    /// Wall-clock time (ms) the active boost was picked up
    pub boost_started_at: Option<f64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events (oldest first)
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run at level 1
    pub fn new(seed: u64, arena: Vec2, tuning: Tuning) -> Self {
        let player = Player::centered(arena, &tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            timer: tuning.level_duration_secs,
            tuning,
            arena,
            level: 1,
            phase: GamePhase::Playing,
            player,
            collectibles: Vec::new(),
            hazards: Vec::new(),
            boost: None,
            boost_started_at: None,
            time_ticks: 0,
            events: Vec::new(),
        };
        generate_level(&mut state);
        state
    }

    /// Restart the run: level 1, player centered at base speed, no boost
    pub fn reset(&mut self) {
        self.level = 1;
        self.player = Player::centered(self.arena, &self.tuning);
        self.boost_started_at = None;
        self.phase = GamePhase::Playing;
        generate_level(self);
        self.events.push(GameEvent::Restarted);
    }

    /// Advance to the next level, keeping the player and any active boost
    pub fn advance_level(&mut self) {
        let finished = self.level;
        self.level += 1;
        generate_level(self);
        self.events.push(GameEvent::LevelComplete { level: finished });
    }

    /// End the run
    pub fn game_over(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::GameOver(reason);
        self.events.push(GameEvent::GameOver(reason));
    }

    pub fn is_boosted(&self) -> bool {
        self.boost_started_at.is_some()
    }

    /// Milliseconds of boost left at `now_ms`
    pub fn boost_remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.boost_started_at
            .map(|start| (self.tuning.boost_duration_ms - (now_ms - start)).max(0.0))
    }

    /// True when every collectible of this level is gathered
    pub fn all_collected(&self) -> bool {
        self.collectibles.iter().all(|c| c.collected)
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
