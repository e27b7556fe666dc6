//! Fixed timestep simulation tick
//!
//! One call advances the game by one frame (1/60 s).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, Bounded, collides};
use super::input::{Controls, Direction};
use super::state::{
    Boost, Collectible, GameEvent, GameOverReason, GamePhase, GameState, Hazard,
};
use crate::consts::{MAX_SPAWN_ATTEMPTS, SIM_DT};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direction flags for this tick
    pub controls: Controls,
    /// Wall-clock time (ms), used for the boost timer
    pub now_ms: f64,
    /// Dismiss the game-over overlay and restart
    pub acknowledge: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let GamePhase::GameOver(_) = state.phase {
        if input.acknowledge {
            state.reset();
        }
        return;
    }

    state.time_ticks += 1;

    // Player movement
    let speed = state.player.speed;
    let mut delta = Vec2::ZERO;
    if input.controls.is_held(Direction::Up) {
        delta.y -= speed;
    }
    if input.controls.is_held(Direction::Down) {
        delta.y += speed;
    }
    if input.controls.is_held(Direction::Left) {
        delta.x -= speed;
    }
    if input.controls.is_held(Direction::Right) {
        delta.x += speed;
    }
    state.player.translate(delta, state.arena);

    for hazard in &mut state.hazards {
        hazard.advance(state.arena);
    }

    // Collectibles are flagged, never removed
    for (index, collectible) in state.collectibles.iter_mut().enumerate() {
        if !collectible.collected && collides(&state.player, &*collectible) {
            collectible.collected = true;
            state.events.push(GameEvent::Collected { index });
        }
    }

    if let Some(boost) = state.boost.as_mut() {
        if !boost.collected && collides(&state.player, &*boost) {
            boost.collected = true;
            // A second pickup refreshes the timer instead of stacking
            state.boost_started_at = Some(input.now_ms);
            state.player.speed = state.tuning.player_speed * state.tuning.boost_multiplier;
            state.events.push(GameEvent::BoostCollected);
        }
    }

    if state.hazards.iter().any(|h| collides(&state.player, h)) {
        state.game_over(GameOverReason::HazardCollision);
        return;
    }

    if let Some(start) = state.boost_started_at {
        if input.now_ms - start > state.tuning.boost_duration_ms {
            state.boost_started_at = None;
            state.player.speed = state.tuning.player_speed;
            state.events.push(GameEvent::BoostExpired);
        }
    }

    if state.all_collected() {
        state.advance_level();
        return;
    }

    state.timer -= SIM_DT;
    if state.timer <= 0.0 {
        state.timer = 0.0;
        state.game_over(GameOverReason::TimeUp);
    }
}

/// Random top-left corner keeping a box of `size` inside the arena
fn random_position(rng: &mut Pcg32, arena: Vec2, size: f32) -> Vec2 {
    let span = (arena - Vec2::splat(size)).max(Vec2::ZERO);
    Vec2::new(rng.random::<f32>() * span.x, rng.random::<f32>() * span.y)
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { -1.0 } else { 1.0 }
}

/// Build the entity sets for `state.level` and restart the countdown
///
/// Counts are linear in the level number. Hazards are re-rolled (within a
/// budget) so they never start inside the clearance zone around the player.
pub fn generate_level(state: &mut GameState) {
    let tuning = state.tuning.clone();
    let arena = state.arena;
    let level = state.level;

    let collectible_count = tuning.collectibles_for_level(level);
    state.collectibles = (0..collectible_count)
        .map(|_| Collectible {
            pos: random_position(&mut state.rng, arena, tuning.collectible_size),
            size: tuning.collectible_size,
            collected: false,
        })
        .collect();

    let hazard_count = tuning.hazards_for_level(level);
    let keep_out = state.player.bounds().expand(tuning.spawn_clearance);
    let mut hazards = Vec::with_capacity(hazard_count);
    for _ in 0..hazard_count {
        let mut pos = random_position(&mut state.rng, arena, tuning.hazard_size);
        let mut attempts = 1;
        while attempts < MAX_SPAWN_ATTEMPTS
            && Aabb::square(pos, tuning.hazard_size).overlaps(&keep_out)
        {
            pos = random_position(&mut state.rng, arena, tuning.hazard_size);
            attempts += 1;
        }
        let vel = Vec2::new(
            random_sign(&mut state.rng) * tuning.hazard_speed,
            random_sign(&mut state.rng) * tuning.hazard_speed,
        );
        hazards.push(Hazard {
            pos,
            vel,
            size: tuning.hazard_size,
        });
    }
    state.hazards = hazards;

    state.boost = Some(Boost {
        pos: random_position(&mut state.rng, arena, tuning.boost_size),
        size: tuning.boost_size,
        collected: false,
    });

    state.timer = tuning.level_duration_secs;

    log::info!(
        "Level {}: {} collectibles, {} hazards",
        level,
        collectible_count,
        hazard_count
    );
}
