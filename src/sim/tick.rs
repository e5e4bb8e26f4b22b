//! Fixed timestep simulation tick
//!
//! The per-tick driver. Subsystems advance in a fixed order every running
//! tick: recovery timer, opening-grace timer, laser phase, particle spawn
//! roll, particle advance, collision resolution, score.

use rand::Rng;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player movement delta to apply this tick
    pub move_x: i32,
    pub move_y: i32,
}

/// Advance the game state by one outer-loop step.
///
/// `dt` is the step in seconds, nominally [`TICK_DT`]; the laser sweep
/// integrates with the finer [`PHYS_DT`] per tick. A non-positive `dt`
/// leaves the simulation untouched. Lives hitting zero flips the phase to
/// `GameOver` at the top of the next tick, pre-empting that tick entirely.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::Running && state.player.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("game over at score {}", state.score);
        return;
    }

    if state.phase != GamePhase::Running || dt <= 0.0 {
        return;
    }

    state.time_ticks += 1;

    if input.move_x != 0 || input.move_y != 0 {
        state
            .player
            .move_by(input.move_x, input.move_y, state.viewport, &state.anchors);
    }

    advance_recovery(state, dt);
    advance_grace(state, dt);
    advance_laser_phase(state, dt);

    // Active lasers keep the particle pressure down
    let spawn_chance = if state.lasers.active {
        PARTICLE_SPAWN_CHANCE_LASER
    } else {
        PARTICLE_SPAWN_CHANCE
    };
    if state.rng.random_bool(spawn_chance) {
        state.particles.spawn(&mut state.rng, &state.anchors);
    }
    state.particles.advance(state.viewport);

    resolve_collisions(state);

    state.score += 1;

    debug_assert!(
        (0..=MAX_HEALTH).contains(&state.player.health),
        "health escaped bounds: {}",
        state.player.health
    );
}

fn advance_recovery(state: &mut GameState, dt: f32) {
    if !state.player.is_recovering {
        return;
    }
    state.player.recovery_elapsed += dt;
    if state.player.recovery_elapsed >= RECOVERY_SECS {
        state.player.is_recovering = false;
        state.player.is_colliding = false;
        state.player.recovery_elapsed = 0.0;
    }
}

/// Opening-volley grace deadline: forces the lasers off, then cancels itself.
/// Runs on the tick context, so a reset before expiry simply overwrites it
/// and a finished run freezes it.
fn advance_grace(state: &mut GameState, dt: f32) {
    if let Some(remaining) = state.grace_secs {
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            state.lasers.deactivate();
            state.grace_secs = None;
            log::debug!("opening volley grace expired");
        } else {
            state.grace_secs = Some(remaining);
        }
    }
}

fn advance_laser_phase(state: &mut GameState, dt: f32) {
    if state.lasers.active {
        state.laser_active_secs += dt;
        if state.laser_active_secs >= LASER_ACTIVE_SECS {
            state.lasers.deactivate();
            state.laser_active_secs = 0.0;
            state.laser_cooldown_secs = 0.0;
            log::debug!("laser volley expired");
        } else {
            state.lasers.advance(PHYS_DT, &state.anchors, state.viewport);
        }
    } else {
        state.laser_cooldown_secs += dt;
        // Once off cooldown, every tick rolls the same activation chance
        if state.laser_cooldown_secs >= LASER_COOLDOWN_SECS
            && state.rng.random_bool(LASER_REFIRE_CHANCE)
        {
            state.lasers.activate(&mut state.rng, &state.anchors, state.viewport);
            state.laser_active_secs = 0.0;
        }
    }
}

fn resolve_collisions(state: &mut GameState) {
    if state.player.is_recovering {
        return;
    }

    let report = collision::evaluate(
        state.player.pos,
        &state.anchors,
        &state.lasers,
        &state.particles,
    );

    if report.any() {
        let health_before = state.player.health;
        let lives_before = state.player.lives;

        state.player.take_damage(report.total);
        state.player.is_colliding = true;
        state.player.is_recovering = true;
        state.player.recovery_elapsed = 0.0;
        state.events.push(GameEvent::PlayerHit {
            damage: report.total,
        });

        if state.player.lives < lives_before {
            state.events.push(GameEvent::LifeLost);
            log::info!("life lost, {} remaining", state.player.lives);
        } else if health_before > LOW_HEALTH_WARNING && state.player.health <= LOW_HEALTH_WARNING {
            state.events.push(GameEvent::LowHealth);
        }
    } else if state.player.is_colliding {
        state.player.is_colliding = false;
    }
}
