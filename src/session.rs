//! Session orchestration
//!
//! Owns one run's state plus the injected audio collaborator, drives the
//! fixed-cadence tick, and hands read-only snapshots to the presentation
//! layer. The simulation itself stays pure; everything with side effects
//! (cues, logging) happens here, after each tick, off the event list.

use serde::Serialize;

use crate::audio::HitCue;
use crate::config::{ConfigError, SessionConfig};
use crate::consts::TICK_DT;
use crate::sim::{
    EyeAnchors, GameEvent, GamePhase, GameState, LaserPair, Particle, Player, TickInput, Viewport,
    tick,
};

/// Read-only view of the state after a tick, for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    pub lasers: LaserPair,
    pub particles: Vec<Particle>,
    pub anchors: EyeAnchors,
    pub viewport: Viewport,
}

/// Top-level per-run driver
pub struct GameSession<A: HitCue> {
    state: GameState,
    audio: A,
}

impl<A: HitCue> GameSession<A> {
    /// Build a session, rejecting malformed configuration up front
    pub fn new(config: &SessionConfig, audio: A) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            audio,
        })
    }

    /// Start or restart the run (guaranteed opening laser volley)
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Advance one tick at the nominal cadence
    pub fn tick(&mut self, input: &TickInput) {
        self.tick_dt(input, TICK_DT);
    }

    /// Advance one tick with an explicit timestep
    pub fn tick_dt(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.state, input, dt);
        self.audio.advance(dt);

        for event in &self.state.events {
            match event {
                GameEvent::PlayerHit { damage } => {
                    log::debug!("player hit for {damage}");
                    // A failed cue never fails the tick
                    if let Err(err) = self.audio.play_hit_cue() {
                        log::warn!("hit cue failed: {err}");
                    }
                }
                GameEvent::LowHealth => {
                    log::info!("health low: {}", self.state.player.health);
                }
                GameEvent::LifeLost | GameEvent::GameOver => {}
            }
        }
    }

    /// Move the player; refused unless a run is in progress
    pub fn move_player(&mut self, dx: i32, dy: i32) {
        self.state.move_player(dx, dy);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    /// Read-only copy for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score,
            player: self.state.player.clone(),
            lasers: self.state.lasers.clone(),
            particles: self.state.particles.slots.to_vec(),
            anchors: self.state.anchors,
            viewport: self.state.viewport,
        }
    }
}
