//! Game state and core simulation types
//!
//! One [`GameState`] per session: player, threats, timers, and the session
//! RNG, mutated only by [`tick`](super::tick::tick) and the reset/movement
//! operations here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::laser::LaserPair;
use super::particles::ParticleField;
use crate::config::{ConfigError, SessionConfig};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session exists but no run has started
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; terminal until reset
    GameOver,
}

/// Fixed screen area the game plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// The two fixed beam origins, injected once at session construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeAnchors {
    pub left: IVec2,
    pub right: IVec2,
}

impl EyeAnchors {
    /// Mean anchor height, truncating like the rest of the screen math
    #[inline]
    pub fn mid_y(&self) -> i32 {
        (self.left.y + self.right.y) / 2
    }
}

/// Player token state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub health: i32,
    pub lives: u8,
    /// Currently overlapping a threat
    pub is_colliding: bool,
    /// Inside the post-hit recovery window; no new damage applies
    pub is_recovering: bool,
    /// Seconds elapsed in the current recovery window
    pub recovery_elapsed: f32,
}

impl Player {
    fn new(viewport: Viewport, anchors: &EyeAnchors) -> Self {
        Self {
            pos: Self::spawn_pos(viewport, anchors),
            health: MAX_HEALTH,
            lives: START_LIVES,
            is_colliding: false,
            is_recovering: false,
            recovery_elapsed: 0.0,
        }
    }

    /// Spawn point: horizontally centered at the top of the movement band
    fn spawn_pos(viewport: Viewport, anchors: &EyeAnchors) -> IVec2 {
        let y = (anchors.mid_y() + BAND_BELOW_ANCHORS).min(viewport.height - BOTTOM_MARGIN);
        IVec2::new(viewport.width / 2, y)
    }

    /// Move by a delta. X clamps to the viewport; Y clamps to the band
    /// between 100 px below the anchors and the bottom margin.
    pub fn move_by(&mut self, dx: i32, dy: i32, viewport: Viewport, anchors: &EyeAnchors) {
        let x = (self.pos.x + dx).clamp(0, viewport.width);
        let min_y = anchors.mid_y() + BAND_BELOW_ANCHORS;
        let max_y = viewport.height - BOTTOM_MARGIN;
        let y = (self.pos.y + dy).clamp(min_y, max_y);
        self.pos = IVec2::new(x, y);
    }

    /// Subtract damage, spending a life when health runs out. With lives
    /// remaining, health refills; on the last life it pins at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.lives = self.lives.saturating_sub(1);
            self.health = if self.lives > 0 { MAX_HEALTH } else { 0 };
        }
    }
}

/// Things a tick produced that the outside world may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player took damage this tick (aggregated total)
    PlayerHit { damage: i32 },
    /// Health crossed below the warning threshold
    LowHealth,
    /// Health was exhausted and a life was spent
    LifeLost,
    /// Lives ran out; the run is over
    GameOver,
}

/// Complete per-session game state.
///
/// Deterministic given the seed and the input sequence: all randomness comes
/// from one [`Pcg32`] seeded at construction and never reseeded mid-session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub viewport: Viewport,
    pub anchors: EyeAnchors,
    pub phase: GamePhase,
    pub player: Player,
    pub lasers: LaserPair,
    pub particles: ParticleField,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds the current laser volley has been active
    pub(crate) laser_active_secs: f32,
    /// Seconds since the last volley ended
    pub(crate) laser_cooldown_secs: f32,
    /// Remaining opening-volley grace time; `None` once fired or canceled
    pub(crate) grace_secs: Option<f32>,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a session state, rejecting malformed configuration up front
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seed: config.seed,
            rng: Pcg32::seed_from_u64(config.seed),
            viewport: config.viewport,
            anchors: config.anchors,
            phase: GamePhase::NotStarted,
            player: Player::new(config.viewport, &config.anchors),
            lasers: LaserPair::default(),
            particles: ParticleField::new(),
            score: 0,
            time_ticks: 0,
            laser_active_secs: 0.0,
            laser_cooldown_secs: 0.0,
            grace_secs: None,
            events: Vec::new(),
        })
    }

    /// Start (or restart) a run: fresh player, threats cleared, timers
    /// zeroed, then one guaranteed opening volley on a grace deadline.
    ///
    /// The RNG is deliberately left alone so a session stays one
    /// reproducible stream across restarts.
    pub fn reset(&mut self) {
        self.player = Player::new(self.viewport, &self.anchors);
        self.particles.clear();
        self.lasers.deactivate();
        self.score = 0;
        self.time_ticks = 0;
        self.laser_active_secs = 0.0;
        self.laser_cooldown_secs = 0.0;
        self.events.clear();
        self.phase = GamePhase::Running;

        // Guaranteed opening volley; the grace deadline shuts it off and
        // replaces any deadline still pending from an earlier run
        self.lasers.activate(&mut self.rng, &self.anchors, self.viewport);
        self.grace_secs = Some(OPENING_GRACE_SECS);

        log::info!("run started (seed {})", self.seed);
    }

    /// Move the player; ignored unless a run is in progress
    pub fn move_player(&mut self, dx: i32, dy: i32) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.player.move_by(dx, dy, self.viewport, &self.anchors);
    }
}
