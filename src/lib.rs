//! Laser Dodge - an eye-laser dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (laser sweep, particle field, collisions, game state)
//! - `session`: Orchestrator owning one run and its audio collaborator
//! - `config`: Session configuration and the calibrated anchor provider
//! - `audio`: Hit-cue collaborator seam

pub mod audio;
pub mod config;
pub mod session;
pub mod sim;

pub use config::{ConfigError, SessionConfig, calibrated_anchors};
pub use session::{GameSession, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Outer loop tick interval (20 Hz)
    pub const TICK_DT: f32 = 0.05;
    /// Inner physics step for laser sweep integration (60 Hz equivalent)
    pub const PHYS_DT: f32 = 1.0 / 60.0;

    /// Default viewport dimensions
    pub const VIEW_WIDTH: i32 = 720;
    pub const VIEW_HEIGHT: i32 = 990;

    /// Laser sweep bounds and timing
    pub const LASER_ANGLE_LIMIT: f32 = 45.0;
    /// Launch angles are whole degrees within this range
    pub const LASER_SPAWN_ANGLE: i32 = 30;
    pub const LASER_MAX_SWEEP_SPEED: f32 = 5.0;
    pub const LASER_ACTIVE_SECS: f32 = 2.0;
    pub const LASER_COOLDOWN_SECS: f32 = 3.0;
    /// Per-tick activation chance once off cooldown
    pub const LASER_REFIRE_CHANCE: f64 = 0.3;
    /// Opening volley shutoff after reset
    pub const OPENING_GRACE_SECS: f32 = 3.0;

    /// Particle field
    pub const PARTICLE_POOL_SIZE: usize = 30;
    pub const PARTICLE_SPAWN_CHANCE: f64 = 0.25;
    /// Reduced spawn pressure while a volley is active
    pub const PARTICLE_SPAWN_CHANCE_LASER: f64 = 0.05;

    /// Hit ranges and damage
    pub const LASER_HIT_RANGE: f32 = 15.0;
    pub const LASER_DAMAGE: i32 = 10;
    pub const PARTICLE_HIT_RANGE: f32 = 20.0;
    pub const PARTICLE_DAMAGE: i32 = 5;
    /// Post-hit window during which no new damage applies
    pub const RECOVERY_SECS: f32 = 0.5;

    /// Player
    pub const MAX_HEALTH: i32 = 100;
    pub const START_LIVES: u8 = 3;
    /// The movement band starts this far below the anchor midline
    pub const BAND_BELOW_ANCHORS: i32 = 100;
    pub const BOTTOM_MARGIN: i32 = 30;
    /// Health level that triggers the low-health warning
    pub const LOW_HEALTH_WARNING: i32 = 30;
}
