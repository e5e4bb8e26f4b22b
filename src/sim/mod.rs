//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (one generator per session)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod geom;
pub mod laser;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{DamageReport, evaluate};
pub use geom::{beam_endpoint, point_distance, point_segment_distance};
pub use laser::{LaserBeam, LaserPair};
pub use particles::{Particle, ParticleField, SENTINEL};
pub use state::{EyeAnchors, GameEvent, GamePhase, GameState, Player, Viewport};
pub use tick::{TickInput, tick};
