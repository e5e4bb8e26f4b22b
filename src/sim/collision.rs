//! Threat hit-testing against the player token
//!
//! One evaluation pass per tick: the player point is tested against both
//! beam segments and every live particle. Damage is cumulative within the
//! pass, with no per-tick cap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geom::{point_distance, point_segment_distance};
use super::laser::LaserPair;
use super::particles::ParticleField;
use super::state::EyeAnchors;
use crate::consts::{LASER_DAMAGE, LASER_HIT_RANGE, PARTICLE_DAMAGE, PARTICLE_HIT_RANGE};

/// Damage accumulated by one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    pub total: i32,
    pub laser_hits: u32,
    pub particle_hits: u32,
}

impl DamageReport {
    #[inline]
    pub fn any(&self) -> bool {
        self.total > 0
    }
}

/// Test the player against both threat subsystems.
///
/// A beam hits when the player is within [`LASER_HIT_RANGE`] of the segment
/// from its anchor to its endpoint; a zero-length beam never hits. A
/// particle hits within [`PARTICLE_HIT_RANGE`] of the player point.
pub fn evaluate(
    player_pos: IVec2,
    anchors: &EyeAnchors,
    lasers: &LaserPair,
    particles: &ParticleField,
) -> DamageReport {
    let mut report = DamageReport::default();

    if lasers.active {
        for (anchor, beam) in [(anchors.left, &lasers.left), (anchors.right, &lasers.right)] {
            match point_segment_distance(player_pos, anchor, beam.endpoint) {
                Some(d) if d < LASER_HIT_RANGE => {
                    report.total += LASER_DAMAGE;
                    report.laser_hits += 1;
                }
                _ => {}
            }
        }
    }

    for particle in particles.iter_active() {
        if point_distance(particle.pos, player_pos) < PARTICLE_HIT_RANGE {
            report.total += PARTICLE_DAMAGE;
            report.particle_hits += 1;
        }
    }

    report
}
