//! Sweeping laser beams anchored at the eye points
//!
//! Both beams activate and expire together but sweep independently: each
//! oscillates between -45 and +45 degrees off vertical, reflecting off the
//! bounds. Endpoints are derived values, recomputed immediately after every
//! angle change.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::beam_endpoint;
use super::state::{EyeAnchors, Viewport};
use crate::consts::{LASER_ANGLE_LIMIT, LASER_MAX_SWEEP_SPEED, LASER_SPAWN_ANGLE};

/// One sweeping beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserBeam {
    /// Degrees off vertical, always within the sweep bounds
    pub angle_deg: f32,
    /// Sweep rate in degrees per second of physics time; sign is direction
    pub angular_speed: f32,
    /// Derived far end of the beam segment
    pub endpoint: IVec2,
}

impl Default for LaserBeam {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            angular_speed: 0.0,
            endpoint: IVec2::ZERO,
        }
    }
}

impl LaserBeam {
    /// Re-aim with a fresh random angle and sweep speed
    fn rearm(&mut self, rng: &mut Pcg32, anchor: IVec2, viewport: Viewport) {
        // Whole-degree launch angles, continuous sweep speeds
        self.angle_deg = rng.random_range(-LASER_SPAWN_ANGLE..=LASER_SPAWN_ANGLE) as f32;
        self.angular_speed = rng.random_range(-LASER_MAX_SWEEP_SPEED..=LASER_MAX_SWEEP_SPEED);
        self.retarget(anchor, viewport);
    }

    /// Advance the sweep, reflecting off the angular bounds
    fn sweep(&mut self, dt: f32, anchor: IVec2, viewport: Viewport) {
        self.angle_deg += self.angular_speed * dt;

        if self.angle_deg > LASER_ANGLE_LIMIT {
            self.angle_deg = LASER_ANGLE_LIMIT;
            self.angular_speed = -self.angular_speed;
        } else if self.angle_deg < -LASER_ANGLE_LIMIT {
            self.angle_deg = -LASER_ANGLE_LIMIT;
            self.angular_speed = -self.angular_speed;
        }

        self.retarget(anchor, viewport);
    }

    /// Recompute the derived endpoint from the current angle
    fn retarget(&mut self, anchor: IVec2, viewport: Viewport) {
        self.endpoint = beam_endpoint(anchor, self.angle_deg, viewport.height);
    }
}

/// Both beams plus their shared activation flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaserPair {
    pub active: bool,
    pub left: LaserBeam,
    pub right: LaserBeam,
}

impl LaserPair {
    /// Fire both beams with fresh random angles and sweep speeds
    pub fn activate(&mut self, rng: &mut Pcg32, anchors: &EyeAnchors, viewport: Viewport) {
        self.active = true;
        self.left.rearm(rng, anchors.left, viewport);
        self.right.rearm(rng, anchors.right, viewport);
        log::debug!(
            "lasers armed: left {:.0} deg @ {:+.2}, right {:.0} deg @ {:+.2}",
            self.left.angle_deg,
            self.left.angular_speed,
            self.right.angle_deg,
            self.right.angular_speed,
        );
    }

    /// Advance both sweeps; inactive pairs don't move
    pub fn advance(&mut self, dt: f32, anchors: &EyeAnchors, viewport: Viewport) {
        if !self.active {
            return;
        }
        self.left.sweep(dt, anchors.left, viewport);
        self.right.sweep(dt, anchors.right, viewport);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
