//! Falling light particles
//!
//! A fixed pool of 30 slots. An inactive slot parks at the `(-1, -1)`
//! sentinel with zero velocity; spawning scans for sentinels in index order
//! (first-fit) so slot reuse is deterministic.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{EyeAnchors, Viewport};
use crate::consts::PARTICLE_POOL_SIZE;

/// Slot marker for "not on screen"
pub const SENTINEL: IVec2 = IVec2::new(-1, -1);

/// One falling hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Particle {
    pub const INACTIVE: Self = Self {
        pos: SENTINEL,
        vel: IVec2::ZERO,
    };

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pos != SENTINEL
    }
}

/// Fixed-capacity pool of falling particles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleField {
    pub slots: [Particle; PARTICLE_POOL_SIZE],
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            slots: [Particle::INACTIVE; PARTICLE_POOL_SIZE],
        }
    }

    /// Release a burst of 2-4 particles from the anchors into free slots.
    ///
    /// Each one starts at a randomly chosen anchor with a small sideways
    /// drift and a strictly downward fall. A full pool spawns fewer (or
    /// none) rather than evicting live particles.
    pub fn spawn(&mut self, rng: &mut Pcg32, anchors: &EyeAnchors) {
        let burst = rng.random_range(2..=4);
        let mut released = 0;

        for slot in self.slots.iter_mut() {
            if released == burst {
                break;
            }
            if slot.is_active() {
                continue;
            }
            slot.pos = if rng.random_bool(0.5) {
                anchors.left
            } else {
                anchors.right
            };
            slot.vel = IVec2::new(rng.random_range(-5..=5), rng.random_range(4..=8));
            released += 1;
        }
    }

    /// Step every active particle; slots leaving the viewport return to the
    /// sentinel with zero velocity.
    pub fn advance(&mut self, viewport: Viewport) {
        for slot in self.slots.iter_mut() {
            if !slot.is_active() {
                continue;
            }
            let next = slot.pos + slot.vel;
            if next.y > viewport.height || next.x < 0 || next.x > viewport.width {
                *slot = Particle::INACTIVE;
            } else {
                slot.pos = next;
            }
        }
    }

    /// Park every slot at the sentinel
    pub fn clear(&mut self) {
        self.slots = [Particle::INACTIVE; PARTICLE_POOL_SIZE];
    }

    /// Particles currently on screen
    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const VIEW: Viewport = Viewport {
        width: 720,
        height: 990,
    };

    fn anchors() -> EyeAnchors {
        EyeAnchors {
            left: IVec2::new(202, 306),
            right: IVec2::new(503, 321),
        }
    }

    #[test]
    fn test_spawn_fills_free_slots_first_fit() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut field = ParticleField::new();
        field.spawn(&mut rng, &anchors());

        let n = field.active_count();
        assert!((2..=4).contains(&n));
        // First-fit: the active slots are a prefix of the pool
        for (i, slot) in field.slots.iter().enumerate() {
            assert_eq!(slot.is_active(), i < n);
        }
        for p in field.iter_active() {
            assert!(p.pos == anchors().left || p.pos == anchors().right);
            assert!((-5..=5).contains(&p.vel.x));
            assert!((4..=8).contains(&p.vel.y));
        }
    }

    #[test]
    fn test_spawn_skips_live_slots() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut field = ParticleField::new();
        let pinned = Particle {
            pos: IVec2::new(50, 50),
            vel: IVec2::new(0, 4),
        };
        field.slots[0] = pinned;

        field.spawn(&mut rng, &anchors());
        assert_eq!(field.slots[0], pinned);
    }

    #[test]
    fn test_spawn_into_full_pool_is_noop() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::new();
        for slot in field.slots.iter_mut() {
            slot.pos = IVec2::new(10, 10);
            slot.vel = IVec2::new(0, 4);
        }
        let before = field.clone();
        field.spawn(&mut rng, &anchors());
        assert_eq!(field, before);
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut field = ParticleField::new();
        field.slots[3] = Particle {
            pos: IVec2::new(100, 100),
            vel: IVec2::new(-2, 5),
        };
        field.advance(VIEW);
        assert_eq!(field.slots[3].pos, IVec2::new(98, 105));
    }

    #[test]
    fn test_advance_culls_below_viewport() {
        let mut field = ParticleField::new();
        field.slots[0] = Particle {
            pos: IVec2::new(100, 988),
            vel: IVec2::new(0, 5),
        };
        field.advance(VIEW);
        assert_eq!(field.slots[0], Particle::INACTIVE);
    }

    #[test]
    fn test_advance_culls_side_exits() {
        let mut field = ParticleField::new();
        field.slots[0] = Particle {
            pos: IVec2::new(2, 500),
            vel: IVec2::new(-5, 4),
        };
        field.slots[1] = Particle {
            pos: IVec2::new(718, 500),
            vel: IVec2::new(5, 4),
        };
        field.advance(VIEW);
        assert_eq!(field.slots[0], Particle::INACTIVE);
        assert_eq!(field.slots[1], Particle::INACTIVE);
    }

    #[test]
    fn test_clear_parks_everything() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = ParticleField::new();
        field.spawn(&mut rng, &anchors());
        field.clear();
        assert_eq!(field.active_count(), 0);
        assert!(field.slots.iter().all(|s| *s == Particle::INACTIVE));
    }

    proptest! {
        /// A sentinel slot never carries velocity, and live particles stay
        /// inside the viewport, over any spawn/advance interleaving
        #[test]
        fn prop_sentinel_slots_have_zero_velocity(seed in any::<u64>(), steps in 1usize..200) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ParticleField::new();

            for i in 0..steps {
                if i % 3 == 0 {
                    field.spawn(&mut rng, &anchors());
                }
                field.advance(VIEW);

                for slot in field.slots.iter() {
                    if slot.is_active() {
                        prop_assert!(slot.pos.x >= 0 && slot.pos.x <= VIEW.width);
                        prop_assert!(slot.pos.y <= VIEW.height);
                    } else {
                        prop_assert_eq!(slot.vel, IVec2::ZERO);
                    }
                }
            }
        }
    }
}
