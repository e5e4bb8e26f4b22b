//! Session configuration and anchor calibration
//!
//! The core never detects anything: the two beam anchors arrive as a static
//! injected pair, derived from fixed calibration rectangles. Configuration
//! is validated once, at session construction, and rejected outright when
//! malformed.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BAND_BELOW_ANCHORS, BOTTOM_MARGIN, VIEW_HEIGHT, VIEW_WIDTH};
use crate::sim::{EyeAnchors, Viewport};

/// Calibration rectangles the anchor pair is derived from
const LEFT_CALIBRATION_RECT: (IVec2, IVec2) = (IVec2::new(178, 282), IVec2::new(226, 330));
const RIGHT_CALIBRATION_RECT: (IVec2, IVec2) = (IVec2::new(484, 300), IVec2::new(523, 343));

/// The anchor pair: midpoints of the fixed calibration rectangles
pub fn calibrated_anchors() -> EyeAnchors {
    EyeAnchors {
        left: midpoint(LEFT_CALIBRATION_RECT),
        right: midpoint(RIGHT_CALIBRATION_RECT),
    }
}

fn midpoint((a, b): (IVec2, IVec2)) -> IVec2 {
    IVec2::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}

/// Configuration rejected at session construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    BadViewport { width: i32, height: i32 },
    #[error("anchor ({0}, {1}) lies outside the viewport")]
    AnchorOutOfBounds(i32, i32),
    #[error("no room for the player band below the anchors")]
    EmptyMovementBand,
}

/// Everything needed to construct a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub viewport: Viewport,
    pub anchors: EyeAnchors,
    /// Session RNG seed; the one place randomness is seeded
    pub seed: u64,
}

impl SessionConfig {
    /// Default arena with the calibrated anchor pair
    pub fn calibrated(seed: u64) -> Self {
        Self {
            viewport: Viewport {
                width: VIEW_WIDTH,
                height: VIEW_HEIGHT,
            },
            anchors: calibrated_anchors(),
            seed,
        }
    }

    /// Fail-fast validation of viewport and anchor geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::BadViewport { width, height });
        }
        for anchor in [self.anchors.left, self.anchors.right] {
            if anchor.x < 0 || anchor.x > width || anchor.y < 0 || anchor.y > height {
                return Err(ConfigError::AnchorOutOfBounds(anchor.x, anchor.y));
            }
        }
        // The movement band must exist below the anchors
        if self.anchors.mid_y() + BAND_BELOW_ANCHORS > height - BOTTOM_MARGIN {
            return Err(ConfigError::EmptyMovementBand);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibrated_anchor_midpoints() {
        let anchors = calibrated_anchors();
        assert_eq!(anchors.left, IVec2::new(202, 306));
        assert_eq!(anchors.right, IVec2::new(503, 321));
    }

    #[test]
    fn test_calibrated_config_is_valid() {
        assert_eq!(SessionConfig::calibrated(0).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_viewport() {
        let mut config = SessionConfig::calibrated(0);
        config.viewport.width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadViewport { width: 0, height: VIEW_HEIGHT })
        );
    }

    #[test]
    fn test_rejects_anchor_outside_viewport() {
        let mut config = SessionConfig::calibrated(0);
        config.anchors.right = IVec2::new(800, 321);
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnchorOutOfBounds(800, 321))
        );
    }

    #[test]
    fn test_rejects_viewport_too_short_for_band() {
        let mut config = SessionConfig::calibrated(0);
        config.viewport.height = 350;
        assert_eq!(config.validate(), Err(ConfigError::EmptyMovementBand));
    }
}
