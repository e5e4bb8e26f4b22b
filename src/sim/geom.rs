//! Pure geometry for beam and particle hit-testing
//!
//! Everything here is stateless: integer screen coordinates in, distances
//! and projected points out.

use glam::IVec2;

/// Distance from a point to a line segment.
///
/// Uses the clamped projection parameter `t = dot(p-a, b-a) / |b-a|²`
/// restricted to `[0, 1]`, so points past either end measure against the
/// nearest endpoint. Returns `None` for a degenerate zero-length segment.
pub fn point_segment_distance(p: IVec2, a: IVec2, b: IVec2) -> Option<f32> {
    let p = p.as_vec2();
    let a = a.as_vec2();
    let b = b.as_vec2();

    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return None;
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let projected = a + ab * t;
    Some((p - projected).length())
}

/// Straight-line distance between two points
#[inline]
pub fn point_distance(a: IVec2, b: IVec2) -> f32 {
    (a.as_vec2() - b.as_vec2()).length()
}

/// Project a beam endpoint from its anchor.
///
/// The ray leaves the anchor at `angle_deg` off vertical (positive tilts
/// right, screen Y grows downward) with length `2 × viewport_height`, long
/// enough to exit the screen at any legal angle. The endpoint Y is capped at
/// that same length and coordinates truncate to integers.
pub fn beam_endpoint(anchor: IVec2, angle_deg: f32, viewport_height: i32) -> IVec2 {
    let len = (viewport_height * 2) as f32;
    let rad = angle_deg.to_radians();

    let x = anchor.x as f32 + rad.sin() * len;
    let y = (anchor.y as f32 + rad.cos() * len).min(len);
    IVec2::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_vertical_segment() {
        // Player left of a straight-down beam: horizontal offset only
        let d = point_segment_distance(
            IVec2::new(100, 500),
            IVec2::new(202, 306),
            IVec2::new(202, 1600),
        );
        assert_eq!(d, Some(102.0));
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        let a = IVec2::new(0, 0);
        let b = IVec2::new(10, 0);

        // Beyond b: distance measured to b itself
        let d = point_segment_distance(IVec2::new(13, 4), a, b).unwrap();
        assert!((d - 5.0).abs() < 1e-5);

        // Before a: distance measured to a
        let d = point_segment_distance(IVec2::new(-3, -4), a, b).unwrap();
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_segment_has_no_distance() {
        let p = IVec2::new(5, 5);
        let a = IVec2::new(1, 1);
        assert_eq!(point_segment_distance(p, a, a), None);
    }

    #[test]
    fn test_point_on_segment_is_zero() {
        let d = point_segment_distance(IVec2::new(5, 0), IVec2::new(0, 0), IVec2::new(10, 0));
        assert_eq!(d, Some(0.0));
    }

    #[test]
    fn test_beam_endpoint_straight_down() {
        // Angle 0 drops straight down and the Y cap engages
        let end = beam_endpoint(IVec2::new(202, 306), 0.0, 990);
        assert_eq!(end.x, 202);
        assert_eq!(end.y, 990 * 2);
    }

    #[test]
    fn test_beam_endpoint_tilts_sideways() {
        let right = beam_endpoint(IVec2::new(202, 306), 30.0, 990);
        assert!(right.x > 202);
        let left = beam_endpoint(IVec2::new(202, 306), -30.0, 990);
        assert!(left.x < 202);
        // Both capped at twice the viewport height
        assert!(right.y <= 1980 && left.y <= 1980);
    }

    #[test]
    fn test_point_distance() {
        let d = point_distance(IVec2::new(100, 100), IVec2::new(105, 103));
        assert!((d - 34.0_f32.sqrt()).abs() < 1e-5);
        assert!(d < 20.0);
    }
}
