//! Pure geometry helpers: grid snapping, exact rotation, arc angles.

use super::Angle;
use glam::Vec2;

/// Rounds a position to the nearest grid point.
///
/// A non-positive or non-finite interval disables snapping.
pub fn snap_to_grid(pos: Vec2, interval: f32) -> Vec2 {
    if !interval.is_finite() || interval <= 0.0 {
        return pos;
    }
    (pos / interval).round() * interval
}

/// Rotates `pos` around `center` by `angle` (counter-clockwise positive).
///
/// Multiples of 90° are computed exactly, so mirroring a grid point through
/// the center yields coordinates that compare equal with `==`.
pub fn rotate_around(pos: Vec2, angle: Angle, center: Vec2) -> Vec2 {
    let deg = angle.to_deg().rem_euclid(360.0);
    if deg == 0.0 {
        return pos;
    }
    let d = pos - center;
    let rotated = if deg == 90.0 {
        Vec2::new(-d.y, d.x)
    } else if deg == 180.0 {
        -d
    } else if deg == 270.0 {
        Vec2::new(d.y, -d.x)
    } else {
        Vec2::from_angle(angle.to_rad()).rotate(d)
    };
    center + rotated
}

/// Signed angle from `p1` to `p2` as seen from `center`, in `(-180°, 180°]`.
///
/// Returns 0° if either point coincides with the center.
pub fn arc_angle(p1: Vec2, p2: Vec2, center: Vec2) -> Angle {
    let a = p1 - center;
    let b = p2 - center;
    if a == Vec2::ZERO || b == Vec2::ZERO {
        return Angle::DEG0;
    }
    let rad = a.perp_dot(b).atan2(a.dot(b));
    Angle::from_deg(rad.to_degrees()).mapped_to_180()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn snap_rounds_to_nearest_grid_point() {
        let snapped = snap_to_grid(Vec2::new(3.9, -1.3), 2.5);
        assert_eq!(snapped, Vec2::new(5.0, -2.5));
    }

    #[test]
    fn snap_with_invalid_interval_is_identity() {
        let pos = Vec2::new(1.23, 4.56);
        assert_eq!(snap_to_grid(pos, 0.0), pos);
        assert_eq!(snap_to_grid(pos, -1.0), pos);
        assert_eq!(snap_to_grid(pos, f32::NAN), pos);
    }

    #[test]
    fn rotate_by_180_is_exact_mirror() {
        let center = Vec2::new(2.5, 2.5);
        let mirrored = rotate_around(Vec2::new(7.5, 5.0), Angle::DEG180, center);
        assert_eq!(mirrored, Vec2::new(-2.5, 0.0));
    }

    #[test]
    fn rotate_by_arbitrary_angle() {
        let rotated = rotate_around(Vec2::new(10.0, 0.0), Angle::from_deg(45.0), Vec2::ZERO);
        assert_relative_eq!(rotated.x, 7.071_068, epsilon = 1e-4);
        assert_relative_eq!(rotated.y, 7.071_068, epsilon = 1e-4);
    }

    #[test]
    fn arc_angle_is_signed() {
        let ccw = arc_angle(Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0), Vec2::ZERO);
        let cw = arc_angle(Vec2::new(10.0, 0.0), Vec2::new(0.0, -10.0), Vec2::ZERO);
        assert_relative_eq!(ccw.to_deg(), 90.0, epsilon = 1e-4);
        assert_relative_eq!(cw.to_deg(), -90.0, epsilon = 1e-4);
    }

    #[test]
    fn arc_angle_opposite_point_is_positive_180() {
        let a = arc_angle(Vec2::new(10.0, 0.0), Vec2::new(-10.0, 0.0), Vec2::ZERO);
        assert_relative_eq!(a.to_deg(), 180.0, epsilon = 1e-4);
    }
}
