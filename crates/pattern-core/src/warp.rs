use glam::Vec2;

use crate::EPSILON;

/// Radial power-law warp of `(x, y)` around `center`.
///
/// Distances from the centre are remapped to `distance^(1 - implode)`, so
/// positive amounts pull the plane inwards and negative amounts push it out.
/// An amount within `EPSILON` of zero leaves the point untouched.
pub fn implode(implode: f32, center: Vec2, x: f32, y: f32) -> (f32, f32) {
    if implode.abs() <= EPSILON {
        return (x, y);
    }

    let mut offset = Vec2::new(x, y) - center;
    let distance = offset.length();

    if distance > EPSILON {
        offset *= distance.powf(1.0 - implode) / distance;
    }

    let warped = offset + center;
    (warped.x, warped.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_identity() {
        for &(x, y) in &[(0.0, 0.0), (0.3, -2.5), (17.0, 4.25)] {
            let center = Vec2::new(0.5, -0.75);
            assert_eq!(implode(0.0, center, x, y), (x, y));
        }
    }

    #[test]
    fn centre_is_a_fixed_point() {
        let center = Vec2::new(0.5, 0.5);
        let (x, y) = implode(0.8, center, 0.5, 0.5);
        assert!((x - 0.5).abs() < 1e-6 && (y - 0.5).abs() < 1e-6, "got ({x}, {y})");
    }

    #[test]
    fn continuous_near_centre() {
        let center = Vec2::new(0.5, 0.5);
        let (x, y) = implode(0.5, center, 0.5 + 1e-7, 0.5);
        assert!(x.is_finite() && y.is_finite());
        assert!((x - 0.5).abs() < 1e-3, "got {x}");
    }

    #[test]
    fn radial_power_law() {
        // distance 4 from the origin, implode 0.5 -> 4^0.5 = 2
        let (x, y) = implode(0.5, Vec2::ZERO, 4.0, 0.0);
        assert!((x - 2.0).abs() < 1e-5, "got {x}");
        assert!(y.abs() < 1e-6, "got {y}");
    }

    #[test]
    fn preserves_direction() {
        let center = Vec2::new(1.0, 1.0);
        let (x, y) = implode(0.3, center, 4.0, 5.0);
        let before = Vec2::new(3.0, 4.0).normalize();
        let after = (Vec2::new(x, y) - center).normalize();
        assert!((before - after).length() < 1e-5, "got {after:?}");
    }
}
