//! Collision detection and response
//!
//! Circle-versus-rectangle hit testing via closest-point distance, plus the
//! velocity reflection used for brick and wall bounces. Paddle contact uses
//! an angle-remapping rule instead (see `tick`), not plain reflection.
//!
//! The test is sampled once per entity per tick, not swept: a fast ball can
//! cross a thin brick within a single step without registering a hit. That
//! single-sample policy is a deliberate behavioral contract of the game.

use glam::Vec2;

use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the rectangle to the circle center (if hit)
    pub point: Vec2,
    /// Unit normal from closest point toward the circle center (for reflection)
    pub normal: Vec2,
    /// Overlap depth (for position correction), >= 0 on a hit
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Minimum distance substituted when the circle center sits exactly on the
/// closest point, so the normal never divides by zero. A center fully inside
/// the rectangle therefore reports a zero normal and penetration == radius.
const MIN_DISTANCE: f32 = 1e-4;

/// Check collision between a circle and an axis-aligned rectangle
///
/// Hit iff the squared distance from the circle center to the rectangle's
/// closest point is within the squared radius.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(center);
    let delta = center - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > radius * radius {
        return CollisionResult::miss();
    }

    let dist = if dist_sq > 0.0 {
        dist_sq.sqrt()
    } else {
        MIN_DISTANCE
    };

    CollisionResult {
        hit: true,
        point: closest,
        normal: delta / dist,
        penetration: radius - dist,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v.n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hit_from_above() {
        let rect = Rect::new(100.0, 100.0, 60.0, 20.0);
        // Ball center 5 above the top edge, radius 7
        let result = circle_rect_collision(Vec2::new(130.0, 95.0), 7.0, &rect);
        assert!(result.hit);
        // Normal points straight up (toward the ball)
        assert!((result.normal - Vec2::new(0.0, -1.0)).length() < 1e-5);
        assert!((result.penetration - 2.0).abs() < 1e-5);
        assert_eq!(result.point, Vec2::new(130.0, 100.0));
    }

    #[test]
    fn test_miss_just_out_of_reach() {
        let rect = Rect::new(100.0, 100.0, 60.0, 20.0);
        let result = circle_rect_collision(Vec2::new(130.0, 92.0), 7.0, &rect);
        assert!(!result.hit);
        assert_eq!(result.penetration, 0.0);
    }

    #[test]
    fn test_corner_hit_has_diagonal_normal() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Center diagonally off the (10,10) corner at distance ~4.24
        let result = circle_rect_collision(Vec2::new(13.0, 13.0), 5.0, &rect);
        assert!(result.hit);
        let expected = Vec2::new(1.0, 1.0).normalize();
        assert!((result.normal - expected).length() < 1e-5);
        assert!((result.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_inside_rect_degenerate_normal() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let result = circle_rect_collision(Vec2::new(50.0, 25.0), 7.0, &rect);
        assert!(result.hit);
        // Zero-distance case: epsilon substitution yields a zero normal
        assert_eq!(result.normal, Vec2::ZERO);
        assert!(result.penetration > 0.0);
    }

    #[test]
    fn test_reflect_off_horizontal_surface() {
        // Ball moving down-right, surface normal pointing up
        let reflected = reflect_velocity(Vec2::new(100.0, 150.0), Vec2::new(0.0, -1.0));
        assert!((reflected.x - 100.0).abs() < 1e-4);
        assert!((reflected.y - (-150.0)).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_off_vertical_surface() {
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 1e-4);
        assert!(reflected.y.abs() < 1e-4);
    }

    proptest! {
        #![proptest_config(ProptestConfig { max_global_rejects: 200_000, ..ProptestConfig::default() })]

        /// Hit exactly when the Euclidean distance to the closest point is
        /// within the radius.
        #[test]
        fn prop_hit_iff_within_radius(
            cx in -50.0..650.0f32,
            cy in -50.0..450.0f32,
            r in 0.5..20.0f32,
            rx in 0.0..500.0f32,
            ry in 0.0..350.0f32,
            rw in 1.0..120.0f32,
            rh in 1.0..60.0f32,
        ) {
            let rect = Rect::new(rx, ry, rw, rh);
            let center = Vec2::new(cx, cy);
            let result = circle_rect_collision(center, r, &rect);

            let closest = rect.closest_point(center);
            let dist_sq = (center - closest).length_squared();
            prop_assert_eq!(result.hit, dist_sq <= r * r);
        }

        /// On a hit, penetration is non-negative and stepping back along the
        /// normal by the penetration stays within radius of the rectangle.
        #[test]
        fn prop_penetration_reconstructs_boundary(
            cx in -50.0..650.0f32,
            cy in -50.0..450.0f32,
            r in 0.5..20.0f32,
            rx in 0.0..500.0f32,
            ry in 0.0..350.0f32,
            rw in 1.0..120.0f32,
            rh in 1.0..60.0f32,
        ) {
            let rect = Rect::new(rx, ry, rw, rh);
            let center = Vec2::new(cx, cy);
            let result = circle_rect_collision(center, r, &rect);
            prop_assume!(result.hit);

            prop_assert!(result.penetration >= 0.0);
            let reconstructed = center - result.normal * result.penetration;
            let to_rect = (reconstructed - rect.closest_point(reconstructed)).length();
            prop_assert!(to_rect <= r + 1e-3);
        }

        /// Reflection preserves speed for any unit normal.
        #[test]
        fn prop_reflect_preserves_speed(
            vx in -600.0..600.0f32,
            vy in -600.0..600.0f32,
            angle in 0.0..std::f32::consts::TAU,
        ) {
            let velocity = Vec2::new(vx, vy);
            let normal = Vec2::new(angle.cos(), angle.sin());
            let reflected = reflect_velocity(velocity, normal);
            let tolerance = 1e-3 * velocity.length().max(1.0);
            prop_assert!((reflected.length() - velocity.length()).abs() < tolerance);
        }
    }
}
