//! Slice detection
//!
//! A fruit is sliced when any trail segment passes strictly closer to its
//! center than its radius.

use glam::Vec2;

use super::projectile::Projectile;
use crate::distance;

/// Shortest distance from `p` to the segment `a`-`b`
///
/// Projects `p` onto the segment, clamping to the endpoints. A zero-length
/// segment degenerates to point distance.
#[inline]
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    distance(p, a + ab * t)
}

/// Whether the segment `a`-`b` cuts the fruit
#[inline]
pub fn segment_hits(projectile: &Projectile, a: Vec2, b: Vec2) -> bool {
    point_segment_distance(projectile.pos, a, b) < projectile.radius
}

/// Test every trail segment against every active fruit
///
/// Hit fruits are deactivated on the spot, so later segments skip them and
/// each fruit is counted at most once. Returns the indices of fruits sliced
/// by this pass.
pub fn detect_slices<I>(segments: I, projectiles: &mut [Projectile]) -> Vec<usize>
where
    I: IntoIterator<Item = (Vec2, Vec2)>,
{
    let mut sliced = Vec::new();
    for (a, b) in segments {
        for (i, projectile) in projectiles.iter_mut().enumerate() {
            if projectile.is_active() && segment_hits(projectile, a, b) {
                projectile.deactivate();
                sliced.push(i);
            }
        }
    }
    sliced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::FruitColor;
    use proptest::prelude::*;

    fn fruit_at(x: f32, y: f32, radius: f32) -> Projectile {
        Projectile::new(Vec2::new(x, y), radius, -20.0, 0.5, FruitColor::Yellow)
    }

    #[test]
    fn test_distance_perpendicular() {
        let d = point_segment_distance(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        // Beyond b
        let d = point_segment_distance(Vec2::new(13.0, 4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
        // Before a
        let d = point_segment_distance(Vec2::new(-3.0, -4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_double_count_across_segments() {
        let mut fruits = vec![fruit_at(50.0, 0.0, 10.0)];
        let segments = [
            (Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0)),
            (Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0)),
        ];
        let sliced = detect_slices(segments, &mut fruits);
        assert_eq!(sliced, vec![0]);
        assert!(!fruits[0].is_active());
    }

    #[test]
    fn test_distance_equal_to_radius_is_not_a_slice() {
        let mut fruits = vec![fruit_at(50.0, 10.0, 10.0)];
        let sliced = detect_slices([(Vec2::ZERO, Vec2::new(100.0, 0.0))], &mut fruits);
        assert!(sliced.is_empty());
        assert!(fruits[0].is_active());

        let mut fruits = vec![fruit_at(50.0, 9.99, 10.0)];
        let sliced = detect_slices([(Vec2::ZERO, Vec2::new(100.0, 0.0))], &mut fruits);
        assert_eq!(sliced, vec![0]);
    }

    #[test]
    fn test_inactive_fruit_is_skipped() {
        let mut fruits = vec![fruit_at(50.0, 0.0, 10.0), fruit_at(200.0, 0.0, 10.0)];
        fruits[0].deactivate();
        let sliced = detect_slices([(Vec2::ZERO, Vec2::new(300.0, 0.0))], &mut fruits);
        assert_eq!(sliced, vec![1]);
    }

    #[test]
    fn test_segment_order_does_not_change_result() {
        let segments = vec![
            (Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)),
            (Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)),
            (Vec2::new(300.0, 100.0), Vec2::new(300.0, 400.0)),
        ];
        let make = || {
            vec![
                fruit_at(50.0, 55.0, 30.0),
                fruit_at(200.0, 90.0, 25.0),
                fruit_at(500.0, 500.0, 40.0),
                fruit_at(310.0, 300.0, 25.0),
            ]
        };
        let mut forward = make();
        let mut a = detect_slices(segments.clone(), &mut forward);
        let mut backward = make();
        let mut b = detect_slices(segments.into_iter().rev(), &mut backward);
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, vec![0, 1, 3]);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_zero_length_segment_is_point_distance(
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            sx in -1000.0f32..1000.0,
            sy in -1000.0f32..1000.0,
        ) {
            let p = Vec2::new(px, py);
            let s = Vec2::new(sx, sy);
            let expected = ((px - sx).powi(2) + (py - sy).powi(2)).sqrt();
            let d = point_segment_distance(p, s, s);
            prop_assert!((d - expected).abs() <= 1e-3 * expected.max(1.0));
        }

        #[test]
        fn prop_distance_never_exceeds_endpoint_distance(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            ax in -500.0f32..500.0,
            ay in -500.0f32..500.0,
            bx in -500.0f32..500.0,
            by in -500.0f32..500.0,
        ) {
            let (p, a, b) = (Vec2::new(px, py), Vec2::new(ax, ay), Vec2::new(bx, by));
            let d = point_segment_distance(p, a, b);
            let tol = 1e-2;
            prop_assert!(d >= 0.0);
            prop_assert!(d <= (p - a).length() + tol);
            prop_assert!(d <= (p - b).length() + tol);
        }
    }
}
