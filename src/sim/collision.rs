//! Convex polygon collision detection
//!
//! Separating Axis Theorem: two convex polygons are disjoint iff some edge
//! normal of either polygon separates their projections. Polygons here are
//! small (at most `MAX_POINTS` vertices) so every axis is tested directly.

use glam::Vec2;

use super::polygon::Polygon;

/// Closed 1-D interval of a polygon projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Project every vertex of `poly` onto `axis`
    ///
    /// `axis` need not be normalized; both polygons are scaled by the same factor.
    pub fn project(poly: &Polygon, axis: Vec2) -> Self {
        poly.points().iter().fold(
            Self {
                min: f32::INFINITY,
                max: f32::NEG_INFINITY,
            },
            |acc, p| {
                let d = p.dot(axis);
                Self {
                    min: acc.min.min(d),
                    max: acc.max.max(d),
                }
            },
        )
    }

    /// Touching intervals count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.max >= other.min && self.min <= other.max
    }
}

/// Edge normals of `poly` (each edge `p_i - p_{i+1}` rotated by +90°)
fn edge_normals(poly: &Polygon) -> impl Iterator<Item = Vec2> + '_ {
    poly.edges().map(|(a, b)| (a - b).perp())
}

/// Returns the first axis from `axes_of` that separates `a` and `b`
fn find_separating_axis(axes_of: &Polygon, a: &Polygon, b: &Polygon) -> Option<Vec2> {
    edge_normals(axes_of).find(|&axis| {
        !Interval::project(a, axis).overlaps(&Interval::project(b, axis))
    })
}

/// Check whether two convex polygons intersect
pub fn polygons_collide(a: &Polygon, b: &Polygon) -> bool {
    find_separating_axis(a, a, b).is_none() && find_separating_axis(b, a, b).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_at(center: Vec2, half: f32) -> Polygon {
        let mut sq = Polygon::from_points(&[
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ]);
        sq.translate(center);
        sq
    }

    #[test]
    fn test_far_squares_do_not_collide() {
        let a = square_at(Vec2::ZERO, 0.5);
        let b = square_at(Vec2::new(10.0, 0.0), 0.5);
        assert!(!polygons_collide(&a, &b));

        // Vertical separation uses the horizontal edges' normals
        let c = square_at(Vec2::new(0.0, 10.0), 0.5);
        assert!(!polygons_collide(&a, &c));
    }

    #[test]
    fn test_identical_polygons_collide() {
        let a = Polygon::regular(10, 5.0);
        assert!(polygons_collide(&a, &a.clone()));
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = square_at(Vec2::ZERO, 0.5);
        let b = square_at(Vec2::new(1.0, 0.0), 0.5);
        assert!(polygons_collide(&a, &b));
    }

    #[test]
    fn test_diagonal_gap_detected() {
        // Bounding boxes overlap but the triangle's hypotenuse separates them
        let tri = Polygon::from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
        ]);
        let sq = square_at(Vec2::new(1.8, 1.8), 0.5);
        assert!(!polygons_collide(&tri, &sq));
        assert!(!polygons_collide(&sq, &tri));
    }

    #[test]
    fn test_contained_polygon_collides() {
        let big = Polygon::regular(10, 60.0);
        let small = Polygon::regular(10, 5.0);
        assert!(polygons_collide(&big, &small));
    }

    #[test]
    fn test_interval_projection() {
        let sq = square_at(Vec2::new(2.0, 0.0), 1.0);
        let iv = Interval::project(&sq, Vec2::X);
        assert_eq!(iv, Interval { min: 1.0, max: 3.0 });
        assert!(iv.overlaps(&Interval { min: 3.0, max: 4.0 }));
        assert!(!iv.overlaps(&Interval { min: 3.5, max: 4.0 }));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            n1 in 3usize..12, r1 in 1.0f32..60.0,
            n2 in 3usize..12, r2 in 1.0f32..60.0,
            dx in -150.0f32..150.0, dy in -150.0f32..150.0,
            theta in -3.2f32..3.2,
        ) {
            let a = Polygon::regular(n1, r1);
            let mut b = Polygon::regular(n2, r2);
            b.rotate(theta, Vec2::ZERO);
            b.translate(Vec2::new(dx, dy));
            prop_assert_eq!(polygons_collide(&a, &b), polygons_collide(&b, &a));
        }

        #[test]
        fn prop_far_apart_never_collide(
            r1 in 1.0f32..60.0, r2 in 1.0f32..60.0, angle in -3.2f32..3.2,
        ) {
            let a = Polygon::regular(8, r1);
            let mut b = Polygon::regular(8, r2);
            let dir = Vec2::new(angle.cos(), angle.sin());
            b.translate(dir * (r1 + r2 + 1.0));
            prop_assert!(!polygons_collide(&a, &b));
        }
    }
}
