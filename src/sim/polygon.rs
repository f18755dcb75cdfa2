//! Fixed-capacity convex polygons in world coordinates
//!
//! Vertices are stored in place: translation and rotation rewrite the points
//! and never reorder them, so the winding (and the sign of the area) is stable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{cross, rotate};
use crate::consts::MAX_POINTS;

/// An ordered polygon boundary with at most `MAX_POINTS` vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: [Vec2; MAX_POINTS],
    n: usize,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            points: [Vec2::ZERO; MAX_POINTS],
            n: 0,
        }
    }
}

impl Polygon {
    /// Build a polygon from a vertex list
    ///
    /// Panics if more than `MAX_POINTS` vertices are given.
    pub fn from_points(points: &[Vec2]) -> Self {
        assert!(
            points.len() <= MAX_POINTS,
            "polygon has {} points, max is {}",
            points.len(),
            MAX_POINTS
        );
        let mut poly = Self::default();
        poly.points[..points.len()].copy_from_slice(points);
        poly.n = points.len();
        poly
    }

    /// Regular `n`-gon of radius `r` around the origin, starting at `(0, r)`
    pub fn regular(n: usize, r: f32) -> Self {
        let step = std::f32::consts::TAU / n as f32;
        let start = Vec2::new(0.0, r);
        let points: Vec<Vec2> = (0..n).map(|i| rotate(step * i as f32, start)).collect();
        Self::from_points(&points)
    }

    /// Active vertices
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.n]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Iterate over edges as `(p_i, p_{i+1 mod n})`
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let pts = self.points();
        (0..pts.len()).map(move |i| (pts[i], pts[(i + 1) % pts.len()]))
    }

    pub fn translate(&mut self, t: Vec2) {
        for p in &mut self.points[..self.n] {
            *p += t;
        }
    }

    /// Rotate every vertex by `theta` about `pivot`
    pub fn rotate(&mut self, theta: f32, pivot: Vec2) {
        for p in &mut self.points[..self.n] {
            *p = rotate(theta, *p - pivot) + pivot;
        }
    }

    /// Lower-left corner of the axis-aligned bounding box
    pub fn min(&self) -> Vec2 {
        self.points()
            .iter()
            .fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p))
    }

    /// Upper-right corner of the axis-aligned bounding box
    pub fn max(&self) -> Vec2 {
        self.points()
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |acc, p| acc.max(*p))
    }

    /// Shoelace area; positive for counter-clockwise winding
    pub fn signed_area(&self) -> f32 {
        0.5 * self.edges().map(|(a, b)| cross(a, b)).sum::<f32>()
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid
    ///
    /// A zero-area polygon divides by zero here and yields non-finite
    /// components. Callers only feed it shapes built by the spawners.
    pub fn centroid(&self) -> Vec2 {
        let sum = self
            .edges()
            .fold(Vec2::ZERO, |acc, (a, b)| acc + cross(a, b) * (a + b));
        sum / (6.0 * self.signed_area())
    }
}
