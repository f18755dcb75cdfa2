//! 2D vector helpers on top of `glam::Vec2`
//!
//! `Vec2` already covers add/sub/scale/dot; the rest lives here so the
//! geometry code reads the same way everywhere.

use glam::Vec2;
use rand::Rng;

/// Scale `v` by `s`
#[inline]
pub fn scale(s: f32, v: Vec2) -> Vec2 {
    v * s
}

/// 2D scalar cross product (`x1*y2 - y1*x2`)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Project `v` onto `u`
///
/// `u` must be non-zero.
#[inline]
pub fn project(v: Vec2, u: Vec2) -> Vec2 {
    scale(v.dot(u) / u.dot(u), u)
}

/// Rotate `v` counter-clockwise by `theta` radians
#[inline]
pub fn rotate(theta: f32, v: Vec2) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector pointing along heading `theta`
#[inline]
pub fn heading(theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(cos, sin)
}

/// Random unit direction
///
/// Samples `x` uniformly in [-1, 1] and derives `y = ±sqrt(1 - x²)`, so the
/// result is uniform in `x` rather than in angle.
pub fn random_dir<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let x: f32 = rng.random_range(-1.0..=1.0);
    let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
    Vec2::new(x, sign * (1.0 - x * x).max(0.0).sqrt())
}
