//! Simulated entities and their kinematics
//!
//! Shapes live directly in world coordinates: moving an entity rewrites its
//! polygon and keeps `cent` in step, and rotation always pivots on `cent`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use crate::consts::{HEIGHT, WIDTH};

/// Normalized RGBA color; alpha doubles as the particle fade channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque grey of intensity `i`
    pub const fn grey(i: f32) -> Self {
        Self::rgb(i, i, i)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 0-255 channels, alpha clamped to the valid range
    pub fn to_rgba8(self) -> [u8; 4] {
        let conv = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [conv(self.r), conv(self.g), conv(self.b), conv(self.a)]
    }
}

/// Axis-aligned playfield rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::centered(WIDTH, HEIGHT)
    }
}

impl Playfield {
    /// Rectangle of the given size centred on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) / 2.0;
        Self {
            min: -half,
            max: half,
        }
    }

    #[inline]
    pub fn span(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Which playfield edge an entity left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Left,
    Bottom,
    Right,
    Top,
}

/// A simulated object: ship, asteroid, bullet or particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub poly: Polygon,
    pub color: Color,
    /// Centroid of `poly`
    pub cent: Vec2,
    pub v: Vec2,
    pub a: Vec2,
    /// Heading (radians)
    pub theta: f32,
    pub omega: f32,
    /// Hits left (asteroids only)
    pub health: u8,
}

impl Entity {
    /// Entity at rest with the centroid computed from `poly`
    pub fn new(poly: Polygon, color: Color) -> Self {
        let cent = poly.centroid();
        Self {
            poly,
            color,
            cent,
            v: Vec2::ZERO,
            a: Vec2::ZERO,
            theta: 0.0,
            omega: 0.0,
            health: 0,
        }
    }

    pub fn with_velocity(mut self, v: Vec2) -> Self {
        self.v = v;
        self
    }

    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health;
        self
    }

    /// Move so the centroid lands on `pos`
    pub fn centered_at(mut self, pos: Vec2) -> Self {
        self.translate(pos - self.cent);
        self
    }

    pub fn translate(&mut self, t: Vec2) {
        self.poly.translate(t);
        self.cent += t;
    }

    /// Rotate about the centroid and advance the heading
    pub fn rotate(&mut self, theta: f32) {
        self.poly.rotate(theta, self.cent);
        self.theta += theta;
    }

    /// Semi-implicit Euler step
    pub fn tick(&mut self, dt: f32) {
        self.v += self.a * dt;
        self.translate(self.v * dt);
        self.rotate(self.omega * dt);
    }

    /// The edge the bounding box has fully crossed while still moving outward
    ///
    /// Checked left, bottom, right, top; only the first match is reported.
    pub fn exit(&self, field: &Playfield) -> Option<Exit> {
        let min = self.poly.min();
        let max = self.poly.max();

        if max.x < field.min.x && self.v.x < 0.0 {
            Some(Exit::Left)
        } else if max.y < field.min.y && self.v.y < 0.0 {
            Some(Exit::Bottom)
        } else if min.x > field.max.x && self.v.x > 0.0 {
            Some(Exit::Right)
        } else if min.y > field.max.y && self.v.y > 0.0 {
            Some(Exit::Top)
        } else {
            None
        }
    }

    #[inline]
    pub fn exited_outward(&self, field: &Playfield) -> bool {
        self.exit(field).is_some()
    }

    /// Wrap to the opposite edge after fully leaving the playfield
    ///
    /// The jump is the playfield span plus the entity's own extent on that
    /// axis, so it re-enters by exactly the distance it overshot. Returns
    /// whether a wrap happened.
    pub fn teleport(&mut self, field: &Playfield) -> bool {
        let Some(exit) = self.exit(field) else {
            return false;
        };
        let size = self.poly.max() - self.poly.min();
        let span = field.span();
        let t = match exit {
            Exit::Left => Vec2::new(span.x + size.x, 0.0),
            Exit::Bottom => Vec2::new(0.0, span.y + size.y),
            Exit::Right => Vec2::new(-span.x - size.x, 0.0),
            Exit::Top => Vec2::new(0.0, -span.y - size.y),
        };
        self.translate(t);
        true
    }
}
