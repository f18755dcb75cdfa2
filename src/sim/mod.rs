//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Variable `dt` supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (index arrays keep insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod error;
pub mod input;
pub mod polygon;
pub mod pool;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{Interval, polygons_collide};
pub use entity::{Color, Entity, Exit, Playfield};
pub use error::SimError;
pub use input::{InputState, Key, KeyEventKind};
pub use polygon::Polygon;
pub use pool::{EntityIndex, EntityPool, IndexArray};
pub use state::{GameEvent, GameState, GameStatus};
pub use tick::update;
