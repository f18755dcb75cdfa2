//! Polyroids - polygon asteroids on a wrap-around playfield
//!
//! Core modules:
//! - `sim`: Simulation (entity pool, kinematics, collisions, game rules)
//! - `renderer`: Draw list and vertex generation for adapters
//! - `audio`: Sound cue mapping for game events
//! - `platform`: Clock and key decoding
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameState, GameStatus, SimError};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Playfield dimensions (origin at the centre, y up)
    pub const WIDTH: f32 = 1024.0;
    pub const HEIGHT: f32 = 768.0;

    /// Hard ceiling on live entities (player + asteroids + bullets + particles)
    pub const MAX_ENTITIES: usize = 512;
    /// Maximum vertices in any polygon
    pub const MAX_POINTS: usize = 16;

    /// Debris particles
    pub const PARTICLE_POINTS: usize = 10;
    pub const NUM_PARTICLES: usize = 10;
    pub const PARTICLE_RAD: f32 = 1.0;
    pub const PARTICLE_VEL: f32 = 50.0;

    /// Asteroid grey band
    pub const MIN_GREY: f32 = 0.25;
    pub const MAX_GREY: f32 = 0.75;

    /// Player ship (a kite: nose sits PLAYER_PROP of the length ahead of the wings)
    pub const PLAYER_LENGTH: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_PROP: f32 = 0.75;
    pub const THRUST: f32 = 750.0;
    pub const DRAG: f32 = 1.0;
    pub const PLAYER_OMEGA: f32 = 1.25 * PI;

    /// Bullets
    pub const BULLET_POINTS: usize = 10;
    pub const BULLET_RAD: f32 = 5.0;
    pub const BULLET_VEL: f32 = 600.0;

    /// Asteroids
    pub const ASTEROID_POINTS: usize = 10;
    pub const BIG_ASTEROID_RAD: f32 = 60.0;
    pub const ASTEROID_RAD: f32 = 30.0;
    pub const ASTEROID_VEL: f32 = 150.0;
    pub const INIT_NUM_ASTEROIDS: usize = 5;
    pub const MAX_NUM_ASTEROIDS: usize = 20;
}
