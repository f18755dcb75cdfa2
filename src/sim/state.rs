//! Game state and spawning
//!
//! `GameState` owns everything the simulation mutates: the entity pool, the
//! per-category index arrays, the input latch board, the RNG and the queue of
//! sound cues for the adapters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Color, Entity, Playfield};
use super::error::SimError;
use super::input::{InputState, Key, KeyEventKind};
use super::polygon::Polygon;
use super::pool::{EntityIndex, EntityPool, IndexArray};
use super::vector::{heading, random_dir, rotate};
use crate::consts::*;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Reserved; nothing happens in this state
    Start,
    /// Active gameplay
    Playing,
    /// Ship destroyed, debris still animating, waiting for restart
    Over,
}

/// One-shot notifications for audio and other adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    Shot,
    Hit,
    GameOver,
    ThrustStarted,
    ThrustStopped,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub field: Playfield,
    pub pool: EntityPool,
    /// Player ship handle
    pub player: EntityIndex,
    pub asteroids: IndexArray,
    pub bullets: IndexArray,
    pub particles: IndexArray,
    pub input: InputState,
    /// Spawn debris particles on destruction
    pub spawn_debris: bool,
    /// Frames simulated since the last (re)start
    pub frames: u64,
    events: Vec<GameEvent>,
    /// Cues already queued when the last update finished
    stale_events: usize,
}

impl GameState {
    /// Create a game with the given seed, ready to play
    pub fn new(seed: u64) -> Result<Self, SimError> {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field: Playfield::default(),
            pool: EntityPool::with_capacity(MAX_ENTITIES),
            player: 0,
            asteroids: IndexArray::with_capacity(MAX_ENTITIES),
            bullets: IndexArray::with_capacity(MAX_ENTITIES),
            particles: IndexArray::with_capacity(MAX_ENTITIES),
            input: InputState::default(),
            spawn_debris: true,
            frames: 0,
            events: Vec::new(),
            stale_events: 0,
        };
        state.init()?;
        Ok(state)
    }

    /// Reset to the starting configuration
    ///
    /// Frees every entity, spawns the ship at the origin plus the initial
    /// asteroid batch, and clears all input latches. The RNG keeps running so
    /// consecutive rounds differ.
    pub fn init(&mut self) -> Result<(), SimError> {
        self.pool.clear();
        self.asteroids.clear();
        self.bullets.clear();
        self.particles.clear();
        self.frames = 0;

        let player = Entity::new(player_shape(), Color::BLACK)
            .centered_at(Vec2::ZERO)
            .with_health(2);
        self.player = self.pool.alloc(player)?;

        for _ in 0..INIT_NUM_ASTEROIDS {
            self.spawn_asteroid()?;
        }

        self.input = InputState::default();
        self.events.push(GameEvent::GameStarted);
        log::info!(
            "Game started (seed {}, {} asteroids)",
            self.seed,
            self.asteroids.len()
        );
        Ok(())
    }

    /// Player ship
    pub fn player(&self) -> &Entity {
        self.pool.get(self.player)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.input.status
    }

    pub fn asteroid_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.asteroids.iter().map(|i| self.pool.get(i))
    }

    pub fn bullet_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.bullets.iter().map(|i| self.pool.get(i))
    }

    pub fn particle_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.particles.iter().map(|i| self.pool.get(i))
    }

    /// Route a decoded key event into the latch board
    pub fn handle_key(&mut self, key: Key, kind: KeyEventKind, held_time: f32) {
        if let Some(event) = self.input.on_key(key, kind, held_time) {
            self.events.push(event);
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the cues emitted since the last call
    ///
    /// Call once per frame; cues left over from the previous frame are
    /// dropped at the start of the next update.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Drop cues that survived a whole frame without being drained
    pub(crate) fn expire_events(&mut self) {
        if self.stale_events > 0 {
            log::trace!("Dropping {} undrained cues", self.stale_events);
            self.events.drain(..self.stale_events);
            self.stale_events = 0;
        }
    }

    pub(crate) fn mark_events(&mut self) {
        self.stale_events = self.events.len();
    }

    /// Spawn a fresh asteroid just outside a random edge
    pub fn spawn_asteroid(&mut self) -> Result<EntityIndex, SimError> {
        let color = Color::grey(self.rng.random_range(MIN_GREY..=MAX_GREY));
        let (r, health) = if self.rng.random_bool(0.5) {
            (BIG_ASTEROID_RAD, 2)
        } else {
            (ASTEROID_RAD, 1)
        };

        let (min, max) = (self.field.min, self.field.max);
        let cent = match self.rng.random_range(0..4) {
            0 => Vec2::new(min.x - r, self.rng.random_range(min.y..=max.y)),
            1 => Vec2::new(max.x + r, self.rng.random_range(min.y..=max.y)),
            2 => Vec2::new(self.rng.random_range(min.x..=max.x), min.y - r),
            _ => Vec2::new(self.rng.random_range(min.x..=max.x), max.y + r),
        };
        let v = random_dir(&mut self.rng) * ASTEROID_VEL;
        self.spawn_asteroid_with(r, color, cent, v, health)
    }

    /// Spawn an asteroid of radius `r` with its centroid at `cent`
    pub fn spawn_asteroid_with(
        &mut self,
        r: f32,
        color: Color,
        cent: Vec2,
        v: Vec2,
        health: u8,
    ) -> Result<EntityIndex, SimError> {
        let shape = asteroid_shape(&mut self.rng, r);
        let asteroid = Entity::new(shape, color)
            .centered_at(cent)
            .with_velocity(v)
            .with_health(health);
        let idx = self.pool.alloc(asteroid)?;
        self.asteroids.push(idx);
        log::debug!("Asteroid {} spawned at ({:.0}, {:.0}), r={}", idx, cent.x, cent.y, r);
        Ok(idx)
    }

    /// Spawn a bullet at the ship's nose travelling along its heading
    pub fn spawn_bullet(&mut self) -> Result<EntityIndex, SimError> {
        let player = self.pool.get(self.player);
        let dir = heading(player.theta);
        let nose = player.cent + dir * (PLAYER_LENGTH / 2.0);

        let bullet = Entity::new(Polygon::regular(BULLET_POINTS, BULLET_RAD), Color::RED)
            .centered_at(nose)
            .with_velocity(dir * BULLET_VEL);
        let idx = self.pool.alloc(bullet)?;
        self.bullets.push(idx);
        Ok(idx)
    }

    /// Burst of `n` debris particles scattered within `r` of `center`
    pub fn spawn_particles(
        &mut self,
        n: usize,
        r: f32,
        color: Color,
        center: Vec2,
    ) -> Result<(), SimError> {
        for _ in 0..n {
            let offset = random_dir(&mut self.rng) * (self.rng.random::<f32>() * r);
            let v = random_dir(&mut self.rng) * (self.rng.random::<f32>() * PARTICLE_VEL);
            let particle = Entity::new(Polygon::regular(PARTICLE_POINTS, PARTICLE_RAD), color)
                .centered_at(center + offset)
                .with_velocity(v);
            let idx = self.pool.alloc(particle)?;
            self.particles.push(idx);
        }
        Ok(())
    }
}

/// Kite-shaped ship pointing along +x, centroid not yet at the origin
fn player_shape() -> Polygon {
    Polygon::from_points(&[
        Vec2::new(PLAYER_PROP * PLAYER_LENGTH, 0.0),
        Vec2::new(0.0, 0.5 * PLAYER_WIDTH),
        Vec2::new(-(1.0 - PLAYER_PROP) * PLAYER_LENGTH, 0.0),
        Vec2::new(0.0, -0.5 * PLAYER_WIDTH),
    ])
}

/// Irregular star-like outline: `ASTEROID_POINTS` vertices at radius `r`,
/// separated by random positive angular steps that add up to a full turn
fn asteroid_shape<R: Rng + ?Sized>(rng: &mut R, r: f32) -> Polygon {
    // (0, 1]: every step is strictly positive
    let steps: [f32; ASTEROID_POINTS] = std::array::from_fn(|_| 1.0 - rng.random::<f32>());
    let sum: f32 = steps.iter().sum();

    let start = Vec2::new(0.0, r);
    let mut theta = 0.0;
    let mut points = [Vec2::ZERO; ASTEROID_POINTS];
    for (p, step) in points.iter_mut().zip(steps) {
        *p = rotate(theta, start);
        theta += std::f32::consts::TAU * (step / sum);
    }
    Polygon::from_points(&points)
}
