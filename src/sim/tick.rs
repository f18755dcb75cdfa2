//! Per-frame update pipeline
//!
//! Order within a frame: restart check, particles, asteroids, bullets, then
//! (while playing) the ship, firing and ship/asteroid hits, and finally
//! bullet/asteroid hits regardless of status.

use glam::Vec2;

use super::collision::polygons_collide;
use super::error::SimError;
use super::state::{GameEvent, GameState, GameStatus};
use super::vector::{heading, random_dir};
use crate::consts::*;

/// Advance the simulation by `dt` seconds
///
/// `dt == 0` is valid and used for the first frame. A latched restart resets
/// the game and skips everything else this frame.
///
/// Sound cues not drained by the end of the following update are dropped.
pub fn update(state: &mut GameState, dt: f32) -> Result<(), SimError> {
    state.expire_events();
    let result = step(state, dt);
    state.mark_events();
    result
}

fn step(state: &mut GameState, dt: f32) -> Result<(), SimError> {
    if state.input.restarting {
        log::info!("Restarting");
        return state.init();
    }

    state.frames += 1;

    update_particles(state, dt);
    update_asteroids(state, dt);
    update_bullets(state, dt);

    if state.input.status == GameStatus::Playing {
        update_player(state, dt);

        if state.input.shooting {
            state.spawn_bullet()?;
            state.input.shooting = false;
            state.emit(GameEvent::Shot);
        }

        resolve_player_hits(state)?;
    }

    resolve_bullet_hits(state)?;

    log::trace!(
        "frame {}: {} asteroids, {} bullets, {} particles",
        state.frames,
        state.asteroids.len(),
        state.bullets.len(),
        state.particles.len()
    );
    Ok(())
}

impl GameState {
    /// Advance the simulation by `dt` seconds (see [`update`])
    pub fn update(&mut self, dt: f32) -> Result<(), SimError> {
        update(self, dt)
    }
}

/// Fade particles by `dt`; expired ones are freed
fn update_particles(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.particles.len() {
        let idx = state.particles[i];
        let particle = state.pool.get_mut(idx);
        particle.color.a -= dt;
        if particle.color.a < 0.0 {
            state.pool.free(idx);
            state.particles.remove_at(i);
        } else {
            particle.tick(dt);
            i += 1;
        }
    }
}

fn update_asteroids(state: &mut GameState, dt: f32) {
    for idx in state.asteroids.iter() {
        let asteroid = state.pool.get_mut(idx);
        asteroid.teleport(&state.field);
        asteroid.tick(dt);
    }
}

/// Bullets don't wrap: once clear of the playfield and still heading out, they go
fn update_bullets(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.bullets.len() {
        let idx = state.bullets[i];
        let bullet = state.pool.get_mut(idx);
        bullet.tick(dt);
        if bullet.exited_outward(&state.field) {
            state.pool.free(idx);
            state.bullets.remove_at(i);
            log::debug!("Bullet {} left the playfield", idx);
        } else {
            i += 1;
        }
    }
}

fn update_player(state: &mut GameState, dt: f32) {
    let input = &state.input;
    let player = state.pool.get_mut(state.player);

    player.a = -DRAG * player.v;
    player.teleport(&state.field);
    if input.thrusting {
        player.a += THRUST * heading(player.theta);
    }

    player.omega = match (input.turning_clockwise, input.turning_counterclockwise) {
        (true, false) => -PLAYER_OMEGA,
        (false, true) => PLAYER_OMEGA,
        _ => 0.0,
    };

    player.tick(dt);
}

/// Ship against every asteroid; any hit ends the round
fn resolve_player_hits(state: &mut GameState) -> Result<(), SimError> {
    let mut i = 0;
    while i < state.asteroids.len() {
        let idx = state.asteroids[i];
        let player = state.pool.get(state.player);
        let asteroid = state.pool.get(idx);

        if !polygons_collide(&player.poly, &asteroid.poly) {
            i += 1;
            continue;
        }

        let (player_cent, asteroid_cent, asteroid_color) =
            (player.cent, asteroid.cent, asteroid.color);

        state.emit(GameEvent::Hit);
        if state.input.status != GameStatus::Over {
            state.input.status = GameStatus::Over;
            state.emit(GameEvent::GameOver);
            log::info!("Game over after {} frames", state.frames);
        }

        if state.spawn_debris {
            let player_color = state.pool.get(state.player).color;
            state.spawn_particles(NUM_PARTICLES, PLAYER_LENGTH, player_color, player_cent)?;
            state.spawn_particles(NUM_PARTICLES, ASTEROID_RAD, asteroid_color, asteroid_cent)?;
        }

        // Same cursor: the next asteroid has shifted into slot i
        state.pool.free(idx);
        state.asteroids.remove_at(i);
    }
    Ok(())
}

/// Bullets against asteroids, asteroid-major
///
/// A hit consumes the bullet and one point of health. A destroyed asteroid
/// may be replaced by a fresh one from off-screen; a damaged one breaks into
/// two small asteroids. The newcomers are spawned while the bullet and the
/// parent still hold their slots, so they never reuse those handles. Either
/// way the parent leaves slot i, so the asteroid cursor stays put and the
/// bullet scan restarts for whatever now occupies it.
fn resolve_bullet_hits(state: &mut GameState) -> Result<(), SimError> {
    let mut i = 0;
    while i < state.asteroids.len() {
        let asteroid_idx = state.asteroids[i];

        let hit = {
            let asteroid = state.pool.get(asteroid_idx);
            state
                .bullets
                .iter()
                .position(|b| polygons_collide(&asteroid.poly, &state.pool.get(b).poly))
        };
        let Some(j) = hit else {
            i += 1;
            continue;
        };

        state.emit(GameEvent::Hit);

        let asteroid = state.pool.get_mut(asteroid_idx);
        asteroid.health = asteroid.health.saturating_sub(1);
        let (health, cent, color) = (asteroid.health, asteroid.cent, asteroid.color);

        if health == 0 {
            log::debug!("Asteroid {} destroyed", asteroid_idx);
            if state.spawn_debris {
                state.spawn_particles(NUM_PARTICLES, ASTEROID_RAD, color, cent)?;
            }
            // The parent is still counted here
            if state.asteroids.len() - 1 < MAX_NUM_ASTEROIDS {
                state.spawn_asteroid()?;
            }
        } else {
            log::debug!("Asteroid {} split", asteroid_idx);
            let offset = Vec2::new(ASTEROID_RAD, 0.0);
            for child in [cent + offset, cent - offset] {
                let v = random_dir(&mut state.rng) * ASTEROID_VEL;
                state.spawn_asteroid_with(ASTEROID_RAD, color, child, v, 1)?;
            }
        }

        // Newcomers were pushed at the back; the parent is still at i
        let bullet_idx = state.bullets.remove_at(j);
        state.pool.free(bullet_idx);
        state.pool.free(asteroid_idx);
        state.asteroids.remove_at(i);
    }
    Ok(())
}
