//! Whole-game scenarios driven through the public API

use glam::Vec2;

use polyroids::consts::*;
use polyroids::sim::{Color, GameEvent, Key, KeyEventKind};
use polyroids::{GameState, GameStatus};

const DT: f32 = 1.0 / 60.0;

fn clear_asteroids(state: &mut GameState) {
    while !state.asteroids.is_empty() {
        let idx = state.asteroids.remove_at(0);
        state.pool.free(idx);
    }
}

/// Park a freshly fired bullet on `target`, motionless
fn bullet_at(state: &mut GameState, target: Vec2) {
    let b = state.spawn_bullet().unwrap();
    let e = state.pool.get_mut(b);
    e.translate(target - e.cent);
    e.v = Vec2::ZERO;
}

#[test]
fn test_round_from_start_to_game_over() {
    let mut state = GameState::new(2024).unwrap();
    assert_eq!(state.asteroids.len(), INIT_NUM_ASTEROIDS);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.drain_events(), vec![GameEvent::GameStarted]);

    // Fire once
    state.handle_key(Key::SPACE, KeyEventKind::Pressed, 0.0);
    state.update(DT).unwrap();
    assert_eq!(state.bullets.len(), 1);
    assert!(!state.input.shooting);
    assert_eq!(state.drain_events(), vec![GameEvent::Shot]);
    let nose = state.player().cent + Vec2::new(PLAYER_LENGTH / 2.0, 0.0);
    let bullet = state.bullet_entities().next().unwrap();
    assert!((bullet.cent - nose).length() < 1e-3);
    assert!((bullet.v - Vec2::new(BULLET_VEL, 0.0)).length() < 1e-3);

    // With nothing to hit, the bullet flies off the right edge
    clear_asteroids(&mut state);
    let mut frames = 0;
    while !state.bullets.is_empty() {
        state.update(DT).unwrap();
        frames += 1;
        assert!(frames < 120);
    }

    // Park a rock on the ship
    let cent = state.player().cent;
    state
        .spawn_asteroid_with(ASTEROID_RAD, Color::grey(0.5), cent, Vec2::ZERO, 1)
        .unwrap();
    state.update(DT).unwrap();
    assert_eq!(state.status(), GameStatus::Over);
    assert!(state.asteroids.is_empty());
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::Hit));
    assert!(events.contains(&GameEvent::GameOver));
    assert!(!events.contains(&GameEvent::Shot));

    // Enter starts the next round
    state.handle_key(Key::Enter, KeyEventKind::Pressed, 0.0);
    state.update(DT).unwrap();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.asteroids.len(), INIT_NUM_ASTEROIDS);
}

#[test]
fn test_split_conserves_counts() {
    let mut state = GameState::new(5).unwrap();
    clear_asteroids(&mut state);
    state.spawn_debris = false;

    let cent = Vec2::new(-200.0, -150.0);
    state
        .spawn_asteroid_with(BIG_ASTEROID_RAD, Color::grey(0.6), cent, Vec2::ZERO, 2)
        .unwrap();
    bullet_at(&mut state, cent);
    let live = state.pool.live_count();

    state.update(0.0).unwrap();
    // -1 bullet, -1 parent, +2 children
    assert!(state.bullets.is_empty());
    assert_eq!(state.asteroids.len(), 2);
    assert_eq!(state.pool.live_count(), live);
    assert!(state.asteroid_entities().all(|a| a.health == 1));
    assert!(state.particles.is_empty());
}

#[test]
fn test_pool_never_exhausted_under_fire() {
    let mut state = GameState::new(77).unwrap();
    state.handle_key(Key::Left, KeyEventKind::Pressed, 0.0);

    for frame in 0..6000u32 {
        if frame % 6 == 0 {
            state.handle_key(Key::SPACE, KeyEventKind::Pressed, 0.0);
        }
        if state.status() == GameStatus::Over {
            state.handle_key(Key::Enter, KeyEventKind::Pressed, 0.0);
        }
        state.update(DT).unwrap();
        state.drain_events();

        assert!(state.pool.live_count() <= MAX_ENTITIES);
        let tracked =
            1 + state.asteroids.len() + state.bullets.len() + state.particles.len();
        assert_eq!(tracked, state.pool.live_count());
    }
}

#[test]
fn test_wrap_round_trip_stays_bounded() {
    let mut state = GameState::new(9).unwrap();
    clear_asteroids(&mut state);

    let v = Vec2::new(ASTEROID_VEL, 0.0);
    let start = Vec2::new(0.0, 250.0);
    let idx = state
        .spawn_asteroid_with(BIG_ASTEROID_RAD, Color::grey(0.5), start, v, 2)
        .unwrap();

    let limit = WIDTH / 2.0 + 2.0 * BIG_ASTEROID_RAD + ASTEROID_VEL * DT;
    let mut wrapped = false;
    let mut prev_x = start.x;
    // Long enough to cross the field once and come back to the start
    for _ in 0..((WIDTH + 4.0 * BIG_ASTEROID_RAD) / ASTEROID_VEL / DT) as usize {
        state.update(DT).unwrap();
        let cent = state.pool.get(idx).cent;
        assert!(cent.x.abs() <= limit, "escaped to {}", cent.x);
        assert!((cent.y - start.y).abs() < 1e-2);
        if cent.x < prev_x {
            wrapped = true;
        }
        prev_x = cent.x;
    }
    assert!(wrapped);
    assert!(prev_x > start.x);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut state = GameState::new(seed).unwrap();
        for frame in 0..600u32 {
            if frame % 15 == 0 {
                state.handle_key(Key::SPACE, KeyEventKind::Pressed, 0.0);
            }
            state.update(DT).unwrap();
        }
        state
            .asteroid_entities()
            .map(|a| a.cent)
            .chain(state.bullet_entities().map(|b| b.cent))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(31), run(31));
}
