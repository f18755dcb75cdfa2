//! Polyroids entry point
//!
//! Headless native driver: runs the frame loop (input, dt, update, draw)
//! against virtual time with a simple autopilot at the controls.
//!
//! Usage: `polyroids [frames]`

use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use polyroids::audio::{AudioManager, LogBackend};
use polyroids::consts::{HEIGHT, WIDTH};
use polyroids::platform::{Clock, Key, KeyEvent, KeyTracker, decode_key};
use polyroids::renderer;
use polyroids::{GameState, GameStatus, Settings, SimError};

const DEFAULT_FRAMES: u64 = 3600;
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Scripted pilot: spins, pulses the engine and fires on a cadence
struct Autopilot {
    keys: KeyTracker,
    over_frames: u64,
}

enum Action {
    Press(&'static str),
    Release(&'static str),
    Tap(&'static str),
}

impl Autopilot {
    fn new() -> Self {
        Self {
            keys: KeyTracker::new(),
            over_frames: 0,
        }
    }

    fn script(&mut self, state: &GameState, frame: u64) -> Vec<Action> {
        let mut out = Vec::new();

        if state.status() == GameStatus::Over {
            self.over_frames += 1;
            if self.keys.is_down(Key::Left) {
                out.push(Action::Release("ArrowLeft"));
            }
            if self.over_frames == 60 {
                out.push(Action::Tap("Enter"));
                self.over_frames = 0;
            }
            return out;
        }

        if !self.keys.is_down(Key::Left) {
            out.push(Action::Press("ArrowLeft"));
        }
        match frame % 120 {
            0 => out.push(Action::Press("ArrowUp")),
            30 => out.push(Action::Release("ArrowUp")),
            _ => {}
        }
        if frame % 20 == 0 {
            out.push(Action::Tap(" "));
        }
        out
    }

    fn events(&mut self, state: &GameState, frame: u64, now: Instant) -> Vec<KeyEvent> {
        let mut out = Vec::new();
        for action in self.script(state, frame) {
            let (name, press, release) = match action {
                Action::Press(name) => (name, true, false),
                Action::Release(name) => (name, false, true),
                Action::Tap(name) => (name, true, true),
            };
            let Some(key) = decode_key(name) else {
                log::warn!("Unknown key {:?}", name);
                continue;
            };
            if press {
                out.push(self.keys.press(key, false, now));
            }
            if release {
                out.push(self.keys.release(key, now));
            }
        }
        out
    }
}

fn run(frames: u64, settings: &Settings) -> Result<(), SimError> {
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut state = GameState::new(seed)?;
    state.spawn_debris = settings.particles;

    let mut audio = AudioManager::with_settings(LogBackend, settings);
    let mut clock = Clock::new();
    let mut pilot = Autopilot::new();
    let screen = Vec2::new(WIDTH, HEIGHT);

    let start = Instant::now();
    let mut now = start;
    let mut vertex_bytes = 0usize;

    let mut frame = 0u64;
    loop {
        // Out of frame budget: same path as closing the window
        if frame == frames {
            state.input.request_quit();
        }
        if state.input.quitting {
            break;
        }
        for ev in pilot.events(&state, frame, now) {
            state.handle_key(ev.key, ev.kind, ev.held_time);
        }

        let dt = clock.tick_at(now);
        state.update(dt)?;
        audio.handle_all(state.drain_events());

        let verts = renderer::tessellate(&renderer::draw_list(&state), screen);
        vertex_bytes = renderer::vertex::as_bytes(&verts).len();
        now += FRAME_TIME;
        frame += 1;
    }

    let elapsed = start.elapsed().as_secs_f64();
    log::info!(
        "Ran {} frames: {} asteroids, {} bullets, {} particles, {} vertex bytes in last frame",
        frame,
        state.asteroids.len(),
        state.bullets.len(),
        state.particles.len(),
        vertex_bytes
    );
    if settings.show_fps && elapsed > 0.0 {
        println!("{:.0} fps", frame as f64 / elapsed);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Polyroids (headless) starting...");

    let frames = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: polyroids [frames]");
                return ExitCode::from(2);
            }
        },
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load();

    match run(frames, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("polyroids: {}", e);
            ExitCode::FAILURE
        }
    }
}
