//! Platform abstraction layer
//!
//! Handles the host side of the frame loop:
//! - Frame timing
//! - Key name decoding
//! - Hold durations for key events

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub use crate::sim::{Key, KeyEventKind};

/// Frame timer
#[derive(Debug, Default)]
pub struct Clock {
    last: Option<Instant>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call; 0 on the first call
    pub fn time_since_last_tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`Clock::time_since_last_tick`] with an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt
    }
}

/// Map a key name (DOM `KeyboardEvent.key` style) to a game key
pub fn decode_key(name: &str) -> Option<Key> {
    match name {
        "ArrowLeft" | "Left" => Some(Key::Left),
        "ArrowUp" | "Up" => Some(Key::Up),
        "ArrowRight" | "Right" => Some(Key::Right),
        "ArrowDown" | "Down" => Some(Key::Down),
        "Enter" | "Return" => Some(Key::Enter),
        "Space" | "Spacebar" => Some(Key::SPACE),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() && !c.is_ascii_control() => Some(Key::Char(c)),
                _ => None,
            }
        }
    }
}

/// A decoded key event ready for `GameState::handle_key`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: KeyEventKind,
    /// Seconds since the key went down
    pub held_time: f32,
}

/// Tracks when each key went down so events carry a hold duration
#[derive(Debug, Default)]
pub struct KeyTracker {
    down_since: HashMap<Key, Instant>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down. A non-repeat press restarts the hold timer; auto-repeat
    /// keeps counting from the original press.
    pub fn press(&mut self, key: Key, repeat: bool, now: Instant) -> KeyEvent {
        let since = if repeat {
            *self.down_since.entry(key).or_insert(now)
        } else {
            self.down_since.insert(key, now);
            now
        };
        KeyEvent {
            key,
            kind: KeyEventKind::Pressed,
            held_time: held(since, now),
        }
    }

    /// Key up; reports the full hold duration
    pub fn release(&mut self, key: Key, now: Instant) -> KeyEvent {
        let since = self.down_since.remove(&key).unwrap_or(now);
        KeyEvent {
            key,
            kind: KeyEventKind::Released,
            held_time: held(since, now),
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down_since.contains_key(&key)
    }
}

fn held(since: Instant, now: Instant) -> f32 {
    now.checked_duration_since(since)
        .unwrap_or(Duration::ZERO)
        .as_secs_f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_first_tick_is_zero() {
        let start = Instant::now();
        let mut clock = Clock::new();
        assert_eq!(clock.tick_at(start), 0.0);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        // Non-monotonic timestamps clamp to zero
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn test_decode_key() {
        assert_eq!(decode_key("ArrowUp"), Some(Key::Up));
        assert_eq!(decode_key("Enter"), Some(Key::Enter));
        assert_eq!(decode_key(" "), Some(Key::SPACE));
        assert_eq!(decode_key("q"), Some(Key::Char('q')));
        assert_eq!(decode_key("Shift"), None);
        assert_eq!(decode_key("é"), None);
    }

    #[test]
    fn test_held_time() {
        let t0 = Instant::now();
        let mut keys = KeyTracker::new();

        let first = keys.press(Key::Up, false, t0);
        assert_eq!(first.held_time, 0.0);

        let rep = keys.press(Key::Up, true, t0 + Duration::from_millis(250));
        assert!((rep.held_time - 0.25).abs() < 1e-6);
        assert!(keys.is_down(Key::Up));

        let up = keys.release(Key::Up, t0 + Duration::from_millis(500));
        assert_eq!(up.kind, KeyEventKind::Released);
        assert!((up.held_time - 0.5).abs() < 1e-6);
        assert!(!keys.is_down(Key::Up));
    }

    #[test]
    fn test_fresh_press_restarts_timer() {
        let t0 = Instant::now();
        let mut keys = KeyTracker::new();
        keys.press(Key::SPACE, false, t0);
        let again = keys.press(Key::SPACE, false, t0 + Duration::from_secs(1));
        assert_eq!(again.held_time, 0.0);
    }
}
