//! Input latch board
//!
//! Key events from the platform layer set and clear these flags; the update
//! pipeline reads them once per frame and clears the one-shot ones.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameStatus};

/// Decoded key vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Enter,
    /// Printable ASCII (space included)
    Char(char),
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');
}

/// Press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEventKind {
    Pressed,
    Released,
}

/// Currently latched controls plus the game status they are interpreted under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub status: GameStatus,
    pub quitting: bool,
    pub restarting: bool,
    pub thrusting: bool,
    pub turning_clockwise: bool,
    pub turning_counterclockwise: bool,
    pub shooting: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            status: GameStatus::Playing,
            quitting: false,
            restarting: false,
            thrusting: false,
            turning_clockwise: false,
            turning_counterclockwise: false,
            shooting: false,
        }
    }
}

impl InputState {
    /// Apply one key event
    ///
    /// `held_time` is seconds since the key went down; fire, thrust-on and
    /// restart only register on the initial press (`held_time == 0`), never on
    /// auto-repeat. Returns the sound cue the event triggers, if any.
    pub fn on_key(&mut self, key: Key, kind: KeyEventKind, held_time: f32) -> Option<GameEvent> {
        let initial_press = kind == KeyEventKind::Pressed && held_time == 0.0;

        match self.status {
            GameStatus::Start => None,

            GameStatus::Playing => match key {
                Key::Up => {
                    if initial_press {
                        self.thrusting = true;
                        Some(GameEvent::ThrustStarted)
                    } else if kind == KeyEventKind::Released {
                        self.thrusting = false;
                        Some(GameEvent::ThrustStopped)
                    } else {
                        None
                    }
                }
                Key::Left => {
                    self.turning_counterclockwise = kind == KeyEventKind::Pressed;
                    None
                }
                Key::Right => {
                    self.turning_clockwise = kind == KeyEventKind::Pressed;
                    None
                }
                Key::Char(' ') => {
                    if initial_press {
                        self.shooting = true;
                    }
                    None
                }
                _ => None,
            },

            GameStatus::Over => {
                if key == Key::Enter && initial_press {
                    self.restarting = true;
                }
                None
            }
        }
    }

    /// Latch the quit signal (window closed)
    pub fn request_quit(&mut self) {
        self.quitting = true;
    }
}
