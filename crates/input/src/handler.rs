//! Edge/hold tracking on top of the key map.
//!
//! Moves fire on every press or auto-repeat. Rotation fires once per physical
//! press and stays latched while the key is held. Soft drop is a held
//! modifier that stays on while any of its keys is down. Terminals that never
//! report key releases are handled with a timeout measured from the last
//! press/repeat of each key.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{map_key, Control};
use crate::types::{Action, KEY_RELEASE_TIMEOUT_MS};

/// Distinct soft-drop keys that can be held at once.
const MAX_HELD_KEYS: usize = 8;

/// Tracks held keys and turns key events into engine actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    rotate_latched: bool,
    last_rotate_time: Instant,
    /// Held soft-drop keys with the time of their last press/repeat.
    soft_drop_keys: ArrayVec<(KeyCode, Instant), MAX_HELD_KEYS>,
    quit: bool,
    release_events: bool,
    key_release_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            rotate_latched: false,
            last_rotate_time: Instant::now(),
            soft_drop_keys: ArrayVec::new(),
            quit: false,
            release_events: false,
            key_release_timeout: Duration::from_millis(KEY_RELEASE_TIMEOUT_MS as u64),
        }
    }

    /// Whether the terminal reports key releases. When it does, held keys
    /// are only released by their release event and never time out.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Feed one key event; returns the action to queue, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        let control = map_key(key)?;
        let now = Instant::now();

        match (control, key.kind) {
            (Control::Quit, KeyEventKind::Release) => None,
            (Control::Quit, _) => {
                self.quit = true;
                None
            }

            (Control::Act(action @ (Action::RotateCw | Action::RotateCcw)), kind) => match kind {
                KeyEventKind::Release => {
                    self.rotate_latched = false;
                    None
                }
                // A repeat is the same physical press.
                KeyEventKind::Repeat => {
                    self.last_rotate_time = now;
                    None
                }
                KeyEventKind::Press => {
                    self.expire_rotate_latch(now);
                    self.last_rotate_time = now;
                    if self.rotate_latched {
                        None
                    } else {
                        self.rotate_latched = true;
                        Some(action)
                    }
                }
            },
            (Control::Act(_), KeyEventKind::Release) => None,
            (Control::Act(action), _) => Some(action),

            (Control::SoftDrop, KeyEventKind::Release) => {
                let code = normalize(key.code);
                self.soft_drop_keys.retain(|(held, _)| *held != code);
                None
            }
            (Control::SoftDrop, _) => {
                let code = normalize(key.code);
                match self.soft_drop_keys.iter_mut().find(|(held, _)| *held == code) {
                    Some(entry) => entry.1 = now,
                    None => {
                        let _ = self.soft_drop_keys.try_push((code, now));
                    }
                }
                None
            }
        }
    }

    /// Release held keys whose timeout has passed. Call once per frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.expire_rotate_latch(now);
        if !self.release_events {
            let timeout = self.key_release_timeout;
            self.soft_drop_keys
                .retain(|(_, last)| now.saturating_duration_since(*last) <= timeout);
        }
    }

    fn expire_rotate_latch(&mut self, now: Instant) {
        if !self.release_events
            && self.rotate_latched
            && now.saturating_duration_since(self.last_rotate_time) > self.key_release_timeout
        {
            self.rotate_latched = false;
        }
    }

    /// True while any soft-drop key is held.
    pub fn soft_drop(&self) -> bool {
        !self.soft_drop_keys.is_empty()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Shifted letters are the same physical key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
