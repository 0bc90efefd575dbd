//! DAS/ARR input handler.
//!
//! Held horizontal moves repeat after the auto-shift delay, then once per
//! repeat interval. A held soft drop repeats at its own interval with no
//! initial delay. Everything is driven by the `dt` passed to
//! [`InputHandler::update`]; the handler never reads a clock.
//!
//! Terminals often report presses only. When no press has been seen for the
//! release timeout, held keys are treated as released.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::{GameAction, ARR_INTERVAL, DAS_DELAY, SOFT_DROP_INTERVAL};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    fn action(self) -> Option<GameAction> {
        match self {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }
}

/// Repeated actions produced by one update
pub type Repeats = ArrayVec<GameAction, 32>;

/// Tracks held keys for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    /// Time since the last movement press
    idle: Duration,
    horizontal_das_timer: Duration,
    horizontal_arr_accumulator: Duration,
    down_arr_accumulator: Duration,
    das_delay: Duration,
    arr_interval: Duration,
    soft_drop_interval: Duration,
    key_release_timeout: Duration,
}

const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DAS_DELAY, ARR_INTERVAL)
    }

    pub fn with_config(das_delay: Duration, arr_interval: Duration) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            idle: Duration::ZERO,
            horizontal_das_timer: Duration::ZERO,
            horizontal_arr_accumulator: Duration::ZERO,
            down_arr_accumulator: Duration::ZERO,
            das_delay,
            arr_interval: arr_interval.max(Duration::from_millis(1)),
            soft_drop_interval: SOFT_DROP_INTERVAL,
            key_release_timeout: DEFAULT_KEY_RELEASE_TIMEOUT,
        }
    }

    pub fn with_soft_drop_interval(mut self, interval: Duration) -> Self {
        self.soft_drop_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Register a press. Returns the action to apply right away, if any.
    ///
    /// Repeated presses of an already held movement (terminal auto-repeat)
    /// only refresh the release timeout.
    pub fn press(&mut self, action: GameAction) -> Option<GameAction> {
        let direction = match action {
            GameAction::MoveLeft => HorizontalDirection::Left,
            GameAction::MoveRight => HorizontalDirection::Right,
            GameAction::SoftDrop => {
                self.idle = Duration::ZERO;
                if self.down_held {
                    return None;
                }
                self.down_held = true;
                self.down_arr_accumulator = Duration::ZERO;
                return Some(action);
            }
            _ => return Some(action),
        };

        self.idle = Duration::ZERO;
        if self.horizontal == direction {
            return None;
        }
        self.horizontal = direction;
        self.horizontal_das_timer = Duration::ZERO;
        self.horizontal_arr_accumulator = Duration::ZERO;
        Some(action)
    }

    pub fn release(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal()
            }
            GameAction::MoveRight if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal()
            }
            GameAction::SoftDrop => self.release_down(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_das_timer = Duration::ZERO;
        self.horizontal_arr_accumulator = Duration::ZERO;
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_arr_accumulator = Duration::ZERO;
    }

    /// Advance by `dt` and collect the repeats that came due.
    pub fn update(&mut self, dt: Duration) -> Repeats {
        let mut actions = Repeats::new();

        self.idle += dt;
        if self.idle > self.key_release_timeout {
            self.release_horizontal();
            self.release_down();
        }

        if let Some(action) = self.horizontal.action() {
            let prev_das = self.horizontal_das_timer;
            self.horizontal_das_timer += dt;

            if self.horizontal_das_timer >= self.das_delay {
                // Only the part of dt past the delay counts towards repeats.
                let excess = if prev_das < self.das_delay {
                    self.horizontal_das_timer - self.das_delay
                } else {
                    dt
                };
                self.horizontal_arr_accumulator += excess;

                while self.horizontal_arr_accumulator >= self.arr_interval {
                    let _ = actions.try_push(action);
                    self.horizontal_arr_accumulator -= self.arr_interval;
                }
            }
        }

        if self.down_held {
            self.down_arr_accumulator += dt;
            while self.down_arr_accumulator >= self.soft_drop_interval {
                let _ = actions.try_push(GameAction::SoftDrop);
                self.down_arr_accumulator -= self.soft_drop_interval;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.release_down();
        self.idle = Duration::ZERO;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
