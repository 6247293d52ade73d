//! Session timer implementation.
//!
//! The timer is a tick-driven countdown. It does not use internal threads or
//! read the clock; the caller is responsible for calling `tick()` once per
//! second.
//!
//! ## State Transitions
//!
//! ```text
//! Paused(n>0) --toggle_run--> Running(n>0) --tick--> Running(n-1)
//! Running(1)  --tick--> Paused(0)          [completion]
//! Paused(0)   --reset | switch_mode--> Paused(full)
//! ```
//!
//! `Paused(0)` is only left through `reset()` or `switch_mode()`; resuming a
//! timer at zero is rejected.
//!
//! ## Usage
//!
//! ```
//! use pomodoro_core::{Mode, SessionTimer, Tick};
//!
//! let mut timer = SessionTimer::new();
//! timer.toggle_run();
//! assert_eq!(timer.tick(), Tick::Counted);
//! assert_eq!(timer.snapshot().remaining_secs, Mode::Work.duration_secs() - 1);
//! ```

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// What a single `tick()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Paused or already at zero; nothing changed.
    Idle,
    /// One second was counted off.
    Counted,
    /// The interval in the given mode just reached zero.
    Finished(Mode),
}

/// Immutable view of the timer for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub remaining_secs: u32,
    pub running: bool,
}

impl TimerSnapshot {
    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Window title text, e.g. `24:59 - Pomodoro`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.clock(), self.mode.label())
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_secs() as f64;
        (1.0 - self.remaining_secs as f64 / total).clamp(0.0, 1.0)
    }
}

/// Countdown engine for one work/rest interval at a time.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    mode: Mode,
    remaining_secs: u32,
    running: bool,
}

impl SessionTimer {
    /// A paused work interval at full length.
    pub fn new() -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: Mode::Work.duration_secs(),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the interval has run down and awaits reset or mode switch.
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            running: self.running,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Count off one second. Auto-pauses when the interval reaches zero.
    pub fn tick(&mut self) -> Tick {
        if !self.running || self.remaining_secs == 0 {
            return Tick::Idle;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return Tick::Finished(self.mode);
        }
        Tick::Counted
    }

    /// Start or pause. Returns false (and changes nothing) at zero.
    pub fn toggle_run(&mut self) -> bool {
        if self.remaining_secs == 0 {
            return false;
        }
        self.running = !self.running;
        true
    }

    /// Pause and refill the current mode's interval.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.mode.duration_secs();
    }

    /// Pause and load a full interval of `mode`, even if already active.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}
