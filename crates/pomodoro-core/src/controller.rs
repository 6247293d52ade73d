//! Orchestration of the session timer and the completion ledger.
//!
//! The controller owns no clock thread. The host calls [`TimerController::on_tick`]
//! once per second and forwards button presses to the command methods, all from
//! one thread. Every mutation is followed by a [`Event::StateSnapshot`]; every
//! interval that runs down to zero produces exactly one [`Event::Alert`].
//!
//! Ledger failures are logged and swallowed: the countdown keeps working and
//! the count stays correct in memory for the rest of the run.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::date::DateKey;
use crate::events::{Event, EventSink};
use crate::storage::{CompletionLedger, Config, LEDGER_FILE};
use crate::timer::{Mode, SessionTimer, Tick, TimerSnapshot};

/// What the host needs to draw the timer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot {
    pub timer: TimerSnapshot,
    pub today_count: u32,
}

pub struct TimerController<S: EventSink> {
    timer: SessionTimer,
    ledger: CompletionLedger,
    ledger_path: PathBuf,
    today: DateKey,
    alert_sound: Option<String>,
    sink: S,
}

impl<S: EventSink> TimerController<S> {
    /// Build a controller from user configuration for the current local day.
    ///
    /// Falls back to `ledger.json` in the working directory if the data
    /// directory cannot be created.
    pub fn open(config: &Config, sink: S) -> Self {
        let ledger_path = config.ledger_path().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to ledger in working directory");
            PathBuf::from(LEDGER_FILE)
        });
        let mut controller = Self::build(ledger_path, DateKey::today(), sink);
        controller.alert_sound = config.alert_sound();
        controller.emit_snapshot();
        controller
    }

    /// Build a controller with an explicit ledger location and day.
    /// Alerts carry the host's default sound.
    pub fn with_ledger_path(ledger_path: impl Into<PathBuf>, today: DateKey, sink: S) -> Self {
        let mut controller = Self::build(ledger_path.into(), today, sink);
        controller.emit_snapshot();
        controller
    }

    fn build(ledger_path: PathBuf, today: DateKey, sink: S) -> Self {
        let ledger = CompletionLedger::load(&ledger_path, today);
        debug!(
            path = %ledger_path.display(),
            today = %today,
            count = ledger.count_for(today),
            "ledger loaded"
        );
        Self {
            timer: SessionTimer::new(),
            ledger,
            ledger_path,
            today,
            alert_sound: Some("default".to_string()),
            sink,
        }
    }

    /// Replace the sound attached to alerts; `None` makes them silent.
    pub fn set_alert_sound(&mut self, sound: Option<String>) {
        self.alert_sound = sound;
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            timer: self.timer.snapshot(),
            today_count: self.ledger.count_for(self.today),
        }
    }

    pub fn today(&self) -> DateKey {
        self.today
    }

    pub fn ledger(&self) -> &CompletionLedger {
        &self.ledger
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance the countdown by one second.
    pub fn on_tick(&mut self) {
        match self.timer.tick() {
            Tick::Idle => {}
            Tick::Counted => self.emit_snapshot(),
            Tick::Finished(mode) => {
                if mode == Mode::Work {
                    self.record_work_completion();
                }
                self.sink.emit(Event::Alert {
                    finished: mode,
                    today_count: self.ledger.count_for(self.today),
                    sound: self.alert_sound.clone(),
                    at: Utc::now(),
                });
                self.emit_snapshot();
            }
        }
    }

    pub fn toggle_run(&mut self) {
        if !self.timer.toggle_run() {
            debug!("ignored start: interval already finished");
        }
        self.emit_snapshot();
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.emit_snapshot();
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.timer.switch_mode(mode);
        self.emit_snapshot();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn record_work_completion(&mut self) {
        let count = self.ledger.record_completion(self.today);
        info!(today = %self.today, count, "work interval completed");
        if let Err(e) = self.ledger.save(&self.ledger_path) {
            warn!(error = %e, "could not persist ledger; count kept in memory only");
        }
    }

    fn emit_snapshot(&mut self) {
        let snap = self.snapshot();
        self.sink.emit(Event::StateSnapshot {
            mode: snap.timer.mode,
            remaining_secs: snap.timer.remaining_secs,
            running: snap.timer.running,
            today_count: snap.today_count,
            at: Utc::now(),
        });
    }
}
