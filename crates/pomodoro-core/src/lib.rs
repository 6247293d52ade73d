//! # Pomodoro Manager Core Library
//!
//! This library provides the business logic for the Pomodoro Manager desktop
//! timer. The window, buttons and sound playback live in a host application;
//! this crate owns the countdown and the daily completion count.
//!
//! ## Architecture
//!
//! - **Session Timer**: A tick-driven state machine alternating between a
//!   25-minute work interval and a 5-minute rest interval. It has no clock
//!   thread; the caller invokes `tick()` once per second.
//! - **Completion Ledger**: Per-day count of finished work intervals,
//!   persisted as JSON and replaced atomically on every save.
//! - **Controller**: Serializes commands and ticks, updates the ledger when a
//!   work interval finishes and pushes [`Event`]s to the host.
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: Countdown state machine
//! - [`CompletionLedger`]: Daily completion counts
//! - [`TimerController`]: Orchestration and event emission
//! - [`Config`]: TOML configuration (ledger location, alert sound)

pub mod controller;
pub mod date;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use controller::{ControllerSnapshot, TimerController};
pub use date::DateKey;
pub use error::{ConfigError, CoreError, LedgerError, ValidationError};
pub use events::{Event, EventSink};
pub use storage::{CompletionLedger, Config};
pub use timer::{Mode, SessionTimer, Tick, TimerSnapshot};
