use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the controller produces an Event.
/// The host renders snapshots and turns alerts into sound or a flash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    StateSnapshot {
        mode: Mode,
        remaining_secs: u32,
        running: bool,
        today_count: u32,
        at: DateTime<Utc>,
    },
    /// An interval ran down to zero.
    Alert {
        finished: Mode,
        today_count: u32,
        /// Sound to play; `"default"` for the host's own, `None` when
        /// notifications are off.
        sound: Option<String>,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_alert(&self) -> bool {
        matches!(self, Event::Alert { .. })
    }
}

/// Receiver for outbound events, implemented by the presentation layer.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Buffers events for hosts that poll.
impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<F> EventSink for F
where
    F: FnMut(Event),
{
    fn emit(&mut self, event: Event) {
        self(event)
    }
}
