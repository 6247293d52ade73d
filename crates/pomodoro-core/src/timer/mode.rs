use serde::{Deserialize, Serialize};

/// The two interval kinds a session alternates between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Work,
    Rest,
}

impl Mode {
    /// Work interval length: 25 minutes.
    pub const WORK_SECS: u32 = 25 * 60;
    /// Rest interval length: 5 minutes.
    pub const REST_SECS: u32 = 5 * 60;

    /// Full length of an interval in this mode, in seconds.
    pub fn duration_secs(self) -> u32 {
        match self {
            Mode::Work => Self::WORK_SECS,
            Mode::Rest => Self::REST_SECS,
        }
    }

    /// Human-facing name shown next to the clock.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Pomodoro",
            Mode::Rest => "Rest",
        }
    }
}
