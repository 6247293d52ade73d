mod engine;
mod mode;

pub use engine::{SessionTimer, Tick, TimerSnapshot};
pub use mode::Mode;
