use log::Level;

/// Page version served at `/`.
pub const DEFAULT_VERSION: &str = "classic";

/// Fraction of a revealed block that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Counters wait until at least half of the number is on screen.
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Distance from the document bottom (in px) that still counts as "at the bottom".
pub const BOTTOM_TOLERANCE_PX: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
