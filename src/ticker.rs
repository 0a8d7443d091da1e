use std::time::Duration;

/// Default event-poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Event-loop gap beyond which the machine is assumed to have been asleep.
/// Normal iterations are a few hundred milliseconds apart.
pub const SUSPEND_GAP_SECS: u64 = 30;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Threshold for treating a loop gap as a sleep/wake cycle
pub fn suspend_gap_threshold() -> Duration {
    Duration::from_secs(SUSPEND_GAP_SECS)
}
