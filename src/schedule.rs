use std::time::{Duration, Instant};

/// One-shot actions the session controller defers by a few seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedAction {
    /// Auto-start the break countdown after a completed work phase.
    StartBreak,
    /// Load the current task's saved progress after a completed break.
    ReturnToWork,
}

/// Delay before a finished work phase auto-starts the break.
pub const BREAK_AUTO_START_DELAY: Duration = Duration::from_secs(3);
/// Delay before a finished break settles back into work mode.
pub const RETURN_TO_WORK_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
struct Pending {
    fire_at: Instant,
    epoch: u64,
    action: DelayedAction,
}

/// Generation-counted scheduler for the deferred actions above.
///
/// Each entry remembers the epoch it was scheduled under; any superseding
/// user action bumps the epoch, so a stale entry detects it is obsolete when
/// it comes due and is dropped instead of fired. Polling takes an explicit
/// `now` so tests can advance time without sleeping.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    epoch: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every pending action scheduled so far.
    pub fn bump_epoch(&mut self) {
        self.epoch += 1;
    }

    pub fn schedule_in(&mut self, delay: Duration, action: DelayedAction, now: Instant) {
        self.pending.push(Pending {
            fire_at: now + delay,
            epoch: self.epoch,
            action,
        });
    }

    /// Drain everything due at `now`, returning only the actions still
    /// belonging to the live epoch.
    pub fn due(&mut self, now: Instant) -> Vec<DelayedAction> {
        let epoch = self.epoch;
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if p.fire_at > now {
                return true;
            }
            if p.epoch == epoch {
                fired.push(p.action);
            }
            false
        });
        fired
    }
}
