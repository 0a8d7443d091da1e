use crate::domain::Phase;

/// Countdown state machine for the work/break cycle.
///
/// The engine knows nothing about tasks or persistence; it counts seconds,
/// flips phases when a countdown hits zero, and reports which phase just
/// finished so the session controller can react.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    phase: Phase,
    time_remaining: u32,
    is_running: bool,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            time_remaining: Phase::Work.full_duration(),
            is_running: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Fraction of the current phase already elapsed, for the progress gauge.
    pub fn progress_ratio(&self) -> f64 {
        let full = self.phase.full_duration() as f64;
        if full == 0.0 {
            return 1.0;
        }
        1.0 - (self.time_remaining as f64 / full)
    }

    /// Begin counting down. No-op if already running.
    pub fn start(&mut self) {
        self.is_running = true;
    }

    /// Stop counting down. Idempotent.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Pause and restore the full work countdown, whatever phase we were in.
    pub fn reset(&mut self) {
        self.pause();
        self.phase = Phase::Work;
        self.time_remaining = Phase::Work.full_duration();
    }

    /// Load a saved countdown, clamped to the phase's full duration.
    pub fn load(&mut self, phase: Phase, seconds: u32) {
        self.phase = phase;
        self.time_remaining = seconds.min(phase.full_duration());
    }

    /// Advance the countdown by one second.
    ///
    /// When the countdown reaches zero the engine pauses itself, flips to the
    /// next phase with its full duration loaded, and returns the phase that
    /// just completed. Returns `None` while paused or mid-countdown.
    pub fn tick(&mut self) -> Option<Phase> {
        if !self.is_running {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return None;
        }

        let finished = self.phase;
        self.pause();
        self.phase = finished.next();
        self.time_remaining = self.phase.full_duration();
        Some(finished)
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_engine_is_paused_work() {
        let engine = TimerEngine::new();
        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_remaining(), 25 * 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut engine = TimerEngine::new();
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.time_remaining(), 25 * 60);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut engine = TimerEngine::new();
        engine.start();
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.time_remaining(), 25 * 60 - 1);
    }

    #[test]
    fn test_full_work_phase_flips_to_break() {
        let mut engine = TimerEngine::new();
        engine.start();

        let mut completed = None;
        for _ in 0..(25 * 60) {
            if let Some(phase) = engine.tick() {
                completed = Some(phase);
            }
        }

        assert_eq!(completed, Some(Phase::Work));
        assert_eq!(engine.phase(), Phase::Break);
        assert_eq!(engine.time_remaining(), 5 * 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_full_break_phase_flips_to_work() {
        let mut engine = TimerEngine::new();
        engine.load(Phase::Break, 5 * 60);
        engine.start();

        let mut completed = None;
        for _ in 0..(5 * 60) {
            if let Some(phase) = engine.tick() {
                completed = Some(phase);
            }
        }

        assert_eq!(completed, Some(Phase::Break));
        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_remaining(), 25 * 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_time_remaining_never_negative_after_tick() {
        let mut engine = TimerEngine::new();
        engine.load(Phase::Work, 3);
        engine.start();

        for _ in 0..10 {
            engine.tick();
            // The countdown reloads on phase completion; it never reads zero
            // while running and never goes negative.
            assert!(engine.time_remaining() > 0 || !engine.is_running());
        }
    }

    #[test]
    fn test_reset_returns_to_work_from_break() {
        let mut engine = TimerEngine::new();
        engine.load(Phase::Break, 120);
        engine.start();
        engine.reset();

        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_remaining(), 25 * 60);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_load_clamps_to_phase_duration() {
        let mut engine = TimerEngine::new();
        engine.load(Phase::Break, 9999);
        assert_eq!(engine.time_remaining(), 5 * 60);
    }

    #[test]
    fn test_progress_ratio() {
        let mut engine = TimerEngine::new();
        assert_eq!(engine.progress_ratio(), 0.0);

        engine.load(Phase::Work, 25 * 60 / 2);
        assert!((engine.progress_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
