use crate::domain::Phase;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined work item tracked by the timer.
///
/// Serialized field names match the on-disk record format (see
/// `persistence::state`), so this struct doubles as the wire type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, assigned at creation, never changed.
    pub id: Uuid,
    /// Display name, user-editable.
    pub name: String,
    /// Pomodoros finished while this task was current.
    #[serde(rename = "completedPomodoros")]
    pub completed_pomodoros: u32,
    /// Completed tasks stay in the list (struck through) but leave the
    /// active rotation.
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    /// Seconds left on the work countdown when this task was last paused or
    /// switched away from.
    #[serde(rename = "savedTimeRemaining")]
    pub saved_time_remaining: u32,
    /// Whether the timer was running when progress was last saved. Only used
    /// to decide whether to show the paused-with-progress indicator.
    #[serde(rename = "isTimerActive")]
    pub saved_timer_active: bool,
}

impl Task {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            completed_pomodoros: 0,
            is_completed: false,
            saved_time_remaining: Phase::Work.full_duration(),
            saved_timer_active: false,
        }
    }

    /// Record the live countdown for later resumption.
    pub fn save_progress(&mut self, seconds_remaining: u32, was_running: bool) {
        self.saved_time_remaining = seconds_remaining.min(Phase::Work.full_duration());
        self.saved_timer_active = was_running;
    }

    /// Forget saved progress, back to a fresh work countdown.
    pub fn reset_progress(&mut self) {
        self.saved_time_remaining = Phase::Work.full_duration();
        self.saved_timer_active = false;
    }

    /// A task shows the paused indicator when it holds a partially elapsed
    /// countdown from an earlier session.
    pub fn has_saved_progress(&self) -> bool {
        self.saved_time_remaining < Phase::Work.full_duration()
    }

    /// Active tasks are the ones eligible to become current.
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }
}
