use serde::{Deserialize, Serialize};

/// Which half of the Pomodoro cycle the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Full countdown for this phase, in seconds.
    pub fn full_duration(&self) -> u32 {
        match self {
            Phase::Work => 25 * 60,
            Phase::Break => 5 * 60,
        }
    }

    /// The phase that follows this one.
    pub fn next(&self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    /// Display label for the timer pane.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Break => "BREAK",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    RenamingTask,
    ConfirmDelete,
    Alert,
}
