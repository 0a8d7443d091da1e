use crate::domain::{Phase, Task};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Date stamp format for the daily counter (local time zone, date only).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// On-disk state document. The keys mirror the key-value store names the
/// app has always used, so the file reads as a small keyed store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(rename = "PomodoroTasks")]
    pub tasks: Vec<Task>,
    #[serde(rename = "CurrentTaskId")]
    pub current_task_id: Option<Uuid>,
    #[serde(rename = "DailyPomodoroCount")]
    pub daily_count: u32,
    #[serde(rename = "LastPomodoroDate")]
    pub last_date: String,
}

impl SavedState {
    pub fn parsed_last_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_date, DATE_FORMAT).ok()
    }
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode state file: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of loading persisted state: either real data came back, or the
/// caller should start from seeded defaults. Corrupt or absent files are
/// never an error the user sees.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(SavedState),
    Seeded,
}

/// Load saved state from `path`.
///
/// A missing file is the normal first-run case; an undecodable file degrades
/// the same way, with the decode error reported to the caller for logging.
pub fn load_state<P: AsRef<Path>>(path: P) -> (LoadOutcome, Option<StateError>) {
    let path = path.as_ref();
    if !path.exists() {
        return (LoadOutcome::Seeded, None);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return (LoadOutcome::Seeded, Some(StateError::Io(e))),
    };

    match serde_json::from_str::<SavedState>(&content) {
        Ok(mut state) => {
            // Out-of-range saved countdowns are clamped rather than rejected.
            for task in &mut state.tasks {
                task.saved_time_remaining = task
                    .saved_time_remaining
                    .min(Phase::Work.full_duration());
            }
            (LoadOutcome::Loaded(state), None)
        }
        Err(e) => (LoadOutcome::Seeded, Some(StateError::Decode(e))),
    }
}

/// Save state to `path` atomically.
pub fn save_state<P: AsRef<Path>>(path: P, state: &SavedState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
