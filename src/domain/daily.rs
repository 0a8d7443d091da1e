use chrono::{Local, NaiveDate};

/// Calendar-day-scoped pomodoro counter.
///
/// The count survives restarts only within the same local calendar day;
/// loading (or incrementing) on a later date starts from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCounter {
    count: u32,
    last_date: NaiveDate,
}

impl DailyCounter {
    pub fn new() -> Self {
        Self {
            count: 0,
            last_date: Local::now().date_naive(),
        }
    }

    /// Restore a persisted count, discarding it when the stored date is not
    /// `today`.
    pub fn restore(count: u32, last_date: NaiveDate, today: NaiveDate) -> Self {
        if last_date == today {
            Self { count, last_date }
        } else {
            Self {
                count: 0,
                last_date: today,
            }
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    /// Count one completed work phase. A session left running across
    /// midnight rolls over to a fresh count first.
    pub fn increment(&mut self) {
        self.rollover(Local::now().date_naive());
        self.count += 1;
    }

    fn rollover(&mut self, today: NaiveDate) {
        if self.last_date != today {
            self.count = 0;
            self.last_date = today;
        }
    }
}

impl Default for DailyCounter {
    fn default() -> Self {
        Self::new()
    }
}
