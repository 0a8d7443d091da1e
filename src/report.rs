use crate::persistence::{load_state, state_file, LoadOutcome, SavedState};
use anyhow::Result;
use chrono::Local;

/// Summary statistics across the whole task list
#[derive(Debug, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_tasks: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub total_pomodoros: u32,
    pub today_pomodoros: u32,
    pub in_progress_count: usize,
    /// Per-task pomodoro totals, busiest first, zero-count tasks omitted
    pub per_task: Vec<(String, u32)>,
}

/// Calculate summary statistics from saved state
pub fn calculate_summary(state: &SavedState) -> StatsSummary {
    let total_tasks = state.tasks.len();
    let completed_count = state.tasks.iter().filter(|t| t.is_completed).count();
    let active_count = total_tasks - completed_count;
    let total_pomodoros = state.tasks.iter().map(|t| t.completed_pomodoros).sum();
    let in_progress_count = state
        .tasks
        .iter()
        .filter(|t| !t.is_completed && t.has_saved_progress())
        .count();

    let mut per_task: Vec<(String, u32)> = state
        .tasks
        .iter()
        .filter(|t| t.completed_pomodoros > 0)
        .map(|t| (t.name.clone(), t.completed_pomodoros))
        .collect();
    per_task.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    // The daily count only stands if its date stamp is today.
    let today = Local::now().date_naive();
    let today_pomodoros = match state.parsed_last_date() {
        Some(date) if date == today => state.daily_count,
        _ => 0,
    };

    StatsSummary {
        total_tasks,
        active_count,
        completed_count,
        total_pomodoros,
        today_pomodoros,
        in_progress_count,
        per_task,
    }
}

/// Render the summary as text for the terminal
pub fn render_summary(summary: &StatsSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Tomate - {}\n\n", Local::now().date_naive()));
    out.push_str(&format!("Today: {} \u{1F345}\n\n", summary.today_pomodoros));
    out.push_str(&format!(
        "Tasks: {} (active: {}, done: {})\n",
        summary.total_tasks, summary.active_count, summary.completed_count
    ));
    out.push_str(&format!("Pomodoros all time: {}\n", summary.total_pomodoros));
    if summary.in_progress_count > 0 {
        out.push_str(&format!(
            "Paused mid-pomodoro: {}\n",
            summary.in_progress_count
        ));
    }
    if !summary.per_task.is_empty() {
        out.push('\n');
        for (name, count) in &summary.per_task {
            out.push_str(&format!("  {} \u{1F345}  {}\n", count, name));
        }
    }

    out
}

/// Load saved state and print the stats summary
pub fn print_stats() -> Result<()> {
    let (outcome, _) = load_state(state_file()?);
    let state = match outcome {
        LoadOutcome::Loaded(state) => state,
        LoadOutcome::Seeded => {
            println!("No saved state yet. Run 'tomate' to start tracking.");
            return Ok(());
        }
    };

    print!("{}", render_summary(&calculate_summary(&state)));
    Ok(())
}
