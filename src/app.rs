use crate::domain::{DailyCounter, Phase, Task, TaskStore, UiMode};
use crate::engine::TimerEngine;
use crate::notifications;
use crate::persistence::{LoadOutcome, SavedState, DATE_FORMAT};
use crate::schedule::{
    DelayedAction, Scheduler, BREAK_AUTO_START_DELAY, RETURN_TO_WORK_DELAY,
};
use anyhow::Result;
use chrono::Local;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// What the text-entry modal is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    NewTask,
    Rename(Uuid),
}

/// Input form state for the add/rename modal
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub buffer: String,
    pub target: InputTarget,
}

/// Main application state: the session controller gluing the timer engine,
/// the task store and the daily counter together.
///
/// The current task is held as an id and re-resolved against the store on
/// every mutation; no code path works from a cached `Task` copy.
pub struct AppState {
    pub store: TaskStore,
    pub engine: TimerEngine,
    pub scheduler: Scheduler,
    pub current_task_id: Option<Uuid>,
    pub daily: DailyCounter,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub pending_delete: Option<Uuid>,
    pub alert: Option<String>,
    pub needs_save: bool,
    /// Seconds the machine appears to have been asleep, for display only.
    pub last_suspend_secs: Option<u64>,
}

impl AppState {
    /// Build the session from a load outcome. Seeded state gets the three
    /// default tasks; loaded state re-validates the saved current task and
    /// the daily counter's date stamp.
    pub fn new(outcome: LoadOutcome) -> Self {
        let today = Local::now().date_naive();
        let (store, saved_current, daily) = match outcome {
            LoadOutcome::Loaded(state) => {
                let daily = match state.parsed_last_date() {
                    Some(date) => DailyCounter::restore(state.daily_count, date, today),
                    None => DailyCounter::new(),
                };
                let store = if state.tasks.is_empty() {
                    TaskStore::seeded()
                } else {
                    TaskStore::new(state.tasks)
                };
                (store, state.current_task_id, daily)
            }
            LoadOutcome::Seeded => (TaskStore::seeded(), None, DailyCounter::new()),
        };

        let mut app = Self {
            store,
            engine: TimerEngine::new(),
            scheduler: Scheduler::new(),
            current_task_id: None,
            daily,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            pending_delete: None,
            alert: None,
            needs_save: false,
            last_suspend_secs: None,
        };

        // A saved current task must still exist and be active; otherwise fall
        // back to the first active task, or none.
        let current = saved_current
            .and_then(|id| app.store.get(id))
            .filter(|t| t.is_active())
            .or_else(|| app.store.first_active())
            .map(|t| t.id);
        if let Some(id) = current {
            app.current_task_id = Some(id);
            if let Some(task) = app.store.get(id) {
                app.engine.load(Phase::Work, task.saved_time_remaining);
            }
        }

        app
    }

    /// Resolve the current task against the store. Never cache the result
    /// across mutations.
    pub fn current_task(&self) -> Option<&Task> {
        self.current_task_id.and_then(|id| self.store.get(id))
    }

    /// Tasks in display order for the task pane.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.sorted(self.current_task_id, self.engine.phase())
    }

    /// Id of the task under the selection cursor.
    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    // --- timer controls ---

    /// Start the countdown. In work mode a current task is required; without
    /// one the start is rejected and an alert is raised.
    pub fn start_timer(&mut self, _now: Instant) {
        if self.engine.is_running() {
            return;
        }
        if self.engine.phase() == Phase::Work && self.current_task().is_none() {
            self.raise_alert("Select a task first - the work timer needs something to track.");
            return;
        }
        self.scheduler.bump_epoch();
        self.engine.start();
        notifications::play_start_beep();
    }

    /// Pause the countdown, saving the current task's live progress.
    pub fn pause_timer(&mut self, _now: Instant) {
        if !self.engine.is_running() {
            return;
        }
        self.save_live_progress();
        self.scheduler.bump_epoch();
        self.engine.pause();
        self.needs_save = true;
    }

    pub fn toggle_run_pause(&mut self, now: Instant) {
        if self.engine.is_running() {
            self.pause_timer(now);
        } else {
            self.start_timer(now);
        }
    }

    /// Reset to a fresh work countdown, cancelling anything scheduled.
    pub fn reset_timer(&mut self, _now: Instant) {
        self.scheduler.bump_epoch();
        self.engine.reset();
    }

    /// Snapshot the live countdown into the current task's saved progress.
    /// `was_running` records the engine state at the moment of the save.
    fn save_live_progress(&mut self) {
        let remaining = self.engine.time_remaining();
        let was_running = self.engine.is_running();
        if self.engine.phase() != Phase::Work {
            return;
        }
        if let Some(id) = self.current_task_id {
            if let Some(task) = self.store.get_mut(id) {
                task.save_progress(remaining, was_running);
            }
        }
    }

    // --- task operations ---

    /// Make the selected task current, saving the outgoing task's progress
    /// and loading the incoming one's. Disallowed during a break.
    pub fn select_current(&mut self, _now: Instant) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.engine.phase() == Phase::Break {
            self.raise_alert("Finish the break first - tasks switch in work mode.");
            return;
        }
        if Some(id) == self.current_task_id {
            return;
        }
        match self.store.get(id) {
            Some(task) if task.is_active() => {}
            _ => return,
        }

        self.save_live_progress();
        self.scheduler.bump_epoch();
        self.engine.pause();

        self.current_task_id = Some(id);
        let saved = self
            .store
            .get(id)
            .map(|t| t.saved_time_remaining)
            .unwrap_or_else(|| Phase::Work.full_duration());
        self.engine.load(Phase::Work, saved);
        self.clamp_selection();
        self.needs_save = true;
    }

    /// Start adding a new task (opens the input modal)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            buffer: String::new(),
            target: InputTarget::NewTask,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start renaming the selected task (opens the input modal pre-filled)
    pub fn start_rename_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let name = match self.store.get(id) {
            Some(task) => task.name.clone(),
            None => return,
        };
        self.input_form = Some(InputFormState {
            buffer: name,
            target: InputTarget::Rename(id),
        });
        self.ui_mode = UiMode::RenamingTask;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.buffer.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.buffer.pop();
        }
    }

    /// Submit the input modal. Blank names fall through as a silent no-op.
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            let changed = match form.target {
                InputTarget::NewTask => self.store.add(&form.buffer).is_some(),
                InputTarget::Rename(id) => self.store.rename(id, &form.buffer),
            };
            if changed {
                self.needs_save = true;
            }
        }
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask for confirmation before deleting the selected task.
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Delete the task pending confirmation. Deleting the current task
    /// pauses the timer, resets the session to a fresh work countdown, and
    /// auto-selects the first remaining active task.
    pub fn confirm_delete(&mut self, now: Instant) {
        let Some(id) = self.pending_delete.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };
        self.ui_mode = UiMode::Normal;

        let deleting_current = Some(id) == self.current_task_id;
        if deleting_current {
            if self.engine.is_running() {
                self.pause_timer(now);
            }
            self.scheduler.bump_epoch();
            self.engine.reset();
            self.current_task_id = None;
        }

        if !self.store.delete(id) {
            return;
        }

        if deleting_current {
            self.adopt_next_active();
        }
        self.clamp_selection();
        self.needs_save = true;
    }

    /// Toggle the selected task's completion flag. Completing the current
    /// task hands the session to the next active task, or leaves it without
    /// one.
    pub fn toggle_completed(&mut self, now: Instant) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(now_completed) = self.store.toggle_completed(id) else {
            return;
        };

        if now_completed && Some(id) == self.current_task_id {
            if self.engine.is_running() {
                self.pause_timer(now);
            }
            self.scheduler.bump_epoch();
            self.current_task_id = None;
            self.adopt_next_active();
        }
        self.clamp_selection();
        self.needs_save = true;
    }

    /// Point the session at the first remaining active task, loading its
    /// saved progress, or leave the fresh work countdown in place.
    fn adopt_next_active(&mut self) {
        if let Some(task) = self.store.first_active() {
            let id = task.id;
            let saved = task.saved_time_remaining;
            self.current_task_id = Some(id);
            self.engine.load(Phase::Work, saved);
        }
    }

    // --- clock-driven updates ---

    /// Advance the countdown by one second and apply phase-transition policy.
    pub fn tick_second(&mut self, now: Instant) {
        match self.engine.tick() {
            Some(Phase::Work) => self.complete_work_phase(now),
            Some(Phase::Break) => self.complete_break_phase(now),
            None => {}
        }
    }

    /// Work phase finished: credit the current task and the daily counter,
    /// then line up the break to start on its own in a few seconds.
    fn complete_work_phase(&mut self, now: Instant) {
        if let Some(id) = self.current_task_id {
            if let Some(task) = self.store.get_mut(id) {
                task.completed_pomodoros += 1;
                task.reset_progress();
            }
        }
        self.daily.increment();
        notifications::notify_work_complete(self.daily.count());
        self.scheduler
            .schedule_in(BREAK_AUTO_START_DELAY, DelayedAction::StartBreak, now);
        self.needs_save = true;
    }

    /// Break finished: the engine is already back on a paused work countdown;
    /// shortly afterwards reload the current task's saved progress.
    fn complete_break_phase(&mut self, now: Instant) {
        notifications::notify_break_complete();
        self.scheduler
            .schedule_in(RETURN_TO_WORK_DELAY, DelayedAction::ReturnToWork, now);
    }

    /// Fire any delayed actions that have come due and still belong to the
    /// live epoch.
    pub fn process_due(&mut self, now: Instant) {
        for action in self.scheduler.due(now) {
            match action {
                DelayedAction::StartBreak => {
                    if self.engine.phase() == Phase::Break && !self.engine.is_running() {
                        self.engine.start();
                    }
                }
                DelayedAction::ReturnToWork => {
                    if self.engine.phase() == Phase::Work && !self.engine.is_running() {
                        let saved = self
                            .current_task()
                            .map(|t| t.saved_time_remaining)
                            .unwrap_or_else(|| Phase::Work.full_duration());
                        self.engine.load(Phase::Work, saved);
                    }
                }
            }
        }
    }

    /// The machine slept between loop iterations. Pause the countdown and
    /// remember how long for display; slept time is never credited to the
    /// timer - the user resumes explicitly.
    pub fn handle_suspend(&mut self, slept: Duration, now: Instant) {
        if self.engine.is_running() {
            self.pause_timer(now);
        }
        self.scheduler.bump_epoch();
        self.last_suspend_secs = Some(slept.as_secs());
    }

    // --- alerts ---

    fn raise_alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- persistence ---

    /// Snapshot for the state file.
    pub fn to_saved(&self) -> SavedState {
        SavedState {
            tasks: self.store.tasks().to_vec(),
            current_task_id: self.current_task_id,
            daily_count: self.daily.count(),
            last_date: self.daily.last_date().format(DATE_FORMAT).to_string(),
        }
    }

    /// Save state to disk
    pub fn save(&mut self) -> Result<()> {
        let path = crate::persistence::state_file()?;
        crate::persistence::save_state(path, &self.to_saved())?;
        self.needs_save = false;
        Ok(())
    }

    /// Called on quit: persist the live countdown into the current task so
    /// the next launch resumes where this one stopped.
    pub fn prepare_exit(&mut self) {
        self.save_live_progress();
        self.engine.pause();
        self.needs_save = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_app() -> AppState {
        AppState::new(LoadOutcome::Seeded)
    }

    fn now() -> Instant {
        Instant::now()
    }

    /// Select the visible task with the given name and make it current.
    fn make_current(app: &mut AppState, name: &str) {
        let idx = app
            .visible_tasks()
            .iter()
            .position(|t| t.name == name)
            .expect("task not visible");
        app.selected_index = idx;
        app.select_current(now());
    }

    fn run_ticks(app: &mut AppState, ticks: u32) {
        let t = now();
        for _ in 0..ticks {
            app.tick_second(t);
        }
    }

    #[test]
    fn test_seeded_app_has_defaults_and_current() {
        let app = test_app();
        assert_eq!(app.store.len(), 3);
        // First active task (alphabetical) adopted as current on first run.
        assert!(app.current_task_id.is_some());
        assert_eq!(app.engine.phase(), Phase::Work);
        assert_eq!(app.engine.time_remaining(), 1500);
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_start_without_current_task_is_rejected() {
        let mut app = test_app();
        app.current_task_id = None;

        app.start_timer(now());

        assert!(!app.engine.is_running());
        assert_eq!(app.engine.time_remaining(), 1500);
        assert_eq!(app.ui_mode, UiMode::Alert);
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_start_pause_idempotent() {
        let mut app = test_app();
        app.start_timer(now());
        assert!(app.engine.is_running());
        app.start_timer(now());
        assert!(app.engine.is_running());

        app.pause_timer(now());
        assert!(!app.engine.is_running());
        app.pause_timer(now());
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_full_work_phase_credits_task_and_daily_counter() {
        let mut app = test_app();
        let current = app.current_task_id.unwrap();
        let t = now();
        app.start_timer(t);

        run_ticks(&mut app, 1500);

        let task = app.store.get(current).unwrap();
        assert_eq!(task.completed_pomodoros, 1);
        assert_eq!(task.saved_time_remaining, 1500);
        assert_eq!(app.daily.count(), 1);
        assert_eq!(app.engine.phase(), Phase::Break);
        assert_eq!(app.engine.time_remaining(), 300);

        // The break auto-starts after the scheduled delay.
        assert!(!app.engine.is_running());
        app.process_due(t + Duration::from_secs(4));
        assert!(app.engine.is_running());
    }

    #[test]
    fn test_full_break_phase_returns_to_paused_work() {
        let mut app = test_app();
        let t = now();
        app.engine.load(Phase::Break, 300);
        app.engine.start();

        run_ticks(&mut app, 300);

        assert_eq!(app.engine.phase(), Phase::Work);
        assert_eq!(app.engine.time_remaining(), 1500);
        assert!(!app.engine.is_running());

        // The deferred return leaves the timer paused on the saved countdown.
        app.process_due(t + Duration::from_secs(3));
        assert!(!app.engine.is_running());
        assert_eq!(app.engine.time_remaining(), 1500);
    }

    #[test]
    fn test_countdown_never_negative_across_phases() {
        let mut app = test_app();
        let t = now();
        app.start_timer(t);

        for _ in 0..2000 {
            app.tick_second(t);
            app.process_due(t + Duration::from_secs(10));
            assert!(app.engine.time_remaining() <= 1500);
            assert!(app.engine.time_remaining() > 0 || !app.engine.is_running());
        }
    }

    #[test]
    fn test_switch_saves_outgoing_progress_and_pauses() {
        let mut app = test_app();
        let outgoing = app.current_task_id.unwrap();
        app.start_timer(now());
        run_ticks(&mut app, 25);
        let remaining_at_switch = app.engine.time_remaining();

        make_current(&mut app, "Email");

        let saved = app.store.get(outgoing).unwrap();
        assert_eq!(saved.saved_time_remaining, remaining_at_switch);
        assert!(saved.saved_timer_active);
        assert!(!app.engine.is_running());
        assert_eq!(app.engine.time_remaining(), 1500);
    }

    #[test]
    fn test_switch_loads_incoming_saved_progress() {
        let mut app = test_app();
        make_current(&mut app, "Email");
        app.start_timer(now());
        run_ticks(&mut app, 100);

        make_current(&mut app, "Reading");
        assert_eq!(app.engine.time_remaining(), 1500);

        make_current(&mut app, "Email");
        assert_eq!(app.engine.time_remaining(), 1400);
    }

    #[test]
    fn test_switch_disallowed_during_break() {
        let mut app = test_app();
        let current = app.current_task_id.unwrap();
        app.engine.load(Phase::Break, 200);

        app.selected_index = 1;
        app.select_current(now());

        assert_eq!(app.current_task_id, Some(current));
        assert_eq!(app.ui_mode, UiMode::Alert);
    }

    #[test]
    fn test_delete_current_adopts_next_active() {
        let mut app = test_app();
        let current = app.current_task_id.unwrap();
        app.start_timer(now());
        run_ticks(&mut app, 10);

        let idx = app
            .visible_tasks()
            .iter()
            .position(|t| t.id == current)
            .unwrap();
        app.selected_index = idx;
        app.request_delete();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        app.confirm_delete(now());

        assert_eq!(app.store.len(), 2);
        assert!(app.store.get(current).is_none());
        let new_current = app.current_task_id.expect("a remaining task is adopted");
        assert!(app.store.get(new_current).unwrap().is_active());
        assert_eq!(app.engine.phase(), Phase::Work);
        assert_eq!(app.engine.time_remaining(), 1500);
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_delete_last_task_clears_current() {
        let mut app = test_app();
        for name in ["Deep work", "Email", "Reading"] {
            let idx = app
                .visible_tasks()
                .iter()
                .position(|t| t.name == name)
                .unwrap();
            app.selected_index = idx;
            app.request_delete();
            app.confirm_delete(now());
        }

        assert!(app.store.is_empty());
        assert!(app.current_task_id.is_none());
        assert_eq!(app.engine.time_remaining(), 1500);
    }

    #[test]
    fn test_complete_current_task_hands_over() {
        let mut app = test_app();
        let current = app.current_task_id.unwrap();
        app.start_timer(now());

        let idx = app
            .visible_tasks()
            .iter()
            .position(|t| t.id == current)
            .unwrap();
        app.selected_index = idx;
        app.toggle_completed(now());

        assert!(app.store.get(current).unwrap().is_completed);
        let new_current = app.current_task_id.expect("next active adopted");
        assert_ne!(new_current, current);
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_uncomplete_is_plain_toggle() {
        let mut app = test_app();
        let id = app.visible_tasks()[1].id;
        app.selected_index = 1;
        app.toggle_completed(now());
        assert!(app.store.get(id).unwrap().is_completed);

        let idx = app
            .visible_tasks()
            .iter()
            .position(|t| t.id == id)
            .unwrap();
        app.selected_index = idx;
        let current_before = app.current_task_id;
        app.toggle_completed(now());

        assert!(!app.store.get(id).unwrap().is_completed);
        assert_eq!(app.current_task_id, current_before);
    }

    #[test]
    fn test_add_task_blank_name_is_noop() {
        let mut app = test_app();
        app.start_add_task();
        app.input_form_add_char(' ');
        app.input_form_add_char(' ');
        app.submit_input_form();

        assert_eq!(app.store.len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_add_and_rename_task() {
        let mut app = test_app();
        app.start_add_task();
        for c in "Zwriting".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        assert_eq!(app.store.len(), 4);

        let idx = app
            .visible_tasks()
            .iter()
            .position(|t| t.name == "Zwriting")
            .unwrap();
        app.selected_index = idx;
        app.start_rename_task();
        assert_eq!(app.ui_mode, UiMode::RenamingTask);
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.buffer, "Zwriting");

        for _ in 0.."Zwriting".len() {
            app.input_form_backspace();
        }
        for c in "Writing".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        assert!(app.visible_tasks().iter().any(|t| t.name == "Writing"));
    }

    #[test]
    fn test_reset_cancels_scheduled_break_start() {
        let mut app = test_app();
        let t = now();
        app.start_timer(t);
        run_ticks(&mut app, 1500);
        assert_eq!(app.engine.phase(), Phase::Break);

        // User resets before the 3-second auto-start fires; the stale action
        // must not start the timer.
        app.reset_timer(t);
        app.process_due(t + Duration::from_secs(10));

        assert_eq!(app.engine.phase(), Phase::Work);
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_suspend_pauses_and_records_duration() {
        let mut app = test_app();
        let t = now();
        app.start_timer(t);
        run_ticks(&mut app, 60);
        let remaining = app.engine.time_remaining();

        app.handle_suspend(Duration::from_secs(600), t);

        assert!(!app.engine.is_running());
        // Slept time is not credited: the countdown is wherever it stopped.
        assert_eq!(app.engine.time_remaining(), remaining);
        assert_eq!(app.last_suspend_secs, Some(600));
    }

    #[test]
    fn test_prepare_exit_saves_live_progress() {
        let mut app = test_app();
        let current = app.current_task_id.unwrap();
        app.start_timer(now());
        run_ticks(&mut app, 40);

        app.prepare_exit();

        let task = app.store.get(current).unwrap();
        assert_eq!(task.saved_time_remaining, 1460);
        assert!(task.saved_timer_active);
        assert!(!app.engine.is_running());
        assert!(app.needs_save);
    }

    #[test]
    fn test_to_saved_round_trip_shape() {
        let app = test_app();
        let saved = app.to_saved();
        assert_eq!(saved.tasks.len(), 3);
        assert_eq!(saved.current_task_id, app.current_task_id);
        assert_eq!(saved.daily_count, 0);
        assert!(saved.parsed_last_date().is_some());
    }

    #[test]
    fn test_loaded_state_with_completed_current_reselects() {
        let mut task_a = Task::new("A".to_string());
        task_a.is_completed = true;
        let task_b = Task::new("B".to_string());
        let b_id = task_b.id;
        let state = SavedState {
            current_task_id: Some(task_a.id),
            tasks: vec![task_a, task_b],
            daily_count: 2,
            last_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };

        let app = AppState::new(LoadOutcome::Loaded(state));

        assert_eq!(app.current_task_id, Some(b_id));
        assert_eq!(app.daily.count(), 2);
    }

    #[test]
    fn test_loaded_state_restores_current_progress() {
        let mut task = Task::new("A".to_string());
        task.saved_time_remaining = 321;
        let id = task.id;
        let state = SavedState {
            current_task_id: Some(id),
            tasks: vec![task],
            daily_count: 0,
            last_date: "2000-01-01".to_string(),
        };

        let app = AppState::new(LoadOutcome::Loaded(state));

        assert_eq!(app.current_task_id, Some(id));
        assert_eq!(app.engine.time_remaining(), 321);
        // Stale date stamp resets the daily counter.
        assert_eq!(app.daily.count(), 0);
        assert_eq!(app.daily.last_date(), Local::now().date_naive());
    }
}
