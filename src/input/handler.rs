use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask | UiMode::RenamingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key, now),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Make the selected task current
        KeyCode::Enter => {
            app.select_current(now);
            Ok(false)
        }

        // Toggle run/pause
        KeyCode::Char(' ') => {
            app.toggle_run_pause(now);
            Ok(false)
        }

        // Reset to a fresh work countdown
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer(now);
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Rename task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_rename_task();
            Ok(false)
        }

        // Delete task (asks for confirmation)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.request_delete();
            Ok(false)
        }

        // Toggle done
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.toggle_completed(now);
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding or renaming a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in delete confirmation mode
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        // Yes, delete
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete(now);
            Ok(false)
        }

        // No, keep the task
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in alert mode (any key dismisses)
fn handle_alert_mode(app: &mut AppState, _key: KeyEvent) -> Result<bool> {
    app.dismiss_alert();
    Ok(false)
}
