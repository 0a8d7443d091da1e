pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_alert_modal, render_confirm_delete_modal, render_input_form};
use ratatui::Frame;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.task_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    // Render delete confirmation if active
    if app.ui_mode == UiMode::ConfirmDelete {
        render_confirm_delete_modal(f, app, size);
    }

    // Render alert if active
    if app.ui_mode == UiMode::Alert {
        render_alert_modal(f, app, size);
    }
}
