use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, current_task_style, default_style, done_style, paused_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Build the display line for one task row
fn task_line(task: &Task, is_current: bool, is_selected: bool) -> Line<'static> {
    let marker = if is_current { "\u{25B6} " } else { "  " };

    let mut spans = vec![Span::styled(
        marker.to_string(),
        if is_current {
            current_task_style()
        } else {
            default_style()
        },
    )];

    let name_style = if is_selected {
        selected_style()
    } else if task.is_completed {
        done_style()
    } else if is_current {
        current_task_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(task.name.clone(), name_style));

    if task.completed_pomodoros > 0 {
        spans.push(Span::raw(format!(
            "  {} \u{1F345}",
            task.completed_pomodoros
        )));
    }

    // Partially elapsed countdown waiting to be resumed.
    if !task.is_completed && task.saved_timer_active && task.has_saved_progress() && !is_current {
        spans.push(Span::styled(" \u{23F8}".to_string(), paused_style()));
    }

    Line::from(spans)
}

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let current_id = app.current_task_id;
    let items: Vec<ListItem> = app
        .visible_tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            ListItem::new(task_line(
                task,
                Some(task.id) == current_id,
                idx == app.selected_index,
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Tasks ", title_style())),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_line_shows_pomodoro_count() {
        let mut task = Task::new("Write".to_string());
        task.completed_pomodoros = 2;

        let line = task_line(&task, false, false);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("Write"));
        assert!(text.contains('2'));
    }

    #[test]
    fn test_task_line_marks_current() {
        let task = Task::new("Write".to_string());
        let line = task_line(&task, true, false);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.starts_with('\u{25B6}'));
    }

    #[test]
    fn test_task_line_paused_indicator() {
        let mut task = Task::new("Write".to_string());
        task.save_progress(700, true);

        let line = task_line(&task, false, false);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains('\u{23F8}'));

        // The current task shows its countdown in the timer pane instead.
        let line = task_line(&task, true, false);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(!text.contains('\u{23F8}'));
    }
}
