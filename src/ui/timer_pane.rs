use crate::app::AppState;
use crate::domain::Phase;
use crate::ui::styles::{
    border_style, break_style, default_style, gauge_style, hint_style, notice_style, title_style,
    work_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Format a countdown as MM:SS
fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render the timer pane: phase, countdown, progress gauge and daily tally
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let phase_style = match app.engine.phase() {
        Phase::Work => work_style(),
        Phase::Break => break_style(),
    };

    let status = if app.engine.is_running() {
        "running"
    } else {
        "paused"
    };

    let focus_line = match app.current_task() {
        Some(task) => Line::from(vec![
            Span::raw("  Focus: "),
            Span::styled(task.name.clone(), default_style()),
        ]),
        None => Line::from(Span::styled("  Focus: (no task selected)", hint_style())),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("  {} ", app.engine.phase().label()), phase_style),
            Span::styled(
                format_countdown(app.engine.time_remaining()),
                phase_style,
            ),
            Span::styled(format!("  [{}]", status), hint_style()),
        ]),
        focus_line,
        Line::from(Span::raw(format!(
            "  Today: {} \u{1F345}",
            app.daily.count()
        ))),
    ];

    if let Some(slept) = app.last_suspend_secs {
        lines.push(Line::from(Span::styled(
            format!("  Paused after sleeping {}m {}s", slept / 60, slept % 60),
            notice_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Tomate ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    f.render_widget(Paragraph::new(lines), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(app.engine.progress_ratio().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, chunks[1]);
}
