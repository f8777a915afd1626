//! UI rendering for the TUI.

use pomodoro_core::{Accent, Notice, TimerView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let accent = accent_color(view.accent);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(" Pomodoro ");
    let area = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(1), // Mode
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Time
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Controls
            Constraint::Min(0),    // Bottom padding
        ])
        .split(area);

    render_mode(frame, &view, accent, chunks[1]);
    render_time(frame, &view, chunks[3]);
    render_progress(frame, &view, accent, centered_width(60, chunks[5]));
    render_controls(frame, &view, chunks[6]);

    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
    }
}

fn render_mode(frame: &mut Frame<'_>, view: &TimerView, accent: Color, area: Rect) {
    let mode = Paragraph::new(view.mode_label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
    frame.render_widget(mode, area);
}

fn render_time(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let time = Paragraph::new(view.time_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(time, area);
}

fn render_progress(frame: &mut Frame<'_>, view: &TimerView, accent: Color, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_controls(frame: &mut Frame<'_>, view: &TimerView, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let controls = Line::from(vec![
        Span::styled("space", key),
        Span::raw(format!(" {}   ", view.control.label())),
        Span::styled("r", key),
        Span::raw(" Reset   "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        area,
    );
}

fn render_notice(frame: &mut Frame<'_>, notice: &Notice) {
    let area = centered_rect(40, 7, frame.area());
    let text = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("enter  OK", Style::default().fg(Color::Yellow))),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// `area` narrowed to `percent` of its width, centered.
fn centered_width(percent: u16, area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area);
    chunks[1]
}

/// A `width` x `height` rect centered in `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
