//! Blocking notice overlay
//!
//! Centered modal shown over the dashboard until the user dismisses it.

use super::super::state::{Notice, NoticeKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let area = centered_rect(60, 20, f.area());

    let (title, color) = match notice.kind {
        NoticeKind::Info => ("NOTICE", Color::Cyan),
        NoticeKind::Error => ("ERROR", Color::Red),
    };

    let body = Paragraph::new(vec![
        Line::from(notice.text.clone()),
        Line::from(""),
        Line::styled("[Enter] Dismiss", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

/// Rect covering `percent_x` x `percent_y` of the frame, centered.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
