//! Dashboard header component
//!
//! Renders the title and the model status line.

use super::super::state::{DashboardState, StatusRegion};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and status region.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let uptime = state.start_time.elapsed().as_secs();
    let title_text = format!(
        "URL SHIELD v{} - {} - up {:02}:{:02}:{:02}",
        version,
        state.environment,
        uptime / 3600,
        (uptime % 3600) / 60,
        uptime % 60
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let status_color = match state.status {
        StatusRegion::Loading => Color::DarkGray,
        StatusRegion::Ready { .. } => Color::Cyan,
        StatusRegion::Failed => Color::Red,
    };

    let status = Paragraph::new(state.status.line())
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
