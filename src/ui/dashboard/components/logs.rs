//! Activity log component
//!
//! Renders recent operation events with compact timestamps.

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, source_color};
use crate::events::EventType;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity log panel with as many recent events as fit.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Account for borders and padding.
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Success => "✅",
                EventType::Error => "❌",
                EventType::Refresh => "",
                EventType::Waiting => "",
            };

            let compact_time = format_compact_timestamp(&event.timestamp);
            let cleaned_msg = clean_http_error_message(&event.msg);

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(cleaned_msg, Style::default().fg(source_color(&event.source))),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
