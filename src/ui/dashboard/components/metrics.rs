//! Metric slots component
//!
//! Renders the four model quality metrics with their color classes.

use super::super::state::{DashboardState, MetricSlot};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the four metric slots side by side.
pub fn render_metric_slots(f: &mut Frame, area: Rect, state: &DashboardState) {
    let slot_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    match &state.metric_slots {
        Some(slots) => {
            render_slot(f, slot_chunks[0], "Accuracy", &slots.accuracy, false);
            render_slot(f, slot_chunks[1], "F1-Score", &slots.f1, state.f1_highlighted);
            render_slot(f, slot_chunks[2], "Recall", &slots.recall, false);
            render_slot(f, slot_chunks[3], "Precision", &slots.precision, false);
        }
        None => {
            for (chunk, title) in slot_chunks
                .iter()
                .zip(["Accuracy", "F1-Score", "Recall", "Precision"])
            {
                render_empty_slot(f, *chunk, title);
            }
        }
    }
}

fn render_slot(f: &mut Frame, area: Rect, title: &str, slot: &MetricSlot, highlighted: bool) {
    let mut value_style = Style::default()
        .fg(slot.color.as_color())
        .add_modifier(Modifier::BOLD);
    if highlighted {
        value_style = value_style.add_modifier(Modifier::REVERSED);
    }

    let value = Paragraph::new(slot.text.clone())
        .alignment(Alignment::Center)
        .style(value_style)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(slot.color.as_color())),
        );
    f.render_widget(value, area);
}

fn render_empty_slot(f: &mut Frame, area: Rect, title: &str) {
    let value = Paragraph::new("--")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(value, area);
}
