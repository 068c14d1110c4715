//! Dashboard footer component
//!
//! Renders key hints, or the active text input when one is open.

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.input.mode {
        InputMode::Normal => render_hints(f, area),
        InputMode::EditingUrl => render_input(f, area, "URL", &state.input.buffer),
        InputMode::EditingPath => render_input(f, area, "CSV path", &state.input.buffer),
    }
}

fn render_hints(f: &mut Frame, area: Rect) {
    let footer_text =
        "[A] Analyze URL | [U] Upload CSV | [T] Train | [K] Kernel | ←/→ C | [R] Refresh | [Q] Quit";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

fn render_input(f: &mut Frame, area: Rect, label: &str, buffer: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("{}> ", label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(buffer.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        Span::styled(
            "  (Enter to submit, Esc to cancel)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(input, area);
}
