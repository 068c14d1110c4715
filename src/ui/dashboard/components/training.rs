//! Training panel component
//!
//! Renders the kernel selector, the regularization slider with its readout,
//! the train trigger, and the last training result.

use super::super::state::{DashboardState, TrainingRegion};
use crate::consts::cli_consts::controls;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};

pub fn render_training_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TRAINING")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // kernel selector + trigger
            Constraint::Length(3), // C slider
            Constraint::Min(1),    // result
        ])
        .split(inner);

    render_controls_row(f, chunks[0], state);
    render_c_slider(f, chunks[1], state);
    render_result(f, chunks[2], state);
}

fn render_controls_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let trigger = &state.trigger_view;
    let trigger_style = if trigger.enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let row = Line::from(vec![
        Span::raw("[K] Kernel: "),
        Span::styled(
            state.controls.kernel.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   [T] "),
        Span::styled(format!(" {} ", trigger.label), trigger_style),
    ]);
    f.render_widget(Paragraph::new(row), area);
}

fn render_c_slider(f: &mut Frame, area: Rect, state: &DashboardState) {
    let ratio = ((state.controls.c_value - controls::C_MIN)
        / (controls::C_MAX - controls::C_MIN))
        .clamp(0.0, 1.0);

    let slider = Gauge::default()
        .block(
            Block::default()
                .title("Regularization (C)")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(state.controls.c_readout.clone());
    f.render_widget(slider, area);
}

fn render_result(f: &mut Frame, area: Rect, state: &DashboardState) {
    let paragraph = match &state.training {
        TrainingRegion::Idle => Paragraph::new("No training run yet")
            .style(Style::default().fg(Color::DarkGray)),
        TrainingRegion::Busy => Paragraph::new("Training in progress...")
            .style(Style::default().fg(Color::Yellow)),
        TrainingRegion::Ready(view) => Paragraph::new(vec![
            Line::from(Span::styled(
                view.message.clone(),
                Style::default().fg(Color::Green),
            )),
            Line::from(format!("Kernel: {}  F1-Score: {}", view.kernel, view.f1_text)),
        ]),
        TrainingRegion::Failed(msg) => {
            Paragraph::new(msg.clone()).style(Style::default().fg(Color::Red))
        }
    };

    f.render_widget(
        paragraph.alignment(Alignment::Left).wrap(Wrap { trim: true }),
        area,
    );
}
