//! Dashboard main renderer

use super::components::{analysis, chart, footer, header, logs, metrics, notice, training};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(content_chunks[0]);

    metrics::render_metric_slots(f, left_chunks[0], state);
    chart::render_chart(f, left_chunks[1], state);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_chunks[1]);

    analysis::render_analysis_panel(f, right_chunks[0], state);
    training::render_training_panel(f, right_chunks[1], state);

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);

    // A blocking notice covers everything until acknowledged.
    if let Some(active) = &state.notice {
        notice::render_notice(f, active);
    }
}
