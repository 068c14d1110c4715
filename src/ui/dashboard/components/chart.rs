//! Metrics chart component
//!
//! Renders the service's chart spec as a bar chart, or a placeholder when
//! the payload could not be obtained.

use super::super::state::{ChartRegion, DashboardState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Paragraph};

pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    match &state.chart {
        ChartRegion::Ready(view) => {
            let data: Vec<(&str, u64)> = view
                .bars
                .iter()
                .map(|(label, value)| (label.as_str(), *value))
                .collect();

            let chart = BarChart::default()
                .block(
                    Block::default()
                        .title(view.title.clone())
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Blue)),
                )
                .data(&data)
                .bar_width(9)
                .bar_gap(2)
                .max(100)
                .bar_style(Style::default().fg(Color::Blue))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(chart, area);
        }
        ChartRegion::Loading => render_caption(f, area, "Loading chart...", Color::DarkGray),
        ChartRegion::Placeholder(text) => render_caption(f, area, text, Color::DarkGray),
    }
}

fn render_caption(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let caption = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title("Metrics Chart")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(caption, area);
}
