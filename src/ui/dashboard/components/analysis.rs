//! URL analysis panel component
//!
//! Renders the verdict badge, confidence meter, probability cards, echoed
//! URL and recommendation banner for the last analyzed URL.

use super::super::state::{AnalysisRegion, DashboardState, PredictionView, Verdict};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};

pub fn render_analysis_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("URL ANALYSIS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));

    match &state.analysis {
        AnalysisRegion::Idle => {
            let hint = Paragraph::new("Press [A] to analyze a URL")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(hint, area);
        }
        AnalysisRegion::Loading => {
            let loading = Paragraph::new("Analyzing URL...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            f.render_widget(loading, area);
        }
        AnalysisRegion::Ready(view) => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            render_result(f, inner, view);
        }
    }
}

fn render_result(f: &mut Frame, area: Rect, view: &PredictionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // badge + url
            Constraint::Length(3), // confidence gauge
            Constraint::Length(3), // probability cards
            Constraint::Min(1),    // recommendation
        ])
        .split(area);

    let (badge_text, badge_color) = match view.verdict {
        Verdict::Malicious => (" MALICIOUS ", Color::Red),
        Verdict::Safe => (" SAFE ", Color::Green),
    };
    let badge_line = Line::from(vec![
        Span::styled(
            badge_text,
            Style::default()
                .fg(Color::Black)
                .bg(badge_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(view.url.clone(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(badge_line), chunks[0]);

    let confidence = Gauge::default()
        .block(Block::default().title("Confidence").borders(Borders::ALL))
        .gauge_style(
            Style::default()
                .fg(view.confidence_color.as_color())
                .add_modifier(Modifier::BOLD),
        )
        .percent(u16::from(view.confidence_percent))
        .label(view.confidence_text.clone());
    f.render_widget(confidence, chunks[1]);

    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_probability_card(
        f,
        card_chunks[0],
        "Legitimate",
        &view.probability_legitimate_text,
        Color::Green,
    );
    render_probability_card(
        f,
        card_chunks[1],
        "Malicious",
        &view.probability_malicious_text,
        Color::Red,
    );

    let banner_color = match view.verdict {
        Verdict::Malicious => Color::Red,
        Verdict::Safe => Color::Green,
    };
    let recommendation = Paragraph::new(view.recommendation.clone())
        .style(Style::default().fg(banner_color))
        .wrap(Wrap { trim: true });
    f.render_widget(recommendation, chunks[3]);
}

fn render_probability_card(f: &mut Frame, area: Rect, title: &str, text: &str, color: Color) {
    let card = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(card, area);
}
