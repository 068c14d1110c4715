//! Dashboard utility functions
//!
//! Color classification and text formatting shared across components.

use crate::events::ActionSource;
use ratatui::prelude::Color;

/// Color class for a model quality metric value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MetricColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl MetricColor {
    pub fn as_color(&self) -> Color {
        match self {
            MetricColor::Green => Color::Green,
            MetricColor::Yellow => Color::Yellow,
            MetricColor::Orange => Color::Rgb(255, 165, 0),
            MetricColor::Red => Color::Red,
        }
    }
}

/// Classify a metric value in [0, 1].
pub fn metric_color(value: f64) -> MetricColor {
    if value >= 0.90 {
        MetricColor::Green
    } else if value >= 0.80 {
        MetricColor::Yellow
    } else if value >= 0.70 {
        MetricColor::Orange
    } else {
        MetricColor::Red
    }
}

/// Color class for a prediction confidence percentage.
///
/// Thresholds are independent from the metric table on purpose: confidence is
/// judged on the 0-100 scale with a coarser split.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConfidenceColor {
    Green,
    Yellow,
    Red,
}

impl ConfidenceColor {
    pub fn as_color(&self) -> Color {
        match self {
            ConfidenceColor::Green => Color::Green,
            ConfidenceColor::Yellow => Color::Yellow,
            ConfidenceColor::Red => Color::Red,
        }
    }
}

/// Classify a confidence percentage (0-100).
pub fn confidence_color(percent: u8) -> ConfidenceColor {
    if percent >= 90 {
        ConfidenceColor::Green
    } else if percent >= 70 {
        ConfidenceColor::Yellow
    } else {
        ConfidenceColor::Red
    }
}

/// Round a [0, 1] confidence to its 0-100 percentage.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Format a [0, 1] metric as a percentage with one decimal: 0.953 -> "95.3%".
pub fn format_metric_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a [0, 1] probability as a whole percentage: 0.18 -> "18%".
pub fn format_probability_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Readout text mirroring the regularization slider.
pub fn format_c_readout(c: f64) -> String {
    format!("C = {:.2}", c)
}

/// Get a ratatui color for an event source.
pub fn source_color(source: &ActionSource) -> Color {
    match source {
        ActionSource::MetricsLoader => Color::Cyan,
        ActionSource::ChartLoader => Color::Blue,
        ActionSource::Analyzer => Color::Magenta,
        ActionSource::DatasetUploader => Color::Yellow,
        ActionSource::Trainer => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages for the activity log.
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("reqwest::Error") && msg.contains("ConnectTimeout") {
        return "Connection timeout".to_string();
    }
    if msg.contains("reqwest::Error") && msg.contains("TimedOut") {
        return "Request timed out".to_string();
    }
    if msg.contains("reqwest::Error") {
        return "Network error".to_string();
    }
    msg.to_string()
}
