//! Event System
//!
//! Types and implementations for operation events flowing from the
//! controller to the UI loop.

use crate::api::types::{ChartPayload, ModelInfo, Prediction, TrainingOutcome};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The operation that produced an event. Each source maps to one dashboard
/// region, so updaters can fold an event into the right view state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionSource {
    /// Loads model metadata and metrics.
    MetricsLoader,
    /// Loads the metrics chart payload.
    ChartLoader,
    /// Analyzes a single URL.
    Analyzer,
    /// Uploads a training dataset.
    DatasetUploader,
    /// Runs a training request.
    Trainer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

/// Typed response data carried alongside an event. Updaters consume this to
/// rebuild the affected region's view state; messages alone never carry data.
#[derive(Debug, Clone)]
pub enum ResponsePayload {
    Metrics(ModelInfo),
    Chart(ChartPayload),
    Prediction(Prediction),
    Training(TrainingOutcome),
}

#[derive(Debug, Clone)]
pub struct Event {
    pub source: ActionSource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Response data for events that change a region, absent otherwise.
    pub payload: Option<ResponsePayload>,
}

impl Event {
    fn new(source: ActionSource, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn with_payload(
        source: ActionSource,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        payload: ResponsePayload,
    ) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(source, msg, event_type, log_level)
        }
    }

    pub fn metrics_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(ActionSource::MetricsLoader, msg, event_type, log_level)
    }

    pub fn chart_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(ActionSource::ChartLoader, msg, event_type, log_level)
    }

    pub fn analyzer_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(ActionSource::Analyzer, msg, event_type, log_level)
    }

    pub fn uploader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(ActionSource::DatasetUploader, msg, event_type, log_level)
    }

    pub fn trainer_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(ActionSource::Trainer, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::metrics_with_level(
            "Model metrics loaded".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_plain_constructors_carry_no_payload() {
        let event = Event::analyzer_with_level(
            "Analyzing URL...".to_string(),
            EventType::Waiting,
            LogLevel::Info,
        );
        assert!(event.payload.is_none());
        assert_eq!(event.source, ActionSource::Analyzer);
    }
}
