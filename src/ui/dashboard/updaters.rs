//! Dashboard state update logic
//!
//! Folds operation events into the per-region view records. The region
//! builders are pure functions over response payloads, so the rendering
//! logic is testable without a terminal or a live service.

use super::state::{
    AnalysisRegion, ChartRegion, ChartView, ControlsRegion, DashboardState, MetricSlot,
    MetricSlots, Notice, NoticeKind, PredictionView, StatusRegion, TrainingRegion, TrainingView,
    Verdict,
};
use super::utils::{
    confidence_color, confidence_percent, format_c_readout, format_metric_percent,
    format_probability_percent, metric_color,
};

use crate::api::types::{
    ChartPayload, Kernel, MetricsSnapshot, ModelInfo, Prediction, TrainingOutcome,
};
use crate::consts::cli_consts::{controls, ui_timing};
use crate::events::{ActionSource, Event, EventType, ResponsePayload};
use crate::schedule::{Region, ScheduledAction};

use std::time::Instant;

/// Build the four metric slots from a snapshot. Text is the value as a
/// percentage with one decimal; color comes from the shared threshold map.
pub fn apply_metrics(metrics: &MetricsSnapshot) -> MetricSlots {
    let slot = |value: f64| MetricSlot {
        text: format_metric_percent(value),
        color: metric_color(value),
    };
    MetricSlots {
        accuracy: slot(metrics.accuracy),
        f1: slot(metrics.f1_score),
        recall: slot(metrics.recall),
        precision: slot(metrics.precision),
    }
}

/// Status line content from a model-info response. Uses only the fields of
/// the response it is given, so concurrent loads cannot mix data.
pub fn apply_status(info: &ModelInfo) -> StatusRegion {
    StatusRegion::Ready {
        kernel: info.kernel.clone(),
        f1_text: format_metric_percent(info.metrics.f1_score),
    }
}

/// Fully formatted analysis panel from a prediction.
pub fn prediction_view(prediction: &Prediction) -> PredictionView {
    let percent = confidence_percent(prediction.confidence);
    PredictionView {
        verdict: if prediction.is_malicious {
            Verdict::Malicious
        } else {
            Verdict::Safe
        },
        confidence_text: format!("{}%", percent),
        confidence_percent: percent,
        confidence_color: confidence_color(percent),
        probability_legitimate_text: format_probability_percent(prediction.probability_legitimate),
        probability_malicious_text: format_probability_percent(prediction.probability_malicious),
        url: prediction.url.clone(),
        recommendation: prediction.recommendation.clone(),
    }
}

/// Training summary panel from a training outcome.
pub fn training_view(outcome: &TrainingOutcome) -> TrainingView {
    TrainingView {
        message: outcome.message.clone(),
        kernel: outcome.kernel.clone(),
        f1_text: format_metric_percent(outcome.metrics.f1_score),
    }
}

/// Extract a bar view from the opaque chart spec: labels from the first
/// trace's `x`, values from its `y`, title from the layout. Returns `None`
/// when the spec does not have that shape.
pub fn chart_view(payload: &ChartPayload) -> Option<ChartView> {
    let value = payload.as_value();
    let trace = value.get("data")?.as_array()?.first()?;

    let labels = trace.get("x")?.as_array()?;
    let values = trace.get("y")?.as_array()?;
    if labels.len() != values.len() || labels.is_empty() {
        return None;
    }

    let bars = labels
        .iter()
        .zip(values.iter())
        .map(|(label, value)| {
            Some((
                label.as_str()?.to_string(),
                value.as_f64()?.round().max(0.0) as u64,
            ))
        })
        .collect::<Option<Vec<_>>>()?;

    let title = value
        .get("layout")
        .and_then(|layout| layout.get("title"))
        .and_then(|title| {
            // Plotly emits either a plain string or {"text": ...}.
            title
                .as_str()
                .or_else(|| title.get("text").and_then(|text| text.as_str()))
        })
        .unwrap_or("Model Metrics")
        .to_string();

    Some(ChartView { title, bars })
}

/// Mirror a slider change into the controls record, clamping to range.
pub fn set_c_value(prev: &ControlsRegion, c: f64) -> ControlsRegion {
    let c = c.clamp(controls::C_MIN, controls::C_MAX);
    ControlsRegion {
        kernel: prev.kernel,
        c_value: c,
        c_readout: format_c_readout(c),
    }
}

pub fn set_kernel(prev: &ControlsRegion, kernel: Kernel) -> ControlsRegion {
    ControlsRegion {
        kernel,
        c_value: prev.c_value,
        c_readout: prev.c_readout.clone(),
    }
}

impl DashboardState {
    /// Update the dashboard state with a new tick: drain queued events into
    /// the regions, then expire due timers. Returns the deferred actions the
    /// caller must run (currently only the post-training metrics reload).
    pub fn update(&mut self, now: Instant) -> Vec<ScheduledAction> {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event, now);
        }

        let mut for_caller = Vec::new();
        for action in self.timers.take_due(now) {
            match action {
                ScheduledAction::ClearHighlight => self.f1_highlighted = false,
                ScheduledAction::ReloadMetrics => for_caller.push(action),
            }
        }
        for_caller
    }

    /// Fold a single event into the region it belongs to. Timers are armed
    /// against the caller's clock so expiry is deterministic under test.
    fn process_event(&mut self, event: &Event, now: Instant) {
        match event.source {
            ActionSource::MetricsLoader => self.handle_metrics_event(event, now),
            ActionSource::ChartLoader => self.handle_chart_event(event),
            ActionSource::Analyzer => self.handle_analyzer_event(event),
            ActionSource::DatasetUploader => self.handle_uploader_event(event),
            ActionSource::Trainer => self.handle_trainer_event(event, now),
        }
    }

    fn handle_metrics_event(&mut self, event: &Event, now: Instant) {
        match (&event.event_type, &event.payload) {
            (EventType::Success, Some(ResponsePayload::Metrics(info))) => {
                self.status = apply_status(info);
                self.metric_slots = Some(apply_metrics(&info.metrics));
                // Fresh snapshot: flash the F1 slot, superseding a running flash.
                self.f1_highlighted = true;
                self.timers.schedule_at(
                    Region::F1Highlight,
                    now + ui_timing::metric_highlight(),
                    ScheduledAction::ClearHighlight,
                );
            }
            (EventType::Error, _) => {
                // Prior metric slots stay intact; only the status degrades.
                self.status = StatusRegion::Failed;
            }
            _ => {}
        }
    }

    fn handle_chart_event(&mut self, event: &Event) {
        match (&event.event_type, &event.payload) {
            (EventType::Success, Some(ResponsePayload::Chart(payload))) => {
                self.chart = match chart_view(payload) {
                    Some(view) => ChartRegion::Ready(view),
                    None => ChartRegion::Placeholder("Chart data not understood"),
                };
            }
            (EventType::Error, _) => {
                self.chart = ChartRegion::Placeholder("Chart unavailable");
            }
            _ => {}
        }
    }

    fn handle_analyzer_event(&mut self, event: &Event) {
        match (&event.event_type, &event.payload) {
            (EventType::Waiting, _) => {
                self.analysis = AnalysisRegion::Loading;
            }
            (EventType::Success, Some(ResponsePayload::Prediction(prediction))) => {
                self.analysis = AnalysisRegion::Ready(prediction_view(prediction));
            }
            (EventType::Error, _) => {
                // The panel keeps whatever state it already shows; failures
                // surface as a blocking notice instead.
                self.notice = Some(Notice {
                    text: event.msg.clone(),
                    kind: NoticeKind::Error,
                });
            }
            _ => {}
        }
    }

    fn handle_uploader_event(&mut self, event: &Event) {
        match event.event_type {
            EventType::Success => {
                self.notice = Some(Notice {
                    text: event.msg.clone(),
                    kind: NoticeKind::Info,
                });
            }
            EventType::Error => {
                self.notice = Some(Notice {
                    text: event.msg.clone(),
                    kind: NoticeKind::Error,
                });
            }
            _ => {}
        }
    }

    fn handle_trainer_event(&mut self, event: &Event, now: Instant) {
        match (&event.event_type, &event.payload) {
            (EventType::Waiting, _) => {
                self.training = TrainingRegion::Busy;
            }
            (EventType::Success, Some(ResponsePayload::Training(outcome))) => {
                self.training = TrainingRegion::Ready(training_view(outcome));
                // Metrics refresh shortly after a successful run; keyed so a
                // second run supersedes a still-pending reload.
                self.timers.schedule_at(
                    Region::Metrics,
                    now + ui_timing::post_training_reload(),
                    ScheduledAction::ReloadMetrics,
                );
            }
            (EventType::Error, _) => {
                self.training = TrainingRegion::Failed(event.msg.clone());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::ui::dashboard::utils::{ConfidenceColor, MetricColor};
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, Instant::now())
    }

    fn model_info(kernel: &str, f1: f64) -> ModelInfo {
        ModelInfo {
            is_trained: true,
            model_type: "Support Vector Machine".to_string(),
            kernel: kernel.to_string(),
            metrics: MetricsSnapshot {
                accuracy: 0.92,
                f1_score: f1,
                recall: 0.91,
                precision: 0.89,
            },
        }
    }

    fn success_event(source: ActionSource, payload: ResponsePayload) -> Event {
        Event::with_payload(
            source,
            "ok".to_string(),
            EventType::Success,
            LogLevel::Info,
            payload,
        )
    }

    #[test]
    // The exact rendering from the reference snapshot: four percent strings
    // with one decimal and their color classes.
    fn test_apply_metrics_formats_and_colors_slots() {
        let slots = apply_metrics(&MetricsSnapshot {
            accuracy: 0.953,
            f1_score: 0.912,
            recall: 0.887,
            precision: 0.901,
        });

        assert_eq!(slots.accuracy.text, "95.3%");
        assert_eq!(slots.f1.text, "91.2%");
        assert_eq!(slots.recall.text, "88.7%");
        assert_eq!(slots.precision.text, "90.1%");

        assert_eq!(slots.accuracy.color, MetricColor::Green);
        assert_eq!(slots.f1.color, MetricColor::Green);
        assert_eq!(slots.recall.color, MetricColor::Yellow);
        assert_eq!(slots.precision.color, MetricColor::Green);
    }

    #[test]
    fn test_prediction_view_renders_malicious_result() {
        let view = prediction_view(&Prediction {
            url: "http://example.com".to_string(),
            is_malicious: true,
            confidence: 0.82,
            probability_legitimate: 0.18,
            probability_malicious: 0.82,
            recommendation: "Suspicious URL detected".to_string(),
            risk_level: Some("HIGH".to_string()),
        });

        assert_eq!(view.verdict, Verdict::Malicious);
        assert_eq!(view.confidence_text, "82%");
        assert_eq!(view.confidence_color, ConfidenceColor::Yellow);
        assert_eq!(view.probability_legitimate_text, "18%");
        assert_eq!(view.probability_malicious_text, "82%");
        assert_eq!(view.url, "http://example.com");
    }

    #[test]
    fn test_chart_view_extracts_first_trace() {
        let payload = ChartPayload::from_text(
            r#"{
                "data": [{"x": ["Accuracy", "Precision", "Recall", "F1-Score"],
                          "y": [92.0, 89.0, 91.0, 90.0]}],
                "layout": {"title": "SVM Model Metrics"}
            }"#,
        )
        .unwrap();

        let view = chart_view(&payload).unwrap();
        assert_eq!(view.title, "SVM Model Metrics");
        assert_eq!(view.bars.len(), 4);
        assert_eq!(view.bars[0], ("Accuracy".to_string(), 92));
    }

    #[test]
    fn test_chart_view_rejects_malformed_spec() {
        let payload = ChartPayload::from_text(r#"{"layout": {}}"#).unwrap();
        assert!(chart_view(&payload).is_none());

        let mismatched =
            ChartPayload::from_text(r#"{"data": [{"x": ["a"], "y": [1.0, 2.0]}]}"#).unwrap();
        assert!(chart_view(&mismatched).is_none());
    }

    #[test]
    fn test_set_c_value_mirrors_and_clamps() {
        let controls = ControlsRegion::default();
        assert_eq!(controls.c_readout, "C = 1.00");

        let updated = set_c_value(&controls, 2.5);
        assert_eq!(updated.c_value, 2.5);
        assert_eq!(updated.c_readout, "C = 2.50");

        let clamped = set_c_value(&controls, 99.0);
        assert_eq!(clamped.c_value, 10.0);
        assert_eq!(clamped.c_readout, "C = 10.00");
    }

    #[test]
    // Two metrics responses folded in sequence: each status line is built
    // solely from its own payload.
    fn test_concurrent_metrics_responses_do_not_mix() {
        let mut state = state();

        state.add_event(success_event(
            ActionSource::MetricsLoader,
            ResponsePayload::Metrics(model_info("rbf", 0.90)),
        ));
        state.update(Instant::now());
        assert_eq!(state.status.line(), "Model: rbf | F1 90.0%");

        state.add_event(success_event(
            ActionSource::MetricsLoader,
            ResponsePayload::Metrics(model_info("linear", 0.86)),
        ));
        state.update(Instant::now());
        assert_eq!(state.status.line(), "Model: linear | F1 86.0%");
    }

    #[test]
    // A metrics failure leaves previously displayed slots intact and only
    // degrades the status line.
    fn test_metrics_failure_keeps_prior_slots() {
        let mut state = state();
        state.add_event(success_event(
            ActionSource::MetricsLoader,
            ResponsePayload::Metrics(model_info("rbf", 0.90)),
        ));
        state.update(Instant::now());
        let slots_before = state.metric_slots.clone();
        assert!(slots_before.is_some());

        state.add_event(Event::metrics_with_level(
            "Failed to load model metrics".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update(Instant::now());

        assert_eq!(state.status, StatusRegion::Failed);
        assert_eq!(state.metric_slots, slots_before);
    }

    #[test]
    fn test_metrics_success_arms_and_expires_highlight() {
        let mut state = state();
        let t0 = Instant::now();

        state.add_event(success_event(
            ActionSource::MetricsLoader,
            ResponsePayload::Metrics(model_info("rbf", 0.90)),
        ));
        state.update(t0);
        assert!(state.f1_highlighted);

        // Still lit just before expiry, cleared at 500ms.
        state.update(t0 + Duration::from_millis(499));
        assert!(state.f1_highlighted);
        state.update(t0 + Duration::from_millis(501));
        assert!(!state.f1_highlighted);
    }

    #[test]
    fn test_analyzer_failure_raises_notice_and_keeps_panel() {
        let mut state = state();
        state.add_event(Event::analyzer_with_level(
            "Analyzing http://a.com...".to_string(),
            EventType::Waiting,
            LogLevel::Info,
        ));
        state.update(Instant::now());
        assert_eq!(state.analysis, AnalysisRegion::Loading);

        state.add_event(Event::analyzer_with_level(
            "URL analysis failed: HTTP error with status 502".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update(Instant::now());

        assert_eq!(state.analysis, AnalysisRegion::Loading);
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_training_success_schedules_metrics_reload() {
        let mut state = state();
        let t0 = Instant::now();

        state.add_event(success_event(
            ActionSource::Trainer,
            ResponsePayload::Training(TrainingOutcome {
                message: "Model trained".to_string(),
                kernel: "poly".to_string(),
                c: 1.0,
                metrics: MetricsSnapshot {
                    accuracy: 0.90,
                    f1_score: 0.88,
                    recall: 0.89,
                    precision: 0.87,
                },
            }),
        ));

        assert!(state.update(t0).is_empty());
        assert!(matches!(state.training, TrainingRegion::Ready(_)));

        // Not yet due at 999ms, due at 1000ms.
        assert!(state.update(t0 + Duration::from_millis(999)).is_empty());
        assert_eq!(
            state.update(t0 + Duration::from_millis(1000)),
            vec![ScheduledAction::ReloadMetrics]
        );
    }

    #[test]
    fn test_trainer_failure_renders_inline_error() {
        let mut state = state();
        state.add_event(Event::trainer_with_level(
            "Training failed: HTTP error with status 500".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update(Instant::now());

        match &state.training {
            TrainingRegion::Failed(msg) => assert!(msg.contains("Training failed")),
            other => panic!("expected failed region, got {:?}", other),
        }
        assert!(state.notice.is_none());
    }
}
