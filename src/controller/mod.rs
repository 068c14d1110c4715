//! Dashboard operations.
//!
//! Each user-facing operation is an independent async call against the API
//! trait: it emits a progress event, performs at most one request, and emits
//! a terminal success or error event carrying the typed response. There is no
//! retry and no cancellation; concurrent invocations proceed independently
//! and the view state folds their events in arrival order.

use crate::api::ClassifierApi;
use crate::api::types::Kernel;
use crate::consts::cli_consts::controls::TRAIN_TRIGGER_BUSY_LABEL;
use crate::error_classifier::ErrorClassifier;
use crate::events::{ActionSource, Event, EventType, ResponsePayload};
use crate::logging::LogLevel;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::mpsc;

pub mod trigger;
pub use trigger::{BusyGuard, TriggerControl};

/// Client-side input rejection. Raised before any request is issued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a URL to analyze")]
    EmptyUrl,

    #[error("Only CSV files are accepted: {filename}")]
    NotCsv { filename: String },
}

/// Rejects empty (or whitespace-only) URL input, returning the trimmed URL.
pub fn validate_url_input(input: &str) -> Result<&str, ValidationError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    Ok(url)
}

/// Name check only; file contents are not inspected.
pub fn validate_dataset_filename(filename: &str) -> Result<(), ValidationError> {
    if !filename.ends_with(".csv") {
        return Err(ValidationError::NotCsv {
            filename: filename.to_string(),
        });
    }
    Ok(())
}

/// Event sending utilities for controller operations.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_metrics_event(&self, msg: String, event_type: EventType, level: LogLevel) {
        self.send_event(Event::metrics_with_level(msg, event_type, level))
            .await;
    }

    pub async fn send_chart_event(&self, msg: String, event_type: EventType, level: LogLevel) {
        self.send_event(Event::chart_with_level(msg, event_type, level))
            .await;
    }

    pub async fn send_analyzer_event(&self, msg: String, event_type: EventType, level: LogLevel) {
        self.send_event(Event::analyzer_with_level(msg, event_type, level))
            .await;
    }

    pub async fn send_uploader_event(&self, msg: String, event_type: EventType, level: LogLevel) {
        self.send_event(Event::uploader_with_level(msg, event_type, level))
            .await;
    }

    pub async fn send_trainer_event(&self, msg: String, event_type: EventType, level: LogLevel) {
        self.send_event(Event::trainer_with_level(msg, event_type, level))
            .await;
    }
}

/// Drives the five dashboard operations against the classifier API.
pub struct DashboardController {
    api: Arc<dyn ClassifierApi>,
    events: EventSender,
    train_trigger: Arc<Mutex<TriggerControl>>,
    classifier: ErrorClassifier,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn ClassifierApi>,
        events: EventSender,
        train_trigger: Arc<Mutex<TriggerControl>>,
    ) -> Self {
        Self {
            api,
            events,
            train_trigger,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn train_trigger(&self) -> Arc<Mutex<TriggerControl>> {
        Arc::clone(&self.train_trigger)
    }

    /// Loads model metadata and metrics, then chains into the chart load.
    ///
    /// On failure the metric slots keep their prior values; only the status
    /// region degrades. The failure is terminal for this invocation.
    pub async fn load_metrics(&self) {
        self.events
            .send_metrics_event(
                "Fetching model metrics...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        match self.api.model_info().await {
            Ok(info) => {
                let msg = format!(
                    "Model metrics loaded: {} kernel, F1 {:.1}%",
                    info.kernel,
                    info.metrics.f1_score * 100.0
                );
                self.events
                    .send_event(Event::with_payload(
                        ActionSource::MetricsLoader,
                        msg,
                        EventType::Success,
                        LogLevel::Info,
                        ResponsePayload::Metrics(info),
                    ))
                    .await;

                self.load_metrics_chart().await;
            }
            Err(e) => {
                let level = self.classifier.classify_api_error(&e);
                self.events
                    .send_metrics_event(
                        format!("Failed to load model metrics: {}", e),
                        EventType::Error,
                        level,
                    )
                    .await;
            }
        }
    }

    /// Fetches the chart payload for the chart region. A failure degrades
    /// that one region to a placeholder and touches nothing else.
    pub async fn load_metrics_chart(&self) {
        match self.api.metrics_chart().await {
            Ok(payload) => {
                self.events
                    .send_event(Event::with_payload(
                        ActionSource::ChartLoader,
                        "Metrics chart updated".to_string(),
                        EventType::Success,
                        LogLevel::Debug,
                        ResponsePayload::Chart(payload),
                    ))
                    .await;
            }
            Err(e) => {
                let level = self.classifier.classify_api_error(&e);
                self.events
                    .send_chart_event(
                        format!("Failed to load metrics chart: {}", e),
                        EventType::Error,
                        level,
                    )
                    .await;
            }
        }
    }

    /// Analyzes a single URL. Empty input raises a blocking notice and issues
    /// no request.
    pub async fn analyze_url(&self, input: &str) {
        let url = match validate_url_input(input) {
            Ok(url) => url,
            Err(e) => {
                self.events
                    .send_analyzer_event(e.to_string(), EventType::Error, LogLevel::Warn)
                    .await;
                return;
            }
        };

        self.events
            .send_analyzer_event(
                format!("Analyzing {}...", url),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        match self.api.predict(url).await {
            Ok(prediction) => {
                let verdict = if prediction.is_malicious {
                    "MALICIOUS"
                } else {
                    "SAFE"
                };
                let msg = format!(
                    "Analysis complete: {} ({:.0}% confidence)",
                    verdict,
                    prediction.confidence * 100.0
                );
                self.events
                    .send_event(Event::with_payload(
                        ActionSource::Analyzer,
                        msg,
                        EventType::Success,
                        LogLevel::Info,
                        ResponsePayload::Prediction(prediction),
                    ))
                    .await;
            }
            Err(e) => {
                let level = self.classifier.classify_api_error(&e);
                self.events
                    .send_analyzer_event(
                        format!("URL analysis failed: {}", e),
                        EventType::Error,
                        level,
                    )
                    .await;
            }
        }
    }

    /// Uploads a dataset file. A filename without the `.csv` suffix raises a
    /// blocking notice and issues no request.
    pub async fn upload_dataset(&self, path: &Path) {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Err(e) = validate_dataset_filename(&filename) {
            self.events
                .send_uploader_event(e.to_string(), EventType::Error, LogLevel::Warn)
                .await;
            return;
        }

        self.events
            .send_uploader_event(
                format!("Uploading dataset {}...", filename),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) => {
                self.events
                    .send_uploader_event(
                        format!("Failed to read dataset file: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
                return;
            }
        };

        match self.api.upload_dataset(&filename, contents).await {
            Ok(receipt) => {
                self.events
                    .send_uploader_event(
                        format!("{} ({} bytes)", receipt.message, receipt.size),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                let level = self.classifier.classify_api_error(&e);
                self.events
                    .send_uploader_event(
                        format!("Dataset upload failed: {}", e),
                        EventType::Error,
                        level,
                    )
                    .await;
            }
        }
    }

    /// Runs a training request. The trigger is disabled and relabeled for the
    /// duration; the guard restores it on every exit path. A successful run
    /// is followed by a metrics reload, scheduled by the session loop 1000 ms
    /// out so a newer schedule can supersede it.
    pub async fn train_model(&self, kernel: Kernel, c: f64) {
        // Captures the restore label before anything else can fail.
        let _guard = BusyGuard::acquire(&self.train_trigger, TRAIN_TRIGGER_BUSY_LABEL);

        self.events
            .send_trainer_event(
                format!("Training model ({} kernel, C={:.2})...", kernel, c),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        match self.api.train(kernel, c).await {
            Ok(outcome) => {
                let msg = format!(
                    "{}: {} kernel, F1 {:.1}%",
                    outcome.message,
                    outcome.kernel,
                    outcome.metrics.f1_score * 100.0
                );
                self.events
                    .send_event(Event::with_payload(
                        ActionSource::Trainer,
                        msg,
                        EventType::Success,
                        LogLevel::Info,
                        ResponsePayload::Training(outcome),
                    ))
                    .await;
            }
            Err(e) => {
                let level = self.classifier.classify_api_error(&e);
                self.events
                    .send_trainer_event(format!("Training failed: {}", e), EventType::Error, level)
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockClassifierApi;
    use crate::api::error::ApiError;
    use crate::api::types::{MetricsSnapshot, ModelInfo, Prediction, TrainingOutcome, UploadReceipt};
    use crate::consts::cli_consts::controls::TRAIN_TRIGGER_LABEL;

    fn snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            accuracy: 0.92,
            f1_score: 0.90,
            recall: 0.91,
            precision: 0.89,
        }
    }

    fn controller_with(api: MockClassifierApi) -> (DashboardController, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(32);
        let controller = DashboardController::new(
            Arc::new(api),
            EventSender::new(sender),
            Arc::new(Mutex::new(TriggerControl::default())),
        );
        (controller, receiver)
    }

    fn drain(receiver: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_validate_url_input() {
        assert_eq!(validate_url_input(" http://a.com "), Ok("http://a.com"));
        assert_eq!(validate_url_input(""), Err(ValidationError::EmptyUrl));
        assert_eq!(validate_url_input("   "), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn test_validate_dataset_filename() {
        assert_eq!(validate_dataset_filename("urls.csv"), Ok(()));
        assert!(validate_dataset_filename("urls.txt").is_err());
        assert!(validate_dataset_filename("csv").is_err());
    }

    #[tokio::test]
    // Empty input must not reach the network; it surfaces as a blocking notice.
    async fn test_analyze_empty_url_issues_no_request() {
        let mut api = MockClassifierApi::new();
        api.expect_predict().never();

        let (controller, mut receiver) = controller_with(api);
        controller.analyze_url("   ").await;

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, ActionSource::Analyzer);
        assert_eq!(events[0].event_type, EventType::Error);
        assert_eq!(events[0].msg, "Enter a URL to analyze");
    }

    #[tokio::test]
    async fn test_analyze_success_carries_prediction_payload() {
        let mut api = MockClassifierApi::new();
        api.expect_predict()
            .withf(|url| url == "http://example.com")
            .times(1)
            .returning(|url| {
                Ok(Prediction {
                    url: url.to_string(),
                    is_malicious: true,
                    confidence: 0.82,
                    probability_legitimate: 0.18,
                    probability_malicious: 0.82,
                    recommendation: "Avoid sharing personal information".to_string(),
                    risk_level: Some("HIGH".to_string()),
                })
            });

        let (controller, mut receiver) = controller_with(api);
        controller.analyze_url(" http://example.com ").await;

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Waiting);
        assert_eq!(events[1].event_type, EventType::Success);
        match &events[1].payload {
            Some(ResponsePayload::Prediction(p)) => {
                assert!(p.is_malicious);
                assert_eq!(p.url, "http://example.com");
            }
            other => panic!("expected prediction payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_csv_upload_issues_no_request() {
        let mut api = MockClassifierApi::new();
        api.expect_upload_dataset().never();

        let (controller, mut receiver) = controller_with(api);
        controller.upload_dataset(Path::new("dataset.txt")).await;

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, ActionSource::DatasetUploader);
        assert_eq!(events[0].event_type, EventType::Error);
    }

    #[tokio::test]
    async fn test_csv_upload_posts_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.csv");
        std::fs::write(&path, b"url,label\nhttp://a.com,0\n").unwrap();

        let mut api = MockClassifierApi::new();
        api.expect_upload_dataset()
            .withf(|name, contents| name == "urls.csv" && !contents.is_empty())
            .times(1)
            .returning(|name, contents| {
                Ok(UploadReceipt {
                    message: "Dataset uploaded".to_string(),
                    filename: name.to_string(),
                    size: contents.len() as u64,
                })
            });

        let (controller, mut receiver) = controller_with(api);
        controller.upload_dataset(&path).await;

        let events = drain(&mut receiver);
        assert_eq!(events.last().unwrap().event_type, EventType::Success);
    }

    #[tokio::test]
    async fn test_metrics_success_chains_into_chart_load() {
        let mut api = MockClassifierApi::new();
        api.expect_model_info().times(1).returning(|| {
            Ok(ModelInfo {
                is_trained: true,
                model_type: "Support Vector Machine".to_string(),
                kernel: "rbf".to_string(),
                metrics: snapshot(),
            })
        });
        api.expect_metrics_chart()
            .times(1)
            .returning(|| Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            }));

        let (controller, mut receiver) = controller_with(api);
        controller.load_metrics().await;

        let events = drain(&mut receiver);
        let sources: Vec<ActionSource> = events.iter().map(|e| e.source).collect();
        assert!(sources.contains(&ActionSource::MetricsLoader));
        assert!(sources.contains(&ActionSource::ChartLoader));
    }

    #[tokio::test]
    // A metrics failure is terminal: no chart request follows.
    async fn test_metrics_failure_does_not_chain() {
        let mut api = MockClassifierApi::new();
        api.expect_model_info().times(1).returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        api.expect_metrics_chart().never();

        let (controller, mut receiver) = controller_with(api);
        controller.load_metrics().await;

        let events = drain(&mut receiver);
        assert_eq!(events.last().unwrap().event_type, EventType::Error);
    }

    #[tokio::test]
    async fn test_train_restores_trigger_on_success() {
        let mut api = MockClassifierApi::new();
        api.expect_train().times(1).returning(|kernel, c| {
            Ok(TrainingOutcome {
                message: "Model trained".to_string(),
                kernel: kernel.to_string(),
                c,
                metrics: snapshot(),
            })
        });

        let (controller, _receiver) = controller_with(api);
        let trigger = controller.train_trigger();
        controller.train_model(Kernel::Linear, 2.0).await;

        let state = trigger.lock().unwrap();
        assert!(state.enabled);
        assert_eq!(state.label, TRAIN_TRIGGER_LABEL);
    }

    #[tokio::test]
    async fn test_train_restores_trigger_on_failure() {
        let mut api = MockClassifierApi::new();
        api.expect_train().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 500,
                message: "training crashed".to_string(),
            })
        });

        let (controller, mut receiver) = controller_with(api);
        let trigger = controller.train_trigger();
        controller.train_model(Kernel::Rbf, 1.0).await;

        let state = trigger.lock().unwrap();
        assert!(state.enabled);
        assert_eq!(state.label, TRAIN_TRIGGER_LABEL);
        drop(state);

        let events = drain(&mut receiver);
        assert_eq!(events.last().unwrap().event_type, EventType::Error);
        assert_eq!(events.last().unwrap().source, ActionSource::Trainer);
    }
}
