//! Dashboard state management
//!
//! One record per display region, replaced wholesale by the updaters. The
//! renderer only ever reads these records; nothing here touches the network.

use crate::api::types::Kernel;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, controls};
use crate::controller::TriggerControl;
use crate::environment::Environment;
use crate::events::Event;
use crate::schedule::Scheduler;
use crate::ui::dashboard::utils::{ConfidenceColor, MetricColor, format_c_readout};

use std::collections::VecDeque;
use std::time::Instant;

/// Status line under the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusRegion {
    Loading,
    Ready { kernel: String, f1_text: String },
    Failed,
}

impl StatusRegion {
    pub fn line(&self) -> String {
        match self {
            StatusRegion::Loading => "Loading model info...".to_string(),
            StatusRegion::Ready { kernel, f1_text } => {
                format!("Model: {} | F1 {}", kernel, f1_text)
            }
            StatusRegion::Failed => "Model info unavailable".to_string(),
        }
    }
}

/// One formatted metric value with its color class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSlot {
    pub text: String,
    pub color: MetricColor,
}

/// The four metric display slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSlots {
    pub accuracy: MetricSlot,
    pub f1: MetricSlot,
    pub recall: MetricSlot,
    pub precision: MetricSlot,
}

/// Chart region: a bar view extracted from the service's chart spec, or a
/// static placeholder when the payload could not be obtained or understood.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRegion {
    Loading,
    Ready(ChartView),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub bars: Vec<(String, u64)>,
}

/// Verdict badge for an analyzed URL.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    Malicious,
    Safe,
}

/// Fully formatted analysis result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub verdict: Verdict,
    pub confidence_text: String,
    pub confidence_percent: u8,
    pub confidence_color: ConfidenceColor,
    pub probability_legitimate_text: String,
    pub probability_malicious_text: String,
    pub url: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRegion {
    Idle,
    Loading,
    Ready(PredictionView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingView {
    pub message: String,
    pub kernel: String,
    pub f1_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrainingRegion {
    Idle,
    Busy,
    Ready(TrainingView),
    Failed(String),
}

/// Kernel selector and regularization slider, with the mirrored C readout.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsRegion {
    pub kernel: Kernel,
    pub c_value: f64,
    pub c_readout: String,
}

impl Default for ControlsRegion {
    fn default() -> Self {
        // The readout mirrors the slider once at initialization.
        Self {
            kernel: Kernel::default(),
            c_value: controls::C_DEFAULT,
            c_readout: format_c_readout(controls::C_DEFAULT),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking notice overlaying the dashboard until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// What the key handler is currently capturing text for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputMode {
    Normal,
    EditingUrl,
    EditingPath,
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub buffer: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
        }
    }
}

/// Dashboard state: per-region view records plus the event queue and timers.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    pub status: StatusRegion,
    pub metric_slots: Option<MetricSlots>,
    /// Whether the F1 slot is currently highlighted after a fresh snapshot.
    pub f1_highlighted: bool,
    pub chart: ChartRegion,
    pub analysis: AnalysisRegion,
    pub training: TrainingRegion,
    pub controls: ControlsRegion,
    pub notice: Option<Notice>,
    /// Text entry capture for the URL and dataset-path prompts.
    pub input: InputState,
    /// Renderer's snapshot of the shared train trigger, refreshed every tick.
    pub trigger_view: TriggerControl,

    /// Deferred actions keyed by region (highlight expiry, metrics reload).
    pub timers: Scheduler,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant) -> Self {
        Self {
            environment,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            status: StatusRegion::Loading,
            metric_slots: None,
            f1_highlighted: false,
            chart: ChartRegion::Loading,
            analysis: AnalysisRegion::Idle,
            training: TrainingRegion::Idle,
            controls: ControlsRegion::default(),
            notice: None,
            input: InputState::default(),
            trigger_view: TriggerControl::default(),
            timers: Scheduler::new(),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
