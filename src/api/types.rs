//! Response payloads for the classifier service API.
//!
//! All of these are transient: fetched, folded into view state, and dropped.
//! Nothing here is persisted or mutated in place.

use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// SVM kernel selectable in the training controls.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Kernel {
    #[default]
    Rbf,
    Linear,
    Poly,
    Sigmoid,
}

impl Kernel {
    /// Wire value expected by the training endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kernel::Rbf => "rbf",
            Kernel::Linear => "linear",
            Kernel::Poly => "poly",
            Kernel::Sigmoid => "sigmoid",
        }
    }

    /// Next kernel in selector order, wrapping around.
    pub fn next(&self) -> Kernel {
        match self {
            Kernel::Rbf => Kernel::Linear,
            Kernel::Linear => Kernel::Poly,
            Kernel::Poly => Kernel::Sigmoid,
            Kernel::Sigmoid => Kernel::Rbf,
        }
    }
}

impl Display for Kernel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kernel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rbf" => Ok(Kernel::Rbf),
            "linear" => Ok(Kernel::Linear),
            "poly" => Ok(Kernel::Poly),
            "sigmoid" => Ok(Kernel::Sigmoid),
            _ => Err(()),
        }
    }
}

/// Model quality metrics, each in [0, 1]. Replaced wholesale on every fetch.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct MetricsSnapshot {
    pub accuracy: f64,
    pub f1_score: f64,
    pub recall: f64,
    pub precision: f64,
}

/// Model metadata from `GET /api/model-info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub is_trained: bool,
    #[serde(default)]
    pub model_type: String,
    pub kernel: String,
    pub metrics: MetricsSnapshot,
}

/// Per-URL verdict from `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub url: String,
    pub is_malicious: bool,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    pub probability_legitimate: f64,
    pub probability_malicious: f64,
    pub recommendation: String,
    #[serde(default)]
    pub risk_level: Option<String>,
}

/// Acknowledgement from `POST /api/upload-dataset`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub filename: String,
    pub size: u64,
}

/// Result of `POST /api/train`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingOutcome {
    pub message: String,
    pub kernel: String,
    #[serde(rename = "C", default)]
    pub c: f64,
    pub metrics: MetricsSnapshot,
}

/// Service liveness report from `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Chart specification from `GET /api/metrics-chart`.
///
/// The service text-encodes the spec inside the response body; it is parsed
/// once here and otherwise treated as opaque. Only the chart component looks
/// inside, and only to pull out the first trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload(serde_json::Value);

impl ChartPayload {
    /// Parses the text-encoded chart field.
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self(serde_json::from_str(text)?))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_round_trip() {
        for kernel in [Kernel::Rbf, Kernel::Linear, Kernel::Poly, Kernel::Sigmoid] {
            assert_eq!(kernel.to_string().parse::<Kernel>(), Ok(kernel));
        }
        assert_eq!("RBF".parse::<Kernel>(), Ok(Kernel::Rbf));
        assert!("gaussian".parse::<Kernel>().is_err());
    }

    #[test]
    fn test_kernel_selector_cycles() {
        let mut kernel = Kernel::default();
        for _ in 0..4 {
            kernel = kernel.next();
        }
        assert_eq!(kernel, Kernel::Rbf);
    }

    #[test]
    // Field names follow the service's JSON exactly, including the upper-case C.
    fn test_training_outcome_decodes_service_shape() {
        let body = r#"{
            "message": "Modelo entrenado exitosamente",
            "kernel": "linear",
            "C": 2.5,
            "metrics": {"accuracy": 0.88, "precision": 0.85, "recall": 0.87, "f1_score": 0.86}
        }"#;
        let outcome: TrainingOutcome = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.kernel, "linear");
        assert_eq!(outcome.c, 2.5);
        assert_eq!(outcome.metrics.f1_score, 0.86);
    }

    #[test]
    fn test_prediction_decodes_service_shape() {
        let body = r#"{
            "url": "http://example.com",
            "prediction": "LEGITIMATE",
            "confidence": 0.95,
            "is_malicious": false,
            "probability_malicious": 0.05,
            "probability_legitimate": 0.95,
            "features_count": 8,
            "recommendation": "URL verified as safe",
            "risk_level": "LOW",
            "risk_score": 0
        }"#;
        let prediction: Prediction = serde_json::from_str(body).unwrap();
        assert!(!prediction.is_malicious);
        assert_eq!(prediction.url, "http://example.com");
        assert_eq!(prediction.risk_level.as_deref(), Some("LOW"));
    }

    #[test]
    fn test_chart_payload_parses_embedded_text() {
        let text = r#"{"data": [{"x": ["Accuracy"], "y": [92.0]}], "layout": {"title": "Metrics"}}"#;
        let payload = ChartPayload::from_text(text).unwrap();
        assert!(payload.as_value().get("data").is_some());

        assert!(ChartPayload::from_text("not a chart").is_err());
    }
}
