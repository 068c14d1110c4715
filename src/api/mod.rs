use crate::api::error::ApiError;
use crate::api::types::{
    ChartPayload, Kernel, ModelInfo, Prediction, ServiceHealth, TrainingOutcome, UploadReceipt,
};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ClassifierApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Service liveness and model availability.
    async fn health(&self) -> Result<ServiceHealth, ApiError>;

    /// Current model metadata and quality metrics.
    async fn model_info(&self) -> Result<ModelInfo, ApiError>;

    /// Chart specification for the metrics chart region.
    async fn metrics_chart(&self) -> Result<ChartPayload, ApiError>;

    /// Classify a single URL.
    async fn predict(&self, url: &str) -> Result<Prediction, ApiError>;

    /// Upload a training dataset as a CSV file.
    async fn upload_dataset(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<UploadReceipt, ApiError>;

    /// Retrain the model with the given kernel and regularization value.
    async fn train(&self, kernel: Kernel, c: f64) -> Result<TrainingOutcome, ApiError>;
}
