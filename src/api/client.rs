//! Classifier Service Client
//!
//! A client for the URL classifier service, covering metrics retrieval,
//! per-URL prediction, dataset upload, and training.

use crate::api::ClassifierApi;
use crate::api::error::ApiError;
use crate::api::types::{
    ChartPayload, Kernel, ModelInfo, Prediction, ServiceHealth, TrainingOutcome, UploadReceipt,
};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("urlshield/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct PredictRequest<'a> {
    url: &'a str,
}

/// Wire shape of `GET /api/metrics-chart`: the chart spec arrives
/// text-encoded inside a JSON envelope.
#[derive(serde::Deserialize)]
struct ChartEnvelope {
    chart: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    base_url: String,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        let base_url = environment.api_url();
        Self::with_base_url(environment, base_url)
    }

    /// Builds a client against an explicit base URL, e.g. a config override.
    pub fn with_base_url(environment: Environment, base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Self::decode_response(&body)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Self::decode_response(&body)
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .multipart(form)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Self::decode_response(&body)
    }
}

#[async_trait::async_trait]
impl ClassifierApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn health(&self) -> Result<ServiceHealth, ApiError> {
        self.get_json("/health").await
    }

    async fn model_info(&self) -> Result<ModelInfo, ApiError> {
        self.get_json("/api/model-info").await
    }

    async fn metrics_chart(&self) -> Result<ChartPayload, ApiError> {
        let envelope: ChartEnvelope = self.get_json("/api/metrics-chart").await?;
        ChartPayload::from_text(&envelope.chart).map_err(ApiError::Decode)
    }

    async fn predict(&self, url: &str) -> Result<Prediction, ApiError> {
        self.post_json("/api/predict", &PredictRequest { url })
            .await
    }

    async fn upload_dataset(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<UploadReceipt, ApiError> {
        let part = Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);
        self.post_multipart("/api/upload-dataset", form).await
    }

    async fn train(&self, kernel: Kernel, c: f64) -> Result<TrainingOutcome, ApiError> {
        let form = Form::new()
            .text("kernel", kernel.as_str())
            .text("C", c.to_string());
        self.post_multipart("/api/train", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Trailing and leading slashes must not produce doubled separators.
    fn test_build_url_joins_cleanly() {
        let client =
            ApiClient::with_base_url(Environment::Local, "http://localhost:8000/".to_string());
        assert_eq!(
            client.build_url("/api/model-info"),
            "http://localhost:8000/api/model-info"
        );
        assert_eq!(client.build_url("health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_decode_response_reports_parse_failures() {
        let result: Result<ModelInfo, ApiError> = ApiClient::decode_response("<html>502</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_chart_envelope_holds_text_encoded_spec() {
        let body = r#"{"chart": "{\"data\": [], \"layout\": {}}"}"#;
        let envelope: ChartEnvelope = serde_json::from_str(body).unwrap();
        let payload = ChartPayload::from_text(&envelope.chart).unwrap();
        assert!(payload.as_value().get("layout").is_some());
    }
}
