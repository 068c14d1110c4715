use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps API failures to a display log level for the activity log.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth failures, malformed responses
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_api_error_by_status() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_api_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(400)), LogLevel::Warn);
    }

    #[test]
    fn test_classify_decode_error() {
        let classifier = ErrorClassifier::new();
        let decode = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_api_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }
}
