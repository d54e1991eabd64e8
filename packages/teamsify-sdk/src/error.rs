use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("webhook request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    HttpError(#[source] reqwest::Error),

    #[error("webhook failed ({status}): {body}")]
    WebhookFailed { status: u16, body: String },
}

impl From<reqwest::Error> for SdkError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SdkError::Timeout
        } else {
            // reqwest 的错误信息带完整 URL，webhook URL 即密钥
            SdkError::HttpError(error.without_url())
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_failed_display() {
        let error = SdkError::WebhookFailed {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(error.to_string(), "webhook failed (404): not found");
    }

    #[test]
    fn test_invalid_url_display() {
        let error: SdkError = url::Url::parse("::").unwrap_err().into();
        assert!(error.to_string().starts_with("Invalid URL: "));
    }

    #[test]
    fn test_sdk_result_type() {
        fn returns_error() -> SdkResult<()> {
            Err(SdkError::Timeout)
        }

        assert!(matches!(returns_error(), Err(SdkError::Timeout)));
    }
}
