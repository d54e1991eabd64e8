use crate::SdkResult;
use crate::error::*;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;
use teamsify_core::MessageCard;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Incoming webhook 客户端
///
/// 每次提交只发一次 POST，失败不重试。
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    pub timeout: Duration,
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 提交 MessageCard
    pub async fn submit(&self, card: &MessageCard, destination: &str) -> SdkResult<()> {
        self.post_json(destination, card).await
    }

    pub async fn post_json<T>(&self, destination: &str, body: &T) -> SdkResult<()>
    where
        T: Serialize + ?Sized,
    {
        let url = Url::parse(destination)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SdkError::UnsupportedScheme(url.scheme().to_string()));
        }

        // serde_json leaves '<', '>' and '&' as they are
        let payload = serde_json::to_vec(body)?;
        debug!(bytes = payload.len(), "posting webhook");

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::WebhookFailed {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "webhook accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use teamsify_core::{EventDetail, build};

    fn card() -> MessageCard {
        build(Some(&EventDetail {
            summary: "octocat pushed main".to_string(),
            text: "see [a<b & c>d](https://example.com/?a=1&b=2)".to_string(),
            ..Default::default()
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_client_with_timeout() {
        let client = WebhookClient::new().with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(WebhookClient::default().timeout, DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    async fn test_submit_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/webhook")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "@type": "MessageCard",
                "summary": "octocat pushed main",
            })))
            .with_status(200)
            .with_body("1")
            .expect(1)
            .create_async()
            .await;

        let url = format!("{}/webhook", server.url());
        WebhookClient::new().submit(&card(), &url).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_markup_is_not_entity_escaped() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r"a<b & c>d\]\(https://example\.com/\?a=1&b=2\)".into()))
            .with_status(200)
            .create_async()
            .await;

        WebhookClient::new().submit(&card(), &server.url()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let error = WebhookClient::new()
            .submit(&card(), &server.url())
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::WebhookFailed { status: 404, .. }));
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let error = WebhookClient::new()
            .submit(&card(), &server.url())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "webhook failed (500): boom");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let error = WebhookClient::new()
            .submit(&card(), "not a url")
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::InvalidUrl(_)));

        let error = WebhookClient::new()
            .submit(&card(), "ftp://example.com/hook")
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[tokio::test]
    async fn test_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            // accept and never answer
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let error = WebhookClient::new()
            .with_timeout(Duration::from_millis(200))
            .submit(&card(), &format!("http://{}/", addr))
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::Timeout));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = WebhookClient::new()
            .submit(&card(), &format!("http://{}/webhookb2/SECRET-TOKEN", addr))
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::HttpError(_)));
        let message = error.to_string();
        assert!(!message.contains("SECRET-TOKEN"), "{}", message);
        assert!(!message.contains("webhookb2"), "{}", message);
    }

    #[tokio::test]
    async fn test_status_survives_truncated_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            // 读完整个请求（JSON 以 '}' 结尾）
            while !request.ends_with(b"}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let error = WebhookClient::new()
            .submit(&card(), &format!("http://{}/", addr))
            .await
            .unwrap_err();
        assert!(matches!(error, SdkError::WebhookFailed { status: 502, .. }));
    }
}
