//! HTTP access to the Faltadas service.
//!
//! [`FaltadasBackend`] is the seam between the app and the network so the
//! sync layer can be driven by a fake in tests. [`HttpBackend`] is the real
//! implementation on top of `reqwest`.

use crate::api::error::{ApiError, ApiResult};
use crate::api::model::{CountResponse, Faltada, NewFaltada};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait FaltadasBackend: Send + Sync {
    /// `GET /faltadas/count`
    async fn fetch_count(&self) -> ApiResult<u64>;
    /// `GET /faltadas/`
    async fn fetch_events(&self) -> ApiResult<Vec<Faltada>>;
    /// `POST /faltadas/`
    async fn create_event(&self, author: String, reason: String) -> ApiResult<()>;
    /// `DELETE /faltadas/`
    async fn clear_history(&self) -> ApiResult<()>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("faltadas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/faltadas/{}", self.base_url, path)
    }
}

#[async_trait]
impl FaltadasBackend for HttpBackend {
    async fn fetch_count(&self) -> ApiResult<u64> {
        let body: CountResponse = self
            .client
            .get(self.url("count"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.count)
    }

    async fn fetch_events(&self) -> ApiResult<Vec<Faltada>> {
        let events = self
            .client
            .get(self.url(""))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(events)
    }

    async fn create_event(&self, author: String, reason: String) -> ApiResult<()> {
        self.client
            .post(self.url(""))
            .json(&NewFaltada { author, reason })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn clear_history(&self) -> ApiResult<()> {
        self.client
            .delete(self.url(""))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    struct Captured {
        request_line: String,
        body: String,
    }

    /// Serve exactly one request with a canned response and hand back what
    /// the client sent.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                assert!(n > 0, "connection closed before headers");
            };
            let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            while raw.len() < header_end + content_length {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            Captured {
                request_line: head.lines().next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&raw[header_end..]).to_string(),
            }
        });
        (base, handle)
    }

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let b = backend("https://example.com//");
        assert_eq!(b.base_url(), "https://example.com");
        assert_eq!(b.url("count"), "https://example.com/faltadas/count");
        assert_eq!(b.url(""), "https://example.com/faltadas/");
    }

    #[tokio::test]
    async fn test_fetch_count() {
        let (base, server) = serve_once("200 OK", r#"{"count":12}"#).await;
        assert_eq!(backend(&base).fetch_count().await.unwrap(), 12);
        let req = server.await.unwrap();
        assert_eq!(req.request_line, "GET /faltadas/count HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_events_preserves_order() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":2,"author":"Bob","motivo":"Late","created_at":"2024-02-01T09:00:00"},
                {"id":1,"author":"Alice","motivo":"Missed","created_at":"2024-01-01T09:00:00"}]"#,
        )
        .await;
        let events = backend(&base).fetch_events().await.unwrap();
        assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(server.await.unwrap().request_line, "GET /faltadas/ HTTP/1.1");
    }

    #[tokio::test]
    async fn test_create_event_sends_motivo() {
        let (base, server) = serve_once("200 OK", r#"{}"#).await;
        backend(&base)
            .create_event("Alice".into(), "Missed".into())
            .await
            .unwrap();
        let req = server.await.unwrap();
        assert_eq!(req.request_line, "POST /faltadas/ HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body, serde_json::json!({"author": "Alice", "motivo": "Missed"}));
    }

    #[tokio::test]
    async fn test_clear_history() {
        let (base, server) = serve_once("200 OK", r#"{"message":"ok"}"#).await;
        backend(&base).clear_history().await.unwrap();
        assert_eq!(server.await.unwrap().request_line, "DELETE /faltadas/ HTTP/1.1");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let err = backend(&base).clear_history().await.unwrap_err();
        assert!(matches!(err, ApiError::Status(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_count_is_reported() {
        let (base, server) = serve_once("200 OK", r#"{"total":3}"#).await;
        let err = backend(&base).fetch_count().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let err = backend(&base).fetch_count().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
