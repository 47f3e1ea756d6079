//! Minimal HTTP GET primitive.
//!
//! The fetcher does not retry, does not cache, and does not interpret the
//! body; callers decide what a status code means.

use crate::{NexError, Result};
use bytes::Bytes;
use reqwest::Client;

/// Body and status of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests with the Nex user agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(crate::USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// GET `url`, returning the body and status whatever the status is.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Transport`] if the request does not complete.
    pub async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }

    /// GET `url` and fail on any non-2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`NexError::Transport`] or [`NexError::Http`].
    pub async fn get_ok(&self, url: &str) -> Result<Bytes> {
        let response = self.get(url).await?;
        if !response.is_success() {
            return Err(NexError::Http {
                status: response.status,
                url: url.to_string(),
            });
        }
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_get_sends_user_agent() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/hello")
            .match_header("user-agent", crate::USER_AGENT)
            .with_status(200)
            .with_body("hi")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let resp = fetcher
            .get(&format!("{}/hello", server.url()))
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(&resp.body[..], b"hi");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned_or_rejected() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("{}/missing", server.url());
        assert_eq!(fetcher.get(&url).await.unwrap().status, 404);
        assert!(matches!(
            fetcher.get_ok(&url).await,
            Err(NexError::Http { status: 404, .. })
        ));
    }
}
