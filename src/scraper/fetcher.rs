use std::time::Duration;

use rand::Rng;
use reqwest::{Client, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::traits::Fetcher;
use crate::config::AppConfig;
use crate::model::FetchError;

/// reqwest-backed fetcher with retries on transport errors, 429 and 5xx.
pub struct HttpFetcher {
    client: Client,
    max_retries: u32,
    base_backoff: Duration,
}

impl HttpFetcher {
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        max_retries: u32,
        base_backoff: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            base_backoff,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.request_timeout_seconds),
            config.max_retries,
            Duration::from_secs(1),
        )
    }

    /// Exponential backoff with up to 25% random jitter.
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.base_backoff.saturating_mul(2u32.saturating_pow(attempt));
        let jitter_cap = (base.as_millis() / 4) as u64;
        let jitter = if jitter_cap > 0 {
            rand::rng().random_range(0..=jitter_cap)
        } else {
            0
        };
        base + Duration::from_millis(jitter)
    }

    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

fn is_retryable(error: &FetchError) -> bool {
    match error {
        FetchError::Http(_) | FetchError::Timeout(_) => true,
        FetchError::Status { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            match self.attempt(url).await {
                Ok(body) => {
                    debug!(url, bytes = body.len(), "Fetched");
                    return Ok(body);
                }
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    let wait = self.backoff(attempt);
                    warn!(
                        url,
                        attempt = attempt + 1,
                        wait_ms = wait.as_millis() as u64,
                        "Fetch failed, retrying: {}",
                        e
                    );
                    sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher(max_retries: u32) -> HttpFetcher {
        HttpFetcher::new(
            "deal-sync-test",
            Duration::from_secs(5),
            max_retries,
            Duration::from_millis(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/feed")
            .match_header("user-agent", "deal-sync-test")
            .with_status(200)
            .with_body("<rss/>")
            .create_async()
            .await;

        let body = fetcher(0)
            .fetch(&format!("{}/feed", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "<rss/>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let err = fetcher(3)
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_errors_are_retried_until_exhausted() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/flaky")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let err = fetcher(2)
            .fetch(&format!("{}/flaky", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        mock.assert_async().await;
    }

    #[test]
    fn backoff_grows_exponentially() {
        let f = HttpFetcher::new("ua", Duration::from_secs(1), 3, Duration::from_millis(100))
            .unwrap();
        let first = f.backoff(0);
        let third = f.backoff(2);
        assert!(first >= Duration::from_millis(100) && first <= Duration::from_millis(125));
        assert!(third >= Duration::from_millis(400) && third <= Duration::from_millis(500));
    }
}
