use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use tokio::sync::Semaphore;
use url::Url;

use crate::progress::Progress;

/// Shared HTTP client for the feed fetches. Every request carries the client
/// timeout, so a stalled feed fails over instead of hanging the run.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    semaphore: Arc<Semaphore>,
    progress: Option<Arc<Progress>>,
}

impl Fetcher {
    pub fn new(
        user_agent: &str,
        max_concurrency: usize,
        timeout: Duration,
        progress: Option<Arc<Progress>>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(max_concurrency.max(1))),
            progress,
        })
    }

    pub async fn get_bytes(&self, url: Url) -> anyhow::Result<Bytes> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .context("acquire download permit")?;

        if let Some(p) = &self.progress {
            p.http_start(&url);
        }

        let result = self.fetch_once(&url).await;
        if let Some(p) = &self.progress {
            match &result {
                Ok(bytes) => p.http_ok(&url, bytes.len()),
                Err(_) => p.http_err(&url),
            }
        }
        result
    }

    async fn fetch_once(&self, url: &Url) -> anyhow::Result<Bytes> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, status));
        }

        resp.bytes().await.context("read response body")
    }
}
