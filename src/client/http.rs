use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::pagination::{Page, PageRequest};
use crate::services::CaseLawStats;
use crate::types::CaseLawWithDetail;

use super::{CaseLawSource, ClientError, HealthStatus, ListFilters};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed client for a running case law server
#[derive(Debug, Clone)]
pub struct HttpCaseLawClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCaseLawClient {
    /// `base_url` is the server root, e.g. `http://localhost:3001`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus path segments, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(url = %url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// The `error` field of an API error body, or the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn add_page(url: &mut Url, page: PageRequest) {
    url.query_pairs_mut()
        .append_pair("page", &page.page().to_string())
        .append_pair("limit", &page.limit().to_string());
}

#[async_trait]
impl CaseLawSource for HttpCaseLawClient {
    async fn list(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> Result<Page<CaseLawWithDetail>, ClientError> {
        let mut url = self.endpoint(&["api", "case-laws"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("search", search);
            }
            if let Some(category) = filters.category.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("category", category);
            }
            if let Some(section) = filters.tax_section.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("taxSection", section);
            }
        }
        add_page(&mut url, page);
        self.get_json(url).await
    }

    async fn get(&self, tid: i32) -> Result<CaseLawWithDetail, ClientError> {
        let url = self.endpoint(&["api", "case-laws", &tid.to_string()])?;
        match self.get_json(url).await {
            Err(ClientError::Server { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ClientError::NotFound(tid))
            }
            other => other,
        }
    }

    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<CaseLawWithDetail>, ClientError> {
        let mut url = self.endpoint(&["api", "case-laws", "search", query])?;
        add_page(&mut url, page);
        self.get_json(url).await
    }

    async fn stats(&self) -> Result<CaseLawStats, ClientError> {
        let url = self.endpoint(&["api", "case-laws", "stats", "count"])?;
        self.get_json(url).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint(&["api", "health"])?;
        self.get_json(url).await
    }
}
