#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use caselaw_api::config::AppConfig;
use caselaw_api::database::MemoryStore;
use caselaw_api::routes;
use caselaw_api::services::CaseLawService;
use caselaw_api::types::{CaseDetail, CaseLaw, CaseLawWithDetail, Category, TaxSection};

/// A case created `minutes` after 2024-01-01
pub fn case_law(tid: i32, category: &str, minutes: i64) -> CaseLawWithDetail {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes);
    CaseLawWithDetail {
        case_law: CaseLaw {
            id: format!("cl_{tid}"),
            tid,
            authorid: None,
            bench: Some("Division Bench".into()),
            catids: None,
            docsize: Some(1024),
            docsource: "High Court".into(),
            doctype: None,
            fragment: Some(false),
            headline: Some(format!("Headline for case {tid}")),
            description: None,
            numcitedby: 0,
            numcites: 0,
            publishdate: "2024-01-15".into(),
            title: format!("Case {tid}"),
            category: Category::new(category),
            tax_section: None,
            created_at: created,
            updated_at: created,
        },
        case_detail: None,
    }
}

pub fn case_detail(tid: i32, doc: &str) -> CaseDetail {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    CaseDetail {
        id: format!("cd_{tid}"),
        tid,
        agreement: false,
        citetid: None,
        courtcopy: true,
        divtype: Some("judgment".into()),
        doc: doc.into(),
        docsource: "High Court".into(),
        numcitedby: 0,
        numcites: 0,
        publishdate: "2024-01-15".into(),
        query_alert: None,
        title: format!("Case {tid}"),
        created_at: ts,
        updated_at: ts,
    }
}

/// 25 cases: tids 1..=12 are GST, 13..=25 INCOME_TAX. Case 1 carries a
/// judgment and a tax section; case 13 mentions input tax credit.
pub fn seed() -> Vec<CaseLawWithDetail> {
    let mut records: Vec<_> = (1..=25)
        .map(|i| case_law(i, if i <= 12 { "GST" } else { "INCOME_TAX" }, i as i64))
        .collect();
    records[0].case_detail = Some(case_detail(1, "The appeal is allowed."));
    records[0].case_law.tax_section = TaxSection::new("SECTION_16_GST");
    records[12].case_law.title = "Input Tax Credit on Capital Goods".into();
    records
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub router: Router,
}

impl TestApp {
    pub async fn with_records(records: Vec<CaseLawWithDetail>) -> Result<Self> {
        Self::with_config(records, &AppConfig::development()).await
    }

    pub async fn with_config(records: Vec<CaseLawWithDetail>, config: &AppConfig) -> Result<Self> {
        let store = Arc::new(MemoryStore::with_records(records).await?);
        let service = CaseLawService::new(store.clone());
        let router = routes::app_with_config(service, config);
        Ok(Self { store, router })
    }

    pub async fn seeded() -> Result<Self> {
        Self::with_records(seed()).await
    }

    /// GET `uri` through the router without a socket
    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, body))
    }
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Serve `router` on an unused local port
    pub async fn spawn(router: Router) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self { port, base_url };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/api/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}
