mod common;

use anyhow::Result;
use caselaw_api::client::{
    CaseLawSource, CaseListQuery, ClientError, Degraded, HttpCaseLawClient, ListFilters, PageSummary,
};
use caselaw_api::pagination::PageRequest;

async fn serve_seeded() -> Result<(common::TestApp, common::TestServer)> {
    let app = common::TestApp::seeded().await?;
    let server = common::TestServer::spawn(app.router.clone()).await?;
    Ok((app, server))
}

#[tokio::test]
async fn client_round_trip() -> Result<()> {
    let (_app, server) = serve_seeded().await?;
    let client = HttpCaseLawClient::new(&server.base_url)?;

    let health = client.health().await?;
    assert_eq!(health.status, "OK");

    let page = client.list(&ListFilters::category("GST"), PageRequest::new(2, 10)?).await?;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total_count, 12);
    assert!(page.pagination.has_prev);

    let record = client.get(1).await?;
    assert_eq!(record.tid(), 1);
    assert_eq!(record.case_detail.map(|d| d.doc), Some("The appeal is allowed.".to_string()));

    let found = client.search("input tax credit", PageRequest::new(1, 20)?).await?;
    assert_eq!(found.items.iter().map(|r| r.tid()).collect::<Vec<_>>(), vec![13]);

    let stats = client.stats().await?;
    assert_eq!(stats.total, 25);
    assert_eq!(stats.by_category.get("GST"), Some(&12));
    assert_eq!(client.count_for_category("INCOME_TAX").await?, 13);
    assert_eq!(client.count_for_category("ITAT").await?, 0);
    Ok(())
}

#[tokio::test]
async fn client_maps_404_to_not_found() -> Result<()> {
    let (_app, server) = serve_seeded().await?;
    let client = HttpCaseLawClient::new(&server.base_url)?;

    assert!(matches!(client.get(99999).await, Err(ClientError::NotFound(99999))));
    Ok(())
}

#[tokio::test]
async fn list_query_walks_pages() -> Result<()> {
    let (_app, server) = serve_seeded().await?;
    let client = HttpCaseLawClient::new(&server.base_url)?;

    let view = CaseListQuery::new(5).fetch(&client).await?;
    assert_eq!(view.total_pages(), 5);
    assert_eq!(view.visible_pages(3), vec![2, 3, 4]);

    let view = view.go_to(4).fetch(&client).await?;
    assert_eq!(view.query.page(), 4);
    assert_eq!(view.summary(), PageSummary { first: 16, last: 20, total: 25 });
    assert_eq!(view.items().first().map(|r| r.tid()), Some(10));

    let view = view.query.with_category("GST").fetch(&client).await?;
    assert_eq!(view.query.page(), 1);
    assert_eq!(view.total_count(), 12);
    Ok(())
}

#[tokio::test]
async fn degraded_mode_covers_server_failures_only() -> Result<()> {
    let (app, server) = serve_seeded().await?;
    let client = HttpCaseLawClient::new(&server.base_url)?;
    let degraded = Degraded::new(client, common::seed().into_iter().take(3).collect());

    // healthy server: the server's answer is used, 404 included
    assert!(matches!(degraded.get(99999).await, Err(ClientError::NotFound(_))));

    app.store.fail_with("connection reset").await;

    assert_eq!(degraded.get(2).await?.tid(), 2);
    assert!(matches!(degraded.get(20).await, Err(ClientError::Server { status: 500, .. })));

    let found = degraded.search("case 3", PageRequest::new(1, 10)?).await?;
    assert_eq!(found.items.len(), 1);

    assert!(degraded.list(&ListFilters::default(), PageRequest::new(1, 10)?).await.is_err());
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> Result<()> {
    let port = portpicker::pick_unused_port().expect("free port");
    let client = HttpCaseLawClient::new(&format!("http://127.0.0.1:{port}"))?;
    assert!(matches!(client.health().await, Err(ClientError::Transport(_))));
    Ok(())
}
