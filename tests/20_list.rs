mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

fn tids(body: &serde_json::Value) -> Vec<i64> {
    body["caseLaws"]
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["tid"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn category_second_page() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    let (status, body) = app.get("/api/case-laws?category=GST&page=2&limit=10").await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(tids(&body).len(), 2);
    assert_eq!(
        body["pagination"],
        json!({
            "currentPage": 2,
            "totalPages": 2,
            "totalCount": 12,
            "hasNext": false,
            "hasPrev": true
        })
    );
    Ok(())
}

#[tokio::test]
async fn defaults_are_first_page_of_ten_newest_first() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    let (status, body) = app.get("/api/case-laws").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tids(&body), (16..=25).rev().collect::<Vec<_>>());
    assert_eq!(body["pagination"]["totalCount"], 25);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["hasNext"], true);
    assert_eq!(body["pagination"]["hasPrev"], false);
    Ok(())
}

#[tokio::test]
async fn all_sentinel_and_empty_values_mean_no_filter() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    let (_, plain) = app.get("/api/case-laws?limit=5").await?;
    let (_, sentinel) = app.get("/api/case-laws?limit=5&category=all&taxSection=all").await?;
    let (_, empty) = app.get("/api/case-laws?limit=5&category=&search=").await?;
    assert_eq!(plain, sentinel);
    assert_eq!(plain, empty);
    Ok(())
}

#[tokio::test]
async fn listing_embeds_detail_or_null() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    let (_, body) = app.get("/api/case-laws?taxSection=SECTION_16_GST").await?;
    assert_eq!(tids(&body), vec![1]);
    let first = &body["caseLaws"][0];
    assert_eq!(first["taxSection"], "SECTION_16_GST");
    assert_eq!(first["caseDetail"]["doc"], "The appeal is allowed.");

    let (_, body) = app.get("/api/case-laws?limit=1").await?;
    assert!(body["caseLaws"][0]["caseDetail"].is_null());
    Ok(())
}

#[tokio::test]
async fn search_parameter_matches_title_case_insensitively() -> Result<()> {
    let app = common::TestApp::seeded().await?;
    let (_, body) = app.get("/api/case-laws?search=input%20TAX").await?;
    assert_eq!(tids(&body), vec![13]);
    assert_eq!(body["pagination"]["totalCount"], 1);
    Ok(())
}

#[tokio::test]
async fn order_by_is_applied_and_validated() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    let (status, body) = app.get("/api/case-laws?limit=3&orderBy=createdAt%20asc").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tids(&body), vec![1, 2, 3]);

    let (status, body) = app.get("/api/case-laws?orderBy=doc%20desc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn invalid_paging_is_rejected() -> Result<()> {
    let app = common::TestApp::seeded().await?;

    for uri in [
        "/api/case-laws?page=0",
        "/api/case-laws?page=abc",
        "/api/case-laws?limit=-5",
        "/api/case-laws?limit=1.5",
    ] {
        let (status, body) = app.get(uri).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}: {body}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
    Ok(())
}

#[tokio::test]
async fn oversized_limit_is_capped() -> Result<()> {
    let app = common::TestApp::seeded().await?;
    // development max is 1000
    let (status, body) = app.get("/api/case-laws?limit=5000").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tids(&body).len(), 25);
    assert_eq!(body["pagination"]["totalPages"], 1);
    Ok(())
}

#[tokio::test]
async fn injected_config_drives_default_and_maximum_limits() -> Result<()> {
    let mut config = caselaw_api::config::AppConfig::production();
    config.api.default_list_limit = 3;
    config.api.default_search_limit = 2;
    config.api.max_limit = Some(5);
    let app = common::TestApp::with_config(common::seed(), &config).await?;

    let (status, body) = app.get("/api/case-laws").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tids(&body), vec![25, 24, 23]);
    assert_eq!(body["pagination"]["totalPages"], 9);

    let (_, body) = app.get("/api/case-laws?limit=50").await?;
    assert_eq!(tids(&body).len(), 5);
    assert_eq!(body["pagination"]["totalPages"], 5);

    let (_, body) = app.get("/api/case-laws/search/case").await?;
    assert_eq!(tids(&body).len(), 2);
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty_not_an_error() -> Result<()> {
    let app = common::TestApp::seeded().await?;
    let (status, body) = app.get("/api/case-laws?page=9").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(tids(&body).is_empty());
    assert_eq!(body["pagination"]["currentPage"], 9);
    assert_eq!(body["pagination"]["hasNext"], false);
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_500() -> Result<()> {
    let app = common::TestApp::seeded().await?;
    app.store.fail_with("relation \"CaseLaw\" does not exist").await;

    let (status, body) = app.get("/api/case-laws").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert!(body.get("caseLaws").is_none());
    Ok(())
}
