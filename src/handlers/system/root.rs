use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Case Law API",
        "version": version,
        "description": "Paginated, filterable read API over case law records",
        "endpoints": {
            "list": "/api/case-laws?search&category&taxSection&page&limit&orderBy",
            "show": "/api/case-laws/:tid",
            "stats": "/api/case-laws/stats/count",
            "search": "/api/case-laws/search/:query?page&limit&orderBy",
            "health": "/api/health",
            "test_db": "/api/test-db",
        }
    }))
}
