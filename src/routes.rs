use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, AppConfig, Environment, SecurityConfig};
use crate::handlers::{case_laws, system};
use crate::services::CaseLawService;

/// The full router, configured from the global config
pub fn app(service: CaseLawService) -> Router {
    app_with_config(service, config::config())
}

pub fn app_with_config(service: CaseLawService, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/api/health", get(system::health))
        .route("/api/test-db", get(system::test_db))
        .merge(case_law_routes())
        .fallback(system::not_found)
        .layer(Extension(service))
        .layer(Extension(config.api.clone()));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security, config.environment));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn case_law_routes() -> Router {
    Router::new()
        .route("/api/case-laws", get(case_laws::list_get))
        // Static segments win over `:tid`
        .route("/api/case-laws/stats/count", get(case_laws::stats_get))
        .route("/api/case-laws/search/:query", get(case_laws::search_get))
        .route("/api/case-laws/:tid", get(case_laws::show_get))
}

fn cors_layer(security: &SecurityConfig, environment: Environment) -> CorsLayer {
    if security.cors_origins.is_empty() {
        if environment != Environment::Development {
            tracing::warn!("No CORS origins configured; allowing any origin");
        }
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
