/**
 * Router Configuration
 *
 * Combines the API routes with the health check, the JSON 404 fallback and
 * the global middleware into a single stateless router.
 */

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::admit_origin;
use crate::backend::routes::api_routes::{configure_api_routes, method_not_allowed};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// The fallback is registered before the layers so unknown paths also get
/// CORS headers and the preflight short-circuit.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.clone(), admit_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::{AdminCredentials, TokenKeys};
    use crate::backend::middleware::CorsConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(
            AdminCredentials::new("admin", "secret"),
            TokenKeys::new(b"jwt-secret"),
            CorsConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_method_on_health() {
        let response = app()
            .oneshot(Request::post("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let response = app()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
