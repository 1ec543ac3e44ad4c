/**
 * API Routes
 *
 * | Route | Method | Access |
 * |---|---|---|
 * | `/api/login` | POST | public |
 * | `/api/subscribe` | POST | public |
 * | `/api/subscribe` | GET, DELETE | administrator |
 * | `/api/sendEmail` | POST | administrator |
 * | `/api/sendBulkEmail` | POST | administrator |
 *
 * Any other method on these paths answers `405` with a JSON body.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::login;
use crate::backend::error::BackendError;
use crate::backend::mail::{send_bulk_email, send_email};
use crate::backend::middleware::require_admin;
use crate::backend::server::state::AppState;
use crate::backend::signups::{delete_signup, list_signups, subscribe};

/// Add the API routes to a router
///
/// `require_admin` is attached with `route_layer` so it only wraps the
/// methods registered before it.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let admin = || from_fn_with_state(state.clone(), require_admin);

    router
        .route("/api/login", post(login).fallback(method_not_allowed))
        .route(
            "/api/subscribe",
            get(list_signups)
                .delete(delete_signup)
                .route_layer(admin())
                .post(subscribe)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/sendEmail",
            post(send_email)
                .route_layer(admin())
                .fallback(method_not_allowed),
        )
        .route(
            "/api/sendBulkEmail",
            post(send_bulk_email)
                .route_layer(admin())
                .fallback(method_not_allowed),
        )
}

/// Fallback for unsupported methods on a known path
pub async fn method_not_allowed() -> BackendError {
    BackendError::method_not_allowed()
}
