//! Route definitions for the demo data lifecycle endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

/// Routes merged into the `/api` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seed-demo", post(demo::seed))
        .route("/reset-demo", post(demo::reset))
}
