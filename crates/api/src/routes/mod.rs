pub mod demo;
pub mod health;
pub mod milestone;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /milestones                    list, create
/// /milestones/{id}               update, delete
/// /milestones/{id}/attachments   upload attachment
/// /milestones/{id}/remind        reminder stub
///
/// /seed-demo                     insert the demo catalogue
/// /reset-demo                    clear a project scope and reseed it
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/milestones", milestone::router())
        .merge(demo::router())
}
