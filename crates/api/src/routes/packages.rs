//! Route definitions for the `/packages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// GET  /            -> list_packages (public)
/// POST /subscribe   -> subscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packages::list_packages))
        .route("/subscribe", post(packages::subscribe))
}
