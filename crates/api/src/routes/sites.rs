//! Route definitions for storefronts.

use axum::routing::get;
use axum::Router;

use crate::handlers::sites;
use crate::state::AppState;

/// Own-storefront routes mounted at `/site`.
///
/// ```text
/// GET /?sector=  -> get_my_site
/// PUT /          -> upsert_my_site
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sites::get_my_site).put(sites::upsert_my_site))
}

/// Public storefront routes mounted at `/sites`.
///
/// ```text
/// GET /{slug}  -> get_public_site
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{slug}", get(sites::get_public_site))
}
