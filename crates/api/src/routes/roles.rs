//! Route definitions for roles.

use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes for the `/roles` resource.
///
/// ```text
/// GET    /roles/         -> list
/// POST   /roles/         -> create
/// GET    /roles/active   -> list_active
/// GET    /roles/{id}     -> get_by_id
/// PATCH  /roles/{id}     -> update
/// DELETE /roles/{id}     -> delete
/// ```
///
/// The collection is served with and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(roles::list).post(roles::create))
        .route("/roles/", get(roles::list).post(roles::create))
        .route("/roles/active", get(roles::list_active))
        .route(
            "/roles/{id}",
            get(roles::get_by_id)
                .patch(roles::update)
                .delete(roles::delete),
        )
}
