pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles, /roles/                                  list, create
/// /roles/active                                    list roles with status = true
/// /roles/{id}                                      get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(roles::router())
}
