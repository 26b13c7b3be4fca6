//! Handlers for the `/roles` resource.
//!
//! Each handler validates its payload (if any), issues a single repository
//! call against the pool carried in [`AppState`], and returns plain JSON
//! without an envelope. Bodies and ids go through [`crate::extract`] so
//! malformed input answers 422 with a `detail` body.

use axum::extract::State;
use axum::Json;
use roles_core::error::CoreError;
use roles_core::role::ROLE_ENTITY;
use roles_core::types::DbId;
use roles_db::models::role::{CreateRole, Role, UpdateRole};
use roles_db::repositories::RoleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RoleId};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ROLE_ENTITY,
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /roles/
///
/// Create a role. Omitted fields are stored as `NULL`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRole>,
) -> AppResult<Json<Role>> {
    input.validate()?;

    let role = RoleRepo::create(&state.pool, &input).await?;
    tracing::info!(role_id = role.id, "Role created");
    Ok(Json(role))
}

/// GET /roles/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /roles/active
///
/// Roles whose `status` is true.
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list_active(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RoleId(id): RoleId,
) -> AppResult<Json<Role>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(role))
}

/// PATCH /roles/{id}
///
/// Apply only the fields present in the body. An explicit `null` clears
/// the column; `{}` changes nothing and returns the current row.
pub async fn update(
    State(state): State<AppState>,
    RoleId(id): RoleId,
    JsonBody(input): JsonBody<UpdateRole>,
) -> AppResult<Json<Role>> {
    input.validate()?;

    let role = RoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(role_id = id, "Role updated");
    Ok(Json(role))
}

/// DELETE /roles/{id}
///
/// Always answers 200 with a confirmation message, whether or not a row
/// existed. Existing clients depend on that.
pub async fn delete(
    State(state): State<AppState>,
    RoleId(id): RoleId,
) -> AppResult<Json<MessageResponse>> {
    let deleted = RoleRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(role_id = id, "Role deleted");
    } else {
        tracing::warn!(role_id = id, "Delete requested for missing role");
    }

    Ok(Json(MessageResponse {
        message: format!("Role with id {id} successfully deleted"),
    }))
}
