//! Repository for the `roles` table.

use roles_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::{CreateRole, Role, UpdateRole};

/// Column list for roles queries.
const COLUMNS: &str = "id, name, description, code, status";

/// Provides CRUD operations for roles. Every method issues exactly one statement.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role, returning the created row (including its generated id).
    pub async fn create(pool: &PgPool, input: &CreateRole) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (name, description, code, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.code)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// List all roles in database order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// List roles whose `status` is true. `NULL` status counts as inactive.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE status = TRUE");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Find a role by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a role, returning the post-update row.
    ///
    /// Each column is paired with a `provided` flag: when the flag is false
    /// the column keeps its current value, otherwise it takes the bound value
    /// (which may be `NULL`). Returns `None` if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRole,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET \
                 name        = CASE WHEN $2 THEN $3 ELSE name END, \
                 description = CASE WHEN $4 THEN $5 ELSE description END, \
                 code        = CASE WHEN $6 THEN $7 ELSE code END, \
                 status      = CASE WHEN $8 THEN $9 ELSE status END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(input.name.is_some())
            .bind(input.name.as_ref().and_then(|v| v.as_deref()))
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.code.is_some())
            .bind(input.code.flatten())
            .bind(input.status.is_some())
            .bind(input.status.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a role by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
