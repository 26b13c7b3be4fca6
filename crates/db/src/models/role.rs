//! Role entity model.

use roles_core::error::CoreError;
use roles_core::patch::double_option;
use roles_core::role::{validate_description, validate_name};
use roles_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role row from the `roles` table.
///
/// Every column except `id` is nullable, so a role created from an empty
/// payload serializes its data fields as `null`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<i32>,
    pub status: Option<bool>,
}

/// DTO for creating a new role. Absent and `null` fields both insert `NULL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRole {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<i32>,
    pub status: Option<bool>,
}

impl CreateRole {
    /// Check column limits before the payload reaches the repository.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// DTO for partially updating a role.
///
/// Outer `None` leaves the column untouched; `Some(None)` sets it to `NULL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRole {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub code: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<bool>>,
}

impl UpdateRole {
    /// Check column limits on the fields that carry a value.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(Some(name)) = &self.name {
            validate_name(name)?;
        }
        if let Some(Some(description)) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn create_accepts_empty_object() {
        let input: CreateRole = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.status.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_rejects_long_name() {
        let input = CreateRole {
            name: Some("n".repeat(51)),
            ..Default::default()
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_non_integer_code() {
        let result = serde_json::from_str::<CreateRole>(r#"{"code": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let input: UpdateRole =
            serde_json::from_str(r#"{"status": false, "description": null}"#).unwrap();
        assert_matches!(input.name, None);
        assert_matches!(input.code, None);
        assert_matches!(input.status, Some(Some(false)));
        assert_matches!(input.description, Some(None));
    }

    #[test]
    fn update_with_no_fields_leaves_everything_untouched() {
        let input: UpdateRole = serde_json::from_str("{}").unwrap();
        assert_matches!(
            (&input.name, &input.description, &input.code, &input.status),
            (None, None, None, None)
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_rejects_long_description() {
        let input = UpdateRole {
            description: Some(Some("d".repeat(51))),
            ..Default::default()
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_clearing_name_skips_length_check() {
        let input = UpdateRole {
            name: Some(None),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn role_serializes_nulls() {
        let role = Role {
            id: 1,
            name: None,
            description: None,
            code: None,
            status: None,
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": null,
                "description": null,
                "code": null,
                "status": null,
            })
        );
    }
}
