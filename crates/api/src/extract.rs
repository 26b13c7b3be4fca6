//! Request extractors whose rejections render through [`AppError`].
//!
//! axum's stock `Json` and `Path` answer malformed input with 400/415 and a
//! plain-text body. The roles API answers every unusable payload or id with
//! 422 and a `{"detail": ...}` body, so handlers take these wrappers instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use roles_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body, parsed regardless of the `Content-Type` header.
///
/// Syntax errors, type mismatches and empty bodies all reject with
/// [`AppError::Payload`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Payload(format!("Invalid JSON body: {e}")))?;
        Ok(JsonBody(value))
    }
}

/// The `{id}` segment of `/roles/{id}`, parsed as a [`DbId`].
#[derive(Debug, Clone, Copy)]
pub struct RoleId(pub DbId);

impl<S> FromRequestParts<S> for RoleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(RoleId(id))
    }
}
