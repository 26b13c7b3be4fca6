//! Helpers for partial-update payloads.
//!
//! A plain `Option<Option<T>>` field collapses an explicit JSON `null` into
//! the outer `None`, which makes "clear this column" indistinguishable from
//! "leave it alone". Pair [`double_option`] with `#[serde(default)]` to keep
//! the three states apart:
//!
//! | JSON            | Rust              |
//! |-----------------|-------------------|
//! | key absent      | `None`            |
//! | `"key": null`   | `Some(None)`      |
//! | `"key": value`  | `Some(Some(v))`   |

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(..)`, keeping `null` as `Some(None)`.
///
/// ```ignore
/// #[serde(default, deserialize_with = "double_option")]
/// pub name: Option<Option<String>>,
/// ```
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
