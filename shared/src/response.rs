//! API response types
//!
//! The fourtrip server is not uniform about its response shapes: most write
//! endpoints answer with a `{success, data}` envelope, while some list
//! endpoints answer with a bare JSON array. Both shapes are modeled here.

use serde::{Deserialize, Serialize};

use crate::models::Dish;

/// Standard response envelope
///
/// ```json
/// {
///     "success": true,
///     "data": { ... }
/// }
/// ```
///
/// Error replies carry `message` or `error` instead of `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the server reports the operation as applied
    #[serde(default)]
    pub success: bool,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Create a successful envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Create a failed envelope with an error description
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Data if and only if the server reported success
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Reply shape of `GET /api/dishes`
///
/// Arrives either as a bare array or wrapped in an [`ApiEnvelope`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DishListReply {
    Bare(Vec<Dish>),
    Wrapped(ApiEnvelope<Vec<Dish>>),
}

impl DishListReply {
    /// Extract the dish collection, `None` when the envelope reports failure
    pub fn into_dishes(self) -> Option<Vec<Dish>> {
        match self {
            DishListReply::Bare(dishes) => Some(dishes),
            DishListReply::Wrapped(env) => env.into_data(),
        }
    }
}
