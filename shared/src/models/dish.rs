//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity
///
/// Soft-deleted via `is_deleted` rather than removed from the source of
/// truth; deleted rows are filtered out of the rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category value (e.g. "veg", "non-veg")
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: f64,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create dish payload (`POST /api/dishes`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub discounted_price: f64,
    pub image: String,
    /// Owning partner reference
    pub partner_id: String,
}

/// Update dish payload (`PUT /api/dishes/:id`)
///
/// All fields optional; the same endpoint serves full edits, the
/// availability toggle and the soft delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

impl DishUpdate {
    /// Availability toggle patch
    pub fn availability(value: bool) -> Self {
        Self {
            availability: Some(value),
            ..Self::default()
        }
    }

    /// Soft delete patch
    pub fn soft_delete() -> Self {
        Self {
            is_deleted: Some(true),
            ..Self::default()
        }
    }
}
