//! Auth API DTOs
//!
//! Request/response types for the common-auth endpoints. Field names follow
//! the server wire format exactly.

use serde::{Deserialize, Serialize};

use crate::models::Partner;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// Login reply
///
/// Success carries `token` + `data`; failure carries only `message`. The
/// server does not distinguish the two by status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Identity record embedded in a successful login reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginIdentity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<LoginIdentity> for Partner {
    fn from(identity: LoginIdentity) -> Self {
        Partner {
            id: identity.id,
            name: identity.owner_name.unwrap_or_default(),
            business_name: identity.business_name.unwrap_or_default(),
            phone_number: identity.phone_number.unwrap_or_default(),
            email: identity.email.unwrap_or_default(),
        }
    }
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub reg_type: String,
    pub select_category: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl RegisterRequest {
    /// Build a partner registration payload with the fixed platform fields
    pub fn partner(
        business_name: impl Into<String>,
        owner_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            owner_name: owner_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            password: password.into(),
            reg_type: "partner".to_string(),
            select_category: "activities".to_string(),
            is_active: false,
            is_new: true,
        }
    }
}

/// Registration reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
