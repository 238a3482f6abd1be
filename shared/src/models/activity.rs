//! Activity Model

use serde::{Deserialize, Serialize};

/// Activity listing entry (public catalog, shown on the home panel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}
