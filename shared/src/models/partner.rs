//! Partner Model

use serde::{Deserialize, Serialize};

/// The authenticated business entity operating the dashboard
///
/// Persisted locally under the `user` key as a minimal profile; the full
/// record lives on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}
