//! Website Entity

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Entity};

/// A tracked website owned by the tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tracking_id: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

fn default_true() -> bool {
    true
}

impl Entity for Website {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /websites/`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WebsiteDraft {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
