use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Slug};

/// A service offering shown on the services page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: EntityId,
    pub title: String,
    pub slug: Slug,
    pub icon: String,
    pub short_description: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub use_cases: Vec<String>,
    pub deliverables: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}
