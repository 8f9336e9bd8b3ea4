use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub title: Option<String>,
}
