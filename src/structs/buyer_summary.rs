use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerSummary {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub full_name: Option<String>,
}
