use serde::{Deserialize, Serialize};

use crate::features::dataset::models::Region;

/// Read-only summary of the loaded hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_states: usize,
    #[serde(rename = "totalLGAs")]
    pub total_lgas: usize,
    pub regions: Vec<Region>,
}
