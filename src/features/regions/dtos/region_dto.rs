use serde::{Deserialize, Serialize};

use crate::features::dataset::models::{Region, State};

/// Aggregate statistics for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub region: Region,
    pub state_count: usize,
    pub lga_count: usize,
    pub states: Vec<State>,
}
