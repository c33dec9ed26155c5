use serde::{Deserialize, Serialize};

use crate::features::dataset::models::{Lga, State};

/// State with its LGAs included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateWithLgas {
    #[serde(flatten)]
    pub state: State,
    pub lgas: Vec<Lga>,
    pub lga_count: usize,
}

impl StateWithLgas {
    pub fn new(state: State, lgas: Vec<Lga>) -> Self {
        let lga_count = lgas.len();
        Self {
            state,
            lgas,
            lga_count,
        }
    }
}
