use std::sync::Arc;

use crate::features::dataset::models::{Region, State};
use crate::features::index::GeoIndex;
use crate::features::states::dtos::StateWithLgas;
use crate::shared::normalize::{contains_folded, normalize_query};

/// Queries over the state level of the hierarchy
#[derive(Debug, Clone)]
pub struct StateService {
    index: Arc<GeoIndex>,
}

impl StateService {
    pub fn new(index: Arc<GeoIndex>) -> Self {
        Self { index }
    }

    // ==================== Lookup Methods ====================

    /// All states in canonical order. The returned list is a copy.
    pub fn get_all_states(&self) -> Vec<State> {
        self.index.states().to_vec()
    }

    /// Get a state by its two-letter code (case-insensitive)
    pub fn get_state_by_code(&self, code: &str) -> Option<State> {
        self.index.state_by_code(code).cloned()
    }

    /// Get a state by its exact name (case-insensitive). No partial matching.
    pub fn get_state_by_name(&self, name: &str) -> Option<State> {
        self.index.state_by_name(name).cloned()
    }

    pub fn get_states_by_region(&self, region: Region) -> Vec<State> {
        self.index.states_in_region(region).cloned().collect()
    }

    pub fn get_state_capital(&self, code: &str) -> Option<String> {
        self.index
            .state_by_code(code)
            .map(|state| state.capital.clone())
    }

    pub fn is_valid_state_code(&self, code: &str) -> bool {
        self.index.state_by_code(code).is_some()
    }

    /// Get a state together with its LGAs in dataset order
    pub fn get_state_with_lgas(&self, code: &str) -> Option<StateWithLgas> {
        let state = self.index.state_by_code(code)?;
        let lgas = self.index.lgas_for_state(&state.code).cloned().collect();

        Some(StateWithLgas::new(state.clone(), lgas))
    }

    pub fn get_state_region(&self, code: &str) -> Option<Region> {
        self.index.state_by_code(code).map(|state| state.region)
    }

    // ==================== Search Methods ====================

    /// Case-insensitive substring search over state names.
    ///
    /// An empty query matches nothing rather than everything.
    pub fn search_states(&self, query: &str) -> Vec<State> {
        let Some(query) = normalize_query(query) else {
            return Vec::new();
        };

        self.index
            .states()
            .iter()
            .filter(|state| contains_folded(&state.name, &query))
            .cloned()
            .collect()
    }
}
