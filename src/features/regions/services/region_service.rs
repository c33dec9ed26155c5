use std::sync::Arc;

use crate::features::dataset::models::{Region, State};
use crate::features::index::GeoIndex;
use crate::features::regions::dtos::RegionStats;

/// Service for the Nigerian geopolitical zones
#[derive(Debug, Clone)]
pub struct RegionService {
    index: Arc<GeoIndex>,
}

impl RegionService {
    pub fn new(index: Arc<GeoIndex>) -> Self {
        Self { index }
    }

    // ==================== Region Methods ====================

    /// The six regions in canonical geographic order (not alphabetical)
    pub fn get_all_regions(&self) -> &'static [Region] {
        &Region::ALL
    }

    /// Membership test against the closed enumeration, exact spelling.
    /// Use before passing untrusted input to region-scoped queries.
    pub fn is_valid_region(value: &str) -> bool {
        Self::parse_region(value).is_some()
    }

    pub fn parse_region(value: &str) -> Option<Region> {
        value.parse::<Region>().ok()
    }

    pub fn get_region_description(&self, region: Region) -> Option<String> {
        self.index.region_description(region).map(str::to_string)
    }

    /// Region of the state with this code
    pub fn get_region_by_state(&self, code: &str) -> Option<Region> {
        self.index.state_by_code(code).map(|state| state.region)
    }

    // ==================== State Containment Methods ====================

    /// Identical to `StateService::get_states_by_region`
    pub fn get_region_states(&self, region: Region) -> Vec<State> {
        self.index.states_in_region(region).cloned().collect()
    }

    pub fn get_region_state_count(&self, region: Region) -> usize {
        self.index.states_in_region(region).count()
    }

    /// Sum of the per-state LGA counts over the region's states
    pub fn get_region_lga_count(&self, region: Region) -> usize {
        self.index
            .states_in_region(region)
            .map(|state| self.index.lga_count_for_state(&state.code))
            .sum()
    }

    // ==================== Statistics Methods ====================

    pub fn get_region_stats(&self, region: Region) -> RegionStats {
        let states = self.get_region_states(region);
        let lga_count = states
            .iter()
            .map(|state| self.index.lga_count_for_state(&state.code))
            .sum();

        RegionStats {
            region,
            state_count: states.len(),
            lga_count,
            states,
        }
    }

    /// Statistics for every region, in canonical order
    pub fn get_all_region_stats(&self) -> Vec<RegionStats> {
        Region::ALL
            .iter()
            .map(|&region| self.get_region_stats(region))
            .collect()
    }
}
