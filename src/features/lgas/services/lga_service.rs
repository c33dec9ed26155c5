use std::sync::Arc;

use crate::features::dataset::models::Lga;
use crate::features::index::GeoIndex;
use crate::shared::normalize::{contains_folded, normalize_name, normalize_query};

/// Queries over Local Government Areas
#[derive(Debug, Clone)]
pub struct LgaService {
    index: Arc<GeoIndex>,
}

impl LgaService {
    pub fn new(index: Arc<GeoIndex>) -> Self {
        Self { index }
    }

    // ==================== Listing Methods ====================

    /// All LGAs in canonical order. The returned list is a copy.
    pub fn get_all_lgas(&self) -> Vec<Lga> {
        self.index.lgas().to_vec()
    }

    /// LGAs of a state by code, in dataset order. Unknown code gives an empty list.
    pub fn get_lgas_by_state(&self, code: &str) -> Vec<Lga> {
        self.index.lgas_for_state(code).cloned().collect()
    }

    /// LGAs of a state resolved by its exact name (case-insensitive)
    pub fn get_lgas_by_state_name(&self, name: &str) -> Vec<Lga> {
        match self.index.state_by_name(name) {
            Some(state) => self.index.lgas_for_state(&state.code).cloned().collect(),
            None => Vec::new(),
        }
    }

    // ==================== Count Methods ====================

    /// Without a code, the national total. With a code, that state's count
    /// (0 when the code is unknown or blank).
    pub fn get_lga_count(&self, code: Option<&str>) -> usize {
        match code {
            Some(code) => self.lga_count_for_state(code),
            None => self.total_lga_count(),
        }
    }

    pub fn total_lga_count(&self) -> usize {
        self.index.total_lgas()
    }

    pub fn lga_count_for_state(&self, code: &str) -> usize {
        self.index.lga_count_for_state(code)
    }

    // ==================== Name Methods ====================

    /// Exact (case-insensitive) name match scoped to one state
    pub fn lga_exists(&self, lga_name: &str, code: &str) -> bool {
        let Some(name) = normalize_name(lga_name) else {
            return false;
        };

        self.index
            .lgas_for_state(code)
            .any(|lga| lga.name.to_lowercase() == name)
    }

    /// First LGA with this exact name in dataset order.
    ///
    /// Several states share LGA names (e.g. Surulere in Lagos and Oyo); use
    /// [`LgaService::get_all_lgas_by_name`] when the owning state matters.
    pub fn get_lga_by_name(&self, name: &str) -> Option<Lga> {
        self.index.lgas_named(name).next().cloned()
    }

    /// Every LGA with this exact name, in dataset order
    pub fn get_all_lgas_by_name(&self, name: &str) -> Vec<Lga> {
        self.index.lgas_named(name).cloned().collect()
    }

    // ==================== Search Methods ====================

    /// Case-insensitive substring search over every LGA name nationally.
    /// An empty query matches nothing.
    pub fn search_lgas(&self, query: &str) -> Vec<Lga> {
        let Some(query) = normalize_query(query) else {
            return Vec::new();
        };

        self.index
            .lgas()
            .iter()
            .filter(|lga| contains_folded(&lga.name, &query))
            .cloned()
            .collect()
    }
}
