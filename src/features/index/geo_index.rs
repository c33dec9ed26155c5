use std::collections::{HashMap, HashSet};

use validator::Validate;

use crate::core::error::{GeoError, Result};
use crate::features::dataset::models::{Lga, Region, State};
use crate::features::dataset::RawDataset;
use crate::features::index::Metadata;
use crate::shared::normalize::{normalize_code, normalize_name};

/// Read-only lookup structures derived once from a [`RawDataset`].
///
/// Maps store positions into the canonical `states` / `lgas` sequences, so
/// every record exists exactly once and per-key lists keep dataset order.
#[derive(Debug, Clone)]
pub struct GeoIndex {
    states: Vec<State>,
    lgas: Vec<Lga>,
    region_descriptions: HashMap<Region, String>,
    /// Upper-cased code -> state position
    state_by_code: HashMap<String, usize>,
    /// Lower-cased name -> state position
    state_by_name: HashMap<String, usize>,
    /// Upper-cased state code -> LGA positions in dataset order
    lgas_by_state_code: HashMap<String, Vec<usize>>,
    /// Lower-cased LGA name -> LGA positions in dataset order
    lgas_by_name: HashMap<String, Vec<usize>>,
    total_states: usize,
    total_lgas: usize,
}

impl GeoIndex {
    /// Build the index, failing on any dataset integrity violation.
    pub fn build(dataset: RawDataset) -> Result<Self> {
        let RawDataset {
            regions,
            states,
            lgas,
        } = dataset;

        let mut region_descriptions = HashMap::with_capacity(regions.len());
        for record in regions {
            if region_descriptions
                .insert(record.name, record.description)
                .is_some()
            {
                return Err(integrity_violation(GeoError::DuplicateRegion(
                    record.name,
                )));
            }
        }

        let mut state_by_code = HashMap::with_capacity(states.len());
        let mut state_by_name = HashMap::with_capacity(states.len());
        for (position, state) in states.iter().enumerate() {
            state.validate().map_err(|e| {
                integrity_violation(GeoError::InvalidRecord(format!(
                    "state '{}': {}",
                    state.name, e
                )))
            })?;

            let code = normalize_code(&state.code).ok_or_else(|| {
                integrity_violation(GeoError::InvalidRecord(format!(
                    "state '{}' has a blank code",
                    state.name
                )))
            })?;
            let name = normalize_name(&state.name).ok_or_else(|| {
                integrity_violation(GeoError::InvalidRecord(format!(
                    "state with code '{}' has a blank name",
                    state.code
                )))
            })?;

            if state_by_code.insert(code.clone(), position).is_some() {
                return Err(integrity_violation(GeoError::DuplicateStateCode(code)));
            }
            if state_by_name.insert(name, position).is_some() {
                return Err(integrity_violation(GeoError::DuplicateStateName(
                    state.name.clone(),
                )));
            }
        }

        let mut lgas_by_state_code: HashMap<String, Vec<usize>> = state_by_code
            .keys()
            .map(|code| (code.clone(), Vec::new()))
            .collect();
        let mut lgas_by_name: HashMap<String, Vec<usize>> = HashMap::new();
        let mut seen = HashSet::with_capacity(lgas.len());

        for (position, lga) in lgas.iter().enumerate() {
            lga.validate().map_err(|e| {
                integrity_violation(GeoError::InvalidRecord(format!(
                    "LGA '{}': {}",
                    lga.name, e
                )))
            })?;

            let unknown_state = || {
                integrity_violation(GeoError::UnknownStateReference {
                    lga: lga.name.clone(),
                    state: lga.state_code.clone(),
                })
            };
            let code = normalize_code(&lga.state_code).ok_or_else(unknown_state)?;
            let bucket = lgas_by_state_code
                .get_mut(&code)
                .ok_or_else(unknown_state)?;

            let name = normalize_name(&lga.name).ok_or_else(|| {
                integrity_violation(GeoError::InvalidRecord(format!(
                    "LGA in state '{}' has a blank name",
                    lga.state_code
                )))
            })?;
            if !seen.insert((code, name.clone())) {
                return Err(integrity_violation(GeoError::DuplicateLga {
                    lga: lga.name.clone(),
                    state: lga.state_code.clone(),
                }));
            }

            bucket.push(position);
            lgas_by_name.entry(name).or_default().push(position);
        }

        let index = Self {
            total_states: states.len(),
            total_lgas: lgas.len(),
            states,
            lgas,
            region_descriptions,
            state_by_code,
            state_by_name,
            lgas_by_state_code,
            lgas_by_name,
        };

        tracing::debug!(
            "Built geo index: states={}, lgas={}, distinct_lga_names={}",
            index.total_states,
            index.total_lgas,
            index.lgas_by_name.len()
        );

        Ok(index)
    }

    /// States in canonical order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// LGAs in canonical order
    pub fn lgas(&self) -> &[Lga] {
        &self.lgas
    }

    pub fn total_states(&self) -> usize {
        self.total_states
    }

    pub fn total_lgas(&self) -> usize {
        self.total_lgas
    }

    pub fn state_by_code(&self, code: &str) -> Option<&State> {
        let code = normalize_code(code)?;
        self.state_by_code
            .get(&code)
            .map(|&position| &self.states[position])
    }

    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        let name = normalize_name(name)?;
        self.state_by_name
            .get(&name)
            .map(|&position| &self.states[position])
    }

    /// LGAs of one state in dataset order; empty for an unknown code.
    pub fn lgas_for_state<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a Lga> + 'a {
        self.lga_positions_for_state(code)
            .iter()
            .map(move |&position| &self.lgas[position])
    }

    pub fn lga_count_for_state(&self, code: &str) -> usize {
        self.lga_positions_for_state(code).len()
    }

    /// Every LGA whose name matches exactly (case-insensitive), in dataset order.
    pub fn lgas_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Lga> + 'a {
        let positions = normalize_name(name)
            .and_then(|name| self.lgas_by_name.get(&name))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        positions.iter().map(move |&position| &self.lgas[position])
    }

    /// States of one region in dataset order. Shared by the state-level and
    /// region-level queries so both always agree.
    pub fn states_in_region(&self, region: Region) -> impl Iterator<Item = &State> + '_ {
        self.states
            .iter()
            .filter(move |state| state.region == region)
    }

    pub fn region_description(&self, region: Region) -> Option<&str> {
        self.region_descriptions.get(&region).map(String::as_str)
    }

    /// Descriptive snapshot of the loaded hierarchy
    pub fn metadata(&self) -> Metadata {
        Metadata {
            total_states: self.total_states,
            total_lgas: self.total_lgas,
            regions: Region::ALL.to_vec(),
        }
    }

    fn lga_positions_for_state(&self, code: &str) -> &[usize] {
        normalize_code(code)
            .and_then(|code| self.lgas_by_state_code.get(&code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn integrity_violation(err: GeoError) -> GeoError {
    tracing::error!("Dataset integrity violation: {}", err);
    err
}
