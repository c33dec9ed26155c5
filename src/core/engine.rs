use std::sync::Arc;

use lazy_static::lazy_static;

use crate::core::config::DataConfig;
use crate::core::error::Result;
use crate::features::dataset::RawDataset;
use crate::features::index::{GeoIndex, Metadata};
use crate::features::lgas::LgaService;
use crate::features::regions::RegionService;
use crate::features::states::StateService;

lazy_static! {
    static ref GLOBAL: NigeriaGeo = NigeriaGeo::embedded()
        .expect("embedded Nigeria dataset failed integrity checks");
}

/// Query engine over one immutable hierarchy.
///
/// Cloning is cheap: every service shares the same `Arc<GeoIndex>`. The
/// index is never mutated after build, so instances can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct NigeriaGeo {
    index: Arc<GeoIndex>,
    states: StateService,
    lgas: LgaService,
    regions: RegionService,
}

impl NigeriaGeo {
    /// Build an engine from a dataset, failing on integrity violations
    pub fn from_dataset(dataset: RawDataset) -> Result<Self> {
        let index = Arc::new(GeoIndex::build(dataset)?);

        Ok(Self {
            states: StateService::new(Arc::clone(&index)),
            lgas: LgaService::new(Arc::clone(&index)),
            regions: RegionService::new(Arc::clone(&index)),
            index,
        })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_dataset(RawDataset::embedded()?)
    }

    /// Build from configuration: a dataset file when one is set, otherwise
    /// the embedded dataset.
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        let dataset = match &config.dataset_path {
            Some(path) => RawDataset::from_path(path)?,
            None => RawDataset::embedded()?,
        };

        Self::from_dataset(dataset)
    }

    /// Process-wide engine over the embedded dataset, built on first use
    pub fn global() -> &'static NigeriaGeo {
        &GLOBAL
    }

    pub fn states(&self) -> &StateService {
        &self.states
    }

    pub fn lgas(&self) -> &LgaService {
        &self.lgas
    }

    pub fn regions(&self) -> &RegionService {
        &self.regions
    }

    pub fn metadata(&self) -> Metadata {
        self.index.metadata()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::features::dataset::models::Region;
    use crate::shared::test_helpers::{fake_dataset, sample_dataset};

    #[test]
    fn test_lagos_scenario() {
        let geo = NigeriaGeo::global();

        let lagos = geo.states().get_state_by_code("LA").unwrap();
        assert_eq!(lagos.name, "Lagos");
        assert_eq!(lagos.capital, "Ikeja");
        assert_eq!(lagos.region, Region::SouthWest);

        let lgas = geo.lgas().get_lgas_by_state("LA");
        assert_eq!(lgas.len(), 20);
        assert_eq!(lgas[0].name, "Agege");

        assert_eq!(
            geo.regions().get_region_stats(Region::SouthWest).state_count,
            6
        );
    }

    #[test]
    fn test_metadata_snapshot() {
        let metadata = NigeriaGeo::global().metadata();

        assert_eq!(metadata.total_states, 37);
        assert_eq!(metadata.total_lgas, 774);
        assert_eq!(metadata.regions, Region::ALL.to_vec());

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["totalStates"], 37);
        assert_eq!(json["totalLGAs"], 774);
        assert_eq!(json["regions"][0], "North-Central");
    }

    #[test]
    fn test_counts_agree_across_levels() {
        let geo = NigeriaGeo::global();

        let by_region: usize = geo
            .regions()
            .get_all_region_stats()
            .iter()
            .map(|s| s.lga_count)
            .sum();
        let by_state: usize = geo
            .states()
            .get_all_states()
            .iter()
            .map(|s| geo.lgas().get_lga_count(Some(&s.code)))
            .sum();

        assert_eq!(by_region, geo.lgas().get_lga_count(None));
        assert_eq!(by_state, geo.lgas().get_lga_count(None));
        assert_eq!(by_region, geo.lgas().get_all_lgas().len());
    }

    #[test]
    fn test_state_and_region_containment_agree() {
        let geo = NigeriaGeo::global();

        for &region in geo.regions().get_all_regions() {
            assert_eq!(
                geo.states().get_states_by_region(region),
                geo.regions().get_region_states(region)
            );
        }
    }

    #[test]
    fn test_empty_inputs_never_fail() {
        let geo = NigeriaGeo::global();

        assert!(geo.states().search_states("").is_empty());
        assert!(geo.lgas().search_lgas("").is_empty());
        assert!(geo.lgas().get_lgas_by_state("").is_empty());
        assert!(geo.states().get_state_by_code("").is_none());
        assert!(geo.regions().get_region_by_state("").is_none());
        assert!(!geo.lgas().lga_exists("", ""));
    }

    #[test]
    fn test_independent_instances() {
        let sample = NigeriaGeo::from_dataset(sample_dataset()).unwrap();
        let synthetic = NigeriaGeo::from_dataset(fake_dataset(40, 5)).unwrap();

        assert_eq!(sample.metadata().total_states, 3);
        assert_eq!(synthetic.metadata().total_states, 40);
        assert_eq!(synthetic.lgas().get_lga_count(None), 200);
        assert_eq!(NigeriaGeo::global().metadata().total_states, 37);

        let per_region: usize = synthetic
            .regions()
            .get_all_region_stats()
            .iter()
            .map(|s| s.lga_count)
            .sum();
        assert_eq!(per_region, 200);
    }

    #[test]
    fn test_from_config_defaults_to_embedded() {
        let geo = NigeriaGeo::from_config(&DataConfig::default()).unwrap();
        assert_eq!(geo.metadata(), NigeriaGeo::global().metadata());
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let expected = NigeriaGeo::global().regions().get_all_region_stats();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let geo = NigeriaGeo::global();
                    assert_eq!(geo.lgas().get_lgas_by_state("LA").len(), 20);
                    geo.regions().get_all_region_stats()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
