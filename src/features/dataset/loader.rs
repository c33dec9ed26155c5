use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GeoError, Result};
use crate::features::dataset::models::{Lga, RegionRecord, State};
use crate::shared::constants::EMBEDDED_DATASET;

/// The three ordered record sequences the index is built from.
///
/// Order is significant: it is the order every query returns results in,
/// and it decides which LGA wins when two share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
    pub states: Vec<State>,
    pub lgas: Vec<Lga>,
}

impl RawDataset {
    /// The canonical Nigerian dataset compiled into the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::error!("Failed to parse dataset: {:?}", e);
            GeoError::Dataset(e)
        })
    }

    /// Read a dataset from a JSON file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read dataset {}: {:?}", path.display(), e);
            GeoError::Io(e)
        })?;

        let dataset = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded dataset from {}: regions={}, states={}, lgas={}",
            path.display(),
            dataset.regions.len(),
            dataset.states.len(),
            dataset.lgas.len()
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dataset::models::Region;

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = RawDataset::embedded().unwrap();

        assert_eq!(dataset.regions.len(), 6);
        assert_eq!(dataset.states.len(), 37);
        assert_eq!(dataset.lgas.len(), 774);
        assert_eq!(dataset.states[0].name, "Abia");
        assert_eq!(dataset.states[0].code, "AB");
    }

    #[test]
    fn test_embedded_regions_follow_canonical_order() {
        let dataset = RawDataset::embedded().unwrap();
        let names: Vec<Region> = dataset.regions.iter().map(|r| r.name).collect();

        assert_eq!(names, Region::ALL.to_vec());
    }

    #[test]
    fn test_from_json_str_rejects_unknown_region() {
        let json = r#"{
            "states": [{"name": "Atlantis", "capital": "Poseidonia", "code": "AT", "region": "Mid-Ocean"}],
            "lgas": []
        }"#;

        assert!(matches!(
            RawDataset::from_json_str(json),
            Err(GeoError::Dataset(_))
        ));
    }

    #[test]
    fn test_from_json_str_regions_are_optional() {
        let json = r#"{
            "states": [{"name": "Lagos", "capital": "Ikeja", "code": "LA", "region": "South-West"}],
            "lgas": [{"name": "Agege", "state": "LA"}]
        }"#;

        let dataset = RawDataset::from_json_str(json).unwrap();
        assert!(dataset.regions.is_empty());
        assert_eq!(dataset.lgas[0].state_code, "LA");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = RawDataset::from_path(Path::new("/definitely/not/a/dataset.json"));
        assert!(matches!(result, Err(GeoError::Io(_))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "nigeria-geo-loader-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, EMBEDDED_DATASET).unwrap();

        let dataset = RawDataset::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset, RawDataset::embedded().unwrap());
    }
}
