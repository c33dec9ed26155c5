use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GeoError;

/// Nigerian geopolitical zone. The set is closed: every state belongs to
/// exactly one of these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North-Central")]
    NorthCentral,
    #[serde(rename = "North-East")]
    NorthEast,
    #[serde(rename = "North-West")]
    NorthWest,
    #[serde(rename = "South-East")]
    SouthEast,
    #[serde(rename = "South-South")]
    SouthSouth,
    #[serde(rename = "South-West")]
    SouthWest,
}

impl Region {
    /// All regions in canonical geographic order. The order is part of the
    /// public contract.
    pub const ALL: [Region; 6] = [
        Region::NorthCentral,
        Region::NorthEast,
        Region::NorthWest,
        Region::SouthEast,
        Region::SouthSouth,
        Region::SouthWest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthCentral => "North-Central",
            Region::NorthEast => "North-East",
            Region::NorthWest => "North-West",
            Region::SouthEast => "South-East",
            Region::SouthSouth => "South-South",
            Region::SouthWest => "South-West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = GeoError;

    /// Accepts only the canonical spelling, e.g. `"South-West"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| GeoError::UnknownRegion(s.to_string()))
    }
}

/// Region record as carried by the raw dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub name: Region,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_round_trips_through_str() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
            assert_eq!(region.to_string(), region.as_str());
        }
    }

    #[test]
    fn test_region_rejects_non_canonical_spelling() {
        assert!(matches!(
            "south-west".parse::<Region>(),
            Err(GeoError::UnknownRegion(_))
        ));
        assert!("South-Middle".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Region::SouthSouth).unwrap();
        assert_eq!(json, "\"South-South\"");

        let parsed: Region = serde_json::from_str("\"North-East\"").unwrap();
        assert_eq!(parsed, Region::NorthEast);

        assert!(serde_json::from_str::<Region>("\"Middle-Belt\"").is_err());
    }
}
