//! Read-only queries over Nigeria's administrative hierarchy:
//! Region → State → Local Government Area.
//!
//! ```
//! use nigeria_geo::{NigeriaGeo, Region};
//!
//! let geo = NigeriaGeo::global();
//! let lagos = geo.states().get_state_by_code("la").unwrap();
//! assert_eq!(lagos.capital, "Ikeja");
//! assert_eq!(geo.lgas().get_lga_count(Some("LA")), 20);
//! assert_eq!(geo.regions().get_region_stats(Region::SouthWest).state_count, 6);
//! ```

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::engine::NigeriaGeo;
pub use crate::core::error::{GeoError, Result};
pub use crate::features::dataset::models::{Lga, Region, RegionRecord, State};
pub use crate::features::dataset::RawDataset;
pub use crate::features::index::{GeoIndex, Metadata};
pub use crate::features::lgas::LgaService;
pub use crate::features::regions::{RegionService, RegionStats};
pub use crate::features::states::{StateService, StateWithLgas};
