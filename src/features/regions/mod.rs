//! Nigerian geopolitical regions (zones) feature.
//!
//! Regions form the top level of the hierarchy. Every region query is
//! derived from the state level, so region statistics always agree with
//! per-state LGA counts.
//!
//! ## Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | `get_all_regions` | The six zones in canonical order |
//! | `get_region_states` | States in a zone |
//! | `get_region_by_state` | Zone of a state code |
//! | `get_region_stats` | State count, LGA count and states of a zone |
//! | `get_all_region_stats` | Statistics for every zone |
//! | `is_valid_region` | Validate untrusted zone names |

pub mod dtos;
pub mod services;

pub use dtos::RegionStats;
pub use services::RegionService;
