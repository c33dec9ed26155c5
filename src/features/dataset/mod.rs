//! Raw administrative hierarchy records.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Regions (geopolitical zones) - 6, a closed enumeration
//! - Level 2: States (including the FCT) - 37, keyed by a two-letter code
//! - Level 3: Local Government Areas - 774, each owned by one state
//!
//! LGA names are not unique nationally; the same name can appear under
//! several states.

mod loader;
pub mod models;

pub use loader::RawDataset;
