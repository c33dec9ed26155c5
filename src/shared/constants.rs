/// Canonical dataset compiled into the crate
pub const EMBEDDED_DATASET: &str = include_str!("../../data/nigeria.json");

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Path to an alternate dataset JSON file
pub const ENV_DATASET_PATH: &str = "NIGERIA_GEO_DATASET";

/// Whether the report binary prints per-region statistics
pub const ENV_REPORT_REGIONS: &str = "NIGERIA_GEO_REPORT_REGIONS";
