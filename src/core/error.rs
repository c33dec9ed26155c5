use thiserror::Error;

use crate::features::dataset::models::Region;

/// Errors raised while loading a dataset or building the index.
///
/// Queries never return these; an unknown code or name is answered with
/// `None`, an empty list, `false` or `0`.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Dataset read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate state code: {0}")]
    DuplicateStateCode(String),

    #[error("Duplicate state name: {0}")]
    DuplicateStateName(String),

    #[error("Duplicate region record: {0}")]
    DuplicateRegion(Region),

    #[error("LGA '{lga}' references unknown state code '{state}'")]
    UnknownStateReference { lga: String, state: String },

    #[error("Duplicate LGA '{lga}' in state '{state}'")]
    DuplicateLga { lga: String, state: String },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
