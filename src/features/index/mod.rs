//! Index builder: exact-key maps over the raw dataset, built once.

mod dtos;
mod geo_index;

pub use dtos::Metadata;
pub use geo_index::GeoIndex;
