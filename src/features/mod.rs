pub mod dataset;
pub mod index;
pub mod lgas;
pub mod regions;
pub mod states;
