//! Local Government Area queries.

pub mod services;

pub use services::LgaService;
