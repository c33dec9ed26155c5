//! State-level queries: lookup by code or name, containment by region,
//! and partial-name search.

pub mod dtos;
pub mod services;

pub use dtos::StateWithLgas;
pub use services::StateService;
