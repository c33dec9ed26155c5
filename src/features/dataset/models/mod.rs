mod lga;
mod region;
mod state;

pub use lga::Lga;
pub use region::{Region, RegionRecord};
pub use state::State;
