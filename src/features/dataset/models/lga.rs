use serde::{Deserialize, Serialize};
use validator::Validate;

/// Local Government Area, owned by exactly one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Lga {
    #[validate(length(min = 1, message = "LGA name is required"))]
    pub name: String,
    /// Code of the owning state
    #[serde(rename = "state")]
    #[validate(length(min = 1, message = "LGA state code is required"))]
    pub state_code: String,
}
