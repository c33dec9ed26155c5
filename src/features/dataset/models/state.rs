use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Region;

/// State model representing Nigerian states (including the FCT)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct State {
    #[validate(length(min = 1, message = "State name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "State capital is required"))]
    pub capital: String,
    /// Two-letter code, e.g. `LA` for Lagos
    #[validate(regex(
        path = *crate::shared::validation::STATE_CODE_REGEX,
        message = "State code must be exactly two letters"
    ))]
    pub code: String,
    pub region: Region,
}
