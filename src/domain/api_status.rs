use serde::{Deserialize, Serialize};

/// Status object attached to every ecobee API response. A `code` of 0 means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl ApiStatus {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
