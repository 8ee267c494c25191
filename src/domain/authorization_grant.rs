use crate::domain::Scope;
use serde::{Deserialize, Serialize};

// API: https://www.ecobee.com/home/developer/api/documentation/v1/auth/pin-api-authorization.shtml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationGrant {
    /// The PIN the user enters in the ecobee portal.
    #[serde(rename = "ecobeePin")]
    pub ecobee_pin: String,
    /// Authorization code exchanged for a token once the PIN is accepted.
    pub code: String,
    pub scope: Scope,
    /// Minutes until the PIN expires.
    pub expires_in: u64,
    /// Minimum number of seconds between token requests.
    pub interval: u64,
}
