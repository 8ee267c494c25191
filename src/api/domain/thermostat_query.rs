use crate::domain::Selection;
use serde::Serialize;

/// Payload of the `json` query parameter of the read endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ThermostatQuery<'a> {
    pub selection: &'a Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
