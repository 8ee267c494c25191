use crate::domain::ApiStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// API: https://www.ecobee.com/home/developer/api/documentation/v1/objects/Thermostat.shtml
/// A thermostat as returned by ecobee. Every field other than `identifier` is kept verbatim,
/// which fields are present depends on the `include*` flags of the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    pub identifier: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Thermostat {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub total: u32,
}

/// Thermostats keyed by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermostats {
    pub page: Option<Page>,
    pub status: ApiStatus,
    pub thermostats: HashMap<String, Thermostat>,
}
