use crate::error::EcobeeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// API: https://www.ecobee.com/home/developer/api/documentation/v1/objects/Selection.shtml
/// Filter describing which thermostats and which parts of them a request targets.
///
/// The contents are passed to ecobee as-is; the only guarantee is that a selection is a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Map<String, Value>);

impl Selection {
    /// Selects every thermostat registered to the account.
    pub fn registered() -> Self {
        Selection::default().with("selectionType", "registered").with("selectionMatch", "")
    }

    /// Selects thermostats by identifier.
    pub fn thermostats<S: AsRef<str>>(identifiers: &[S]) -> Self {
        let selection_match = identifiers.iter().map(|id| id.as_ref()).collect::<Vec<&str>>().join(",");
        Selection::default().with("selectionType", "thermostats").with("selectionMatch", selection_match)
    }

    /// Adds or replaces a field, e.g. `includeSettings`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for Selection {
    fn from(map: Map<String, Value>) -> Self {
        Selection(map)
    }
}

impl TryFrom<Value> for Selection {
    type Error = EcobeeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Selection(map)),
            _ => Err(EcobeeError::InvalidArgument("invalid selection")),
        }
    }
}
