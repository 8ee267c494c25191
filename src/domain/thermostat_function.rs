use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// API: https://www.ecobee.com/home/developer/api/documentation/v1/functions/using-functions.shtml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatFunction {
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ThermostatFunction {
    pub fn new(r#type: impl Into<String>, params: Map<String, Value>) -> Self {
        ThermostatFunction { r#type: r#type.into(), params }
    }

    /// Removes the active hold, or every hold on the stack when `resume_all` is set.
    pub fn resume_program(resume_all: bool) -> Self {
        let mut params = Map::new();
        params.insert("resumeAll".to_string(), Value::Bool(resume_all));
        ThermostatFunction::new("resumeProgram", params)
    }
}
