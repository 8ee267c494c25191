use crate::error::EcobeeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission requested when generating a PIN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "smartRead")]
    SmartRead,
    #[default]
    #[serde(rename = "smartWrite")]
    SmartWrite,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::SmartRead => "smartRead",
            Scope::SmartWrite => "smartWrite",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = EcobeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smartRead" => Ok(Scope::SmartRead),
            "smartWrite" => Ok(Scope::SmartWrite),
            _ => Err(EcobeeError::InvalidArgument("invalid scope")),
        }
    }
}
