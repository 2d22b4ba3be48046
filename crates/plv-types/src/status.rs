use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Operational status of a productline object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStatus {
    /// Operating normally.
    #[default]
    Active,
    /// Present but not operating.
    Inactive,
    /// Currently handling work.
    Processing,
    /// Faulted; flagged for attention.
    Error,
}

impl ObjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Processing => "processing",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "processing" => Ok(Self::Processing),
            "error" => Ok(Self::Error),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}
