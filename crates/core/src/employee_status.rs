//! Employment status codes stored on employee rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Full-time or part-time. Stored and exchanged as the codes `FT` / `PT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PT")]
    PartTime,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::FullTime, EmployeeStatus::PartTime];

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeStatus::FullTime => "FT",
            EmployeeStatus::PartTime => "PT",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = CoreError;

    /// Codes are case sensitive: `ft` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!("employee status must be FT or PT, got '{s}'"))
            })
    }
}
