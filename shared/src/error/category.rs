//! Grouping of error codes by the thousands digit

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Who is usually at fault: the user (`General`..`Menu`) or the backend
/// link (`System`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Permission,
    Order,
    Menu,
    System,
}

impl ErrorCategory {
    /// Unassigned ranges count as `System`
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Auth,
            2 => Self::Permission,
            4 => Self::Order,
            6 => Self::Menu,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
