//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Vacant,
    Reserved,
    Eating,
}

impl TableStatus {
    /// Label of the single action the waiter can take on a table in this state
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Vacant => "Check-in",
            Self::Reserved => "Make Order",
            Self::Eating => "View Order",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Reserved => "reserved",
            Self::Eating => "eating",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub table_id: u32,
    pub capacity: u32,
    pub table_status: TableStatus,
}

/// Payload of `PUT /users/waiter/tables/reserve`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub table_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels() {
        assert_eq!(TableStatus::Vacant.action_label(), "Check-in");
        assert_eq!(TableStatus::Reserved.action_label(), "Make Order");
        assert_eq!(TableStatus::Eating.action_label(), "View Order");
    }

    #[test]
    fn test_deserialize_table() {
        let json = r#"{"table_id":3,"capacity":4,"table_status":"eating"}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.table_id, 3);
        assert_eq!(table.table_status, TableStatus::Eating);
    }
}
