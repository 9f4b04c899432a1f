//! Table error definitions

use crate::types::EntryId;
use serde::{Deserialize, Serialize};

/// Table error types
///
/// Represents every failure a table operation can report. The HTTP layer maps
/// them onto status codes through [`TableError::status_code`] and uses the
/// `Display` text as the response description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Primary-key lookup, update, or delete of an absent key
    #[error("{entity} with id {key} not found")]
    NotFound { entity: &'static str, key: EntryId },
    /// Duplicate primary key, or a foreign key with no referenced row
    #[error("{0}")]
    Conflict(String),
    /// Filter names a column the table does not have
    #[error("Unknown column {column} in table {table}")]
    UnknownColumn { table: &'static str, column: String },
    /// Record could not be converted to or from its entity
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// Table was wired with an unusable foreign key
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl TableError {
    /// HTTP status equivalent of this error
    pub fn status_code(&self) -> u16 {
        match self {
            TableError::NotFound { .. } => 404,
            TableError::Conflict(_) => 409,
            TableError::UnknownColumn { .. } | TableError::InvalidRecord(_) => 400,
            TableError::InvalidSchema(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, TableError::Conflict(_))
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Acknowledgement returned by mutating operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::NotFound {
            entity: "Item",
            key: 7,
        };
        assert_eq!(err.to_string(), "Item with id 7 not found");

        let err = TableError::Conflict("ITEM_ID 1 already exists".to_string());
        assert_eq!(err.to_string(), "ITEM_ID 1 already exists");
    }

    #[test]
    fn test_table_error_status_code() {
        assert_eq!(
            TableError::NotFound {
                entity: "Recipe",
                key: 1
            }
            .status_code(),
            404
        );
        assert_eq!(TableError::Conflict(String::new()).status_code(), 409);
        assert_eq!(
            TableError::UnknownColumn {
                table: "items",
                column: "COLOR".to_string()
            }
            .status_code(),
            400
        );
    }

    #[test]
    fn test_ack_serializes_as_message() {
        let ack = Ack::new("Item added successfully");
        let json = serde_json::to_string(&ack).unwrap();
        assert_eq!(json, r#"{"message":"Item added successfully"}"#);
    }
}
