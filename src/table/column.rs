//! Column structure for entity schema definition

use crate::types::ColumnType;

/// Column metadata structure
///
/// Represents a single column in an entity schema with:
/// - name: Serialized column name (e.g. `ITEM_ID`)
/// - column_type: Scalar type of the column
/// - optional: Whether the column may be omitted on input
/// - ordinal: Position in the schema (0-indexed, primary key first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name
    name: &'static str,
    /// Column data type
    column_type: ColumnType,
    /// Whether the column may be omitted on input
    optional: bool,
    /// Column position in schema (0-indexed)
    ordinal: u32,
}

impl Column {
    /// Create a new column
    ///
    /// # Arguments
    /// * `name` - Column name
    /// * `column_type` - Data type
    /// * `optional` - Whether input may omit the column
    /// * `ordinal` - Position in schema
    pub const fn new(
        name: &'static str,
        column_type: ColumnType,
        optional: bool,
        ordinal: u32,
    ) -> Self {
        Self {
            name,
            column_type,
            optional,
            ordinal,
        }
    }

    /// Get column name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get column type
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Check if column is optional
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Get column ordinal (position in schema)
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}
