//! Error types for schema construction and table access.
//!
//! All errors are immediate and local to the failing call; nothing here is
//! retried or deferred. Schema errors are fatal at construction time - no
//! partial schema is ever produced.

use thiserror::Error;

/// Error raised while building a [`Schema`](crate::schema::Schema).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two column specs claimed the same index.
    #[error("duplicate column index claim: {index}")]
    DuplicateIndex { index: usize },

    /// A column spec claimed an index outside `0..count`.
    #[error("column index {index} out of range for {count} declared fields")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Error type for by-name field access on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The requested field does not exist on the entity.
    #[error("field '{field}' not found in entity")]
    Missing { field: String },

    /// The field exists but the value has a different kind than declared.
    #[error("field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}

/// Error raised by row and cell operations on the table model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row index (view or storage) was outside the current bounds.
    #[error("row index {index} out of bounds (rows: {len})")]
    RowOutOfBounds { index: usize, len: usize },

    /// A column index was outside the schema.
    #[error("column index {index} out of bounds (columns: {count})")]
    ColumnOutOfBounds { index: usize, count: usize },

    /// A value accessor or mutator failed for the identified column.
    #[error("cannot access value at column {column}: {source}")]
    Access {
        column: usize,
        #[source]
        source: FieldError,
    },
}

impl TableError {
    /// Creates a new row bounds error.
    pub fn row_out_of_bounds(index: usize, len: usize) -> Self {
        Self::RowOutOfBounds { index, len }
    }

    /// Creates a new column bounds error.
    pub fn column_out_of_bounds(index: usize, count: usize) -> Self {
        Self::ColumnOutOfBounds { index, count }
    }

    /// Wraps a field access failure with the failing column index.
    pub fn access(column: usize, source: FieldError) -> Self {
        Self::Access { column, source }
    }
}
