//! The table model: schema + row store, addressed in storage coordinates.
//!
//! This is the boundary a rendering host consumes: column metadata by index,
//! row count, and value-at / set-value-at by (storage row, column).

use std::fmt;

use log::debug;

use crate::entity::Entity;
use crate::error::{SchemaError, TableError};
use crate::rows::{RowStore, RowsEvent};
use crate::schema::{Column, Schema};
use crate::value::{Value, ValueKind};

/// Binds a [`Schema`] and a [`RowStore`] for one entity type.
///
/// All row addressing here is in storage coordinates; view-coordinate
/// access goes through [`TableController`](crate::controller::TableController).
pub struct TableModel<T: Entity> {
    schema: Schema<T>,
    rows: RowStore<T>,
}

impl<T: Entity> TableModel<T> {
    /// Create a model with the schema the entity type declares.
    ///
    /// Fails when the declared column specs are inconsistent (duplicate or
    /// out-of-range index claims).
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self::with_schema(Schema::for_entity()?))
    }

    /// Create a model with an explicitly built schema.
    pub fn with_schema(schema: Schema<T>) -> Self {
        Self {
            schema,
            rows: RowStore::new(),
        }
    }

    /// The column schema.
    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    /// The underlying row store.
    pub fn rows(&self) -> &RowStore<T> {
        &self.rows
    }

    /// Mutable access to the underlying row store.
    ///
    /// A controller layered on top must be refreshed after direct mutation.
    pub fn rows_mut(&mut self) -> &mut RowStore<T> {
        &mut self.rows
    }

    // =========================================================================
    // Column metadata surface
    // =========================================================================

    /// The number of columns.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// The descriptor at the given column index.
    pub fn column(&self, index: usize) -> Result<&Column<T>, TableError> {
        self.schema
            .column(index)
            .ok_or_else(|| TableError::column_out_of_bounds(index, self.schema.len()))
    }

    /// The underlying field name of a column.
    pub fn column_name(&self, index: usize) -> Result<&str, TableError> {
        self.column(index).map(Column::name)
    }

    /// The display label of a column.
    pub fn column_label(&self, index: usize) -> Result<&str, TableError> {
        self.column(index).map(Column::label)
    }

    /// The value kind of a column.
    pub fn column_kind(&self, index: usize) -> Result<ValueKind, TableError> {
        self.column(index).map(Column::kind)
    }

    /// The tooltip of a column.
    pub fn column_tooltip(&self, index: usize) -> Result<&str, TableError> {
        self.column(index).map(Column::tooltip)
    }

    /// The initial width hint of a column.
    pub fn column_width(&self, index: usize) -> Result<u16, TableError> {
        self.column(index).map(Column::width)
    }

    /// Whether a column accepts writes.
    pub fn is_editable(&self, index: usize) -> Result<bool, TableError> {
        self.column(index).map(Column::editable)
    }

    // =========================================================================
    // Row surface
    // =========================================================================

    /// The number of stored rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The entity at the given storage row.
    pub fn entry(&self, row: usize) -> Result<&T, TableError> {
        self.rows.get(row)
    }

    /// Append an entity; returns the storage index it received.
    pub fn append(&mut self, entity: T) -> usize {
        self.rows.append(entity)
    }

    /// Remove and return the entity at the given storage row.
    pub fn remove_at(&mut self, row: usize) -> Result<T, TableError> {
        self.rows.remove_at(row)
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    // =========================================================================
    // Cell surface
    // =========================================================================

    /// The cell value at (storage row, column).
    ///
    /// Uses the column's configured getter when present, otherwise reads the
    /// underlying field by name. Access failures identify the column.
    pub fn value_at(&self, row: usize, col: usize) -> Result<Value, TableError> {
        let column = self.column(col)?;
        let entry = self.rows.get(row)?;
        match column.getter() {
            Some(getter) => Ok(getter(entry)),
            None => entry
                .field(column.name())
                .map_err(|source| TableError::access(col, source)),
        }
    }

    /// Write the cell value at (storage row, column).
    ///
    /// Writes to non-editable columns are a no-op and return `Ok(false)`.
    /// Otherwise the column's configured setter (or the by-name field write)
    /// applies the value, observers see [`RowsEvent::Updated`], and the call
    /// returns `Ok(true)`.
    pub fn set_value_at(&mut self, row: usize, col: usize, value: Value) -> Result<bool, TableError> {
        let (editable, name, setter) = {
            let column = self.column(col)?;
            (
                column.editable(),
                column.name().to_string(),
                column.setter().cloned(),
            )
        };
        if !editable {
            debug!("ignoring write to non-editable column {col} ({name})");
            return Ok(false);
        }

        let entry = self.rows.get_mut(row)?;
        let result = match setter {
            Some(setter) => setter(entry, value),
            None => entry.set_field(&name, value),
        };
        result.map_err(|source| TableError::access(col, source))?;

        self.rows.emit(RowsEvent::Updated { index: row });
        Ok(true)
    }
}

impl<T: Entity + fmt::Debug> fmt::Debug for TableModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("schema", &self.schema)
            .field("rows", &self.rows)
            .finish()
    }
}

impl<T: Entity> Clone for TableModel<T> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            rows: self.rows.clone(),
        }
    }
}
