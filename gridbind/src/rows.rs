//! Ordered row storage with change notification.

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::error::TableError;

/// A structural change to the row store, delivered to subscribed observers
/// so an attached view layer can refresh incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsEvent {
    /// A row was appended at `index`.
    Inserted { index: usize },
    /// The row at `index` was mutated in place.
    Updated { index: usize },
    /// The row at `index` was removed; later rows shifted down by one.
    Removed { index: usize },
    /// All rows were removed; `len` is the count before clearing.
    Cleared { len: usize },
}

/// Observer callback for [`RowsEvent`]s.
pub type RowsListener = Arc<dyn Fn(&RowsEvent) + Send + Sync>;

/// Insertion-ordered storage for the table's entities.
///
/// The store never reorders itself; sorting and filtering live in the view
/// layer, which addresses rows here by storage index. Mutations notify
/// subscribed observers with the affected row.
pub struct RowStore<T> {
    rows: Vec<T>,
    listeners: Vec<RowsListener>,
}

impl<T> RowStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// The number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The entity at the given storage index.
    pub fn get(&self, index: usize) -> Result<&T, TableError> {
        self.rows
            .get(index)
            .ok_or_else(|| TableError::row_out_of_bounds(index, self.rows.len()))
    }

    /// Mutable access to the entity at the given storage index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, TableError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| TableError::row_out_of_bounds(index, len))
    }

    /// Iterate over the rows in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// The rows as a slice, in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    /// Append an entity at the end of the store.
    ///
    /// Returns the storage index it received.
    pub fn append(&mut self, entity: T) -> usize {
        let index = self.rows.len();
        self.rows.push(entity);
        trace!("row inserted at {index}");
        self.emit(RowsEvent::Inserted { index });
        index
    }

    /// Remove and return the entity at the given storage index.
    ///
    /// Remaining rows reindex contiguously. Out-of-bounds indices fail; the
    /// store is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, TableError> {
        if index >= self.rows.len() {
            return Err(TableError::row_out_of_bounds(index, self.rows.len()));
        }
        let entity = self.rows.remove(index);
        trace!("row removed at {index}");
        self.emit(RowsEvent::Removed { index });
        Ok(entity)
    }

    /// Remove all rows. A no-op (and no event) on an empty store.
    pub fn clear(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len();
        self.rows.clear();
        trace!("store cleared ({len} rows)");
        self.emit(RowsEvent::Cleared { len });
    }

    /// Subscribe an observer to structural changes.
    pub fn subscribe(&mut self, listener: impl Fn(&RowsEvent) + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    pub(crate) fn emit(&self, event: RowsEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

impl<T> Default for RowStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RowStore<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RowStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStore")
            .field("rows", &self.rows)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
