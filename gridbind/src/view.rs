//! View-coordinate translation: the sort/filter capability and its bundled
//! implementation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::rows::RowStore;

/// Capability interface implemented by a sort/filter layer.
///
/// The host's sorting/filtering component answers two questions: how many
/// rows are currently visible, and which storage row backs a given view row.
/// A view row with no backing storage row (out of the visible range) maps to
/// `None`.
pub trait RowView {
    /// Number of rows currently visible.
    fn view_row_count(&self) -> usize;

    /// Map a view row to its storage index.
    fn storage_index(&self, view_row: usize) -> Option<usize>;
}

/// Ordering function over entities for sorting.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Inclusion predicate over entities for filtering.
pub type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The bundled sort/filter layer.
///
/// Maintains a view-to-storage order vector over a [`RowStore`]: storage
/// rows that pass the inclusion test, stably sorted by the comparator when
/// one is set. The vector is rebuilt by [`refresh`](SortFilterView::refresh);
/// the store itself is never reordered.
pub struct SortFilterView<T> {
    order: Vec<usize>,
    comparator: Option<Comparator<T>>,
    filter: Option<Filter<T>>,
}

impl<T> SortFilterView<T> {
    /// Create a view with no sorting or filtering.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            comparator: None,
            filter: None,
        }
    }

    /// Set the sort order.
    pub fn sort_by(&mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) {
        self.comparator = Some(Arc::new(cmp));
    }

    /// Remove the sort order; view order falls back to storage order.
    pub fn clear_sort(&mut self) {
        self.comparator = None;
    }

    /// Set the inclusion predicate. Rows failing it disappear from the view.
    pub fn set_filter(&mut self, include: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.filter = Some(Arc::new(include));
    }

    /// Remove the inclusion predicate; all rows become visible.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// The inclusion test consulted per storage row.
    pub fn include(&self, entity: &T) -> bool {
        self.filter.as_ref().is_none_or(|f| f(entity))
    }

    /// Rebuild the view order from the current store contents.
    pub fn refresh(&mut self, rows: &RowStore<T>) {
        let slice = rows.as_slice();
        let mut order: Vec<usize> = slice
            .iter()
            .enumerate()
            .filter_map(|(index, entity)| self.include(entity).then_some(index))
            .collect();
        if let Some(cmp) = &self.comparator {
            order.sort_by(|&a, &b| cmp(&slice[a], &slice[b]));
        }
        trace!("view refreshed: {} of {} rows visible", order.len(), slice.len());
        self.order = order;
    }

    /// Map a storage index back to its view row, if visible.
    pub fn view_index_of(&self, storage: usize) -> Option<usize> {
        self.order.iter().position(|&s| s == storage)
    }
}

impl<T> RowView for SortFilterView<T> {
    fn view_row_count(&self) -> usize {
        self.order.len()
    }

    fn storage_index(&self, view_row: usize) -> Option<usize> {
        self.order.get(view_row).copied()
    }
}

impl<T> Default for SortFilterView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SortFilterView<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            comparator: self.comparator.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<T> fmt::Debug for SortFilterView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortFilterView")
            .field("order", &self.order)
            .field("sorted", &self.comparator.is_some())
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}
