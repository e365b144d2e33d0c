//! Caller-facing table operations in view (table) coordinates.

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::entity::Entity;
use crate::error::TableError;
use crate::model::TableModel;
use crate::view::{RowView, SortFilterView};

/// Composes a [`TableModel`] with a [`SortFilterView`] and a row selection,
/// exposing add/remove/filter/sort and row queries in view coordinates.
///
/// The selection is tracked as a storage index, so it stays on the same
/// entity across re-sorts. A selected row that the active filter excludes
/// reads back as "no selection" until the filter admits it again.
pub struct TableController<T: Entity> {
    model: TableModel<T>,
    view: SortFilterView<T>,
    selected: Option<usize>,
}

impl<T: Entity> TableController<T> {
    /// Wrap a model; the view starts unsorted and unfiltered.
    pub fn new(model: TableModel<T>) -> Self {
        let mut view = SortFilterView::new();
        view.refresh(model.rows());
        Self {
            model,
            view,
            selected: None,
        }
    }

    /// The underlying model.
    pub fn model(&self) -> &TableModel<T> {
        &self.model
    }

    /// The sort/filter view.
    pub fn view(&self) -> &SortFilterView<T> {
        &self.view
    }

    /// Mutate the underlying model, then re-sync the view.
    pub fn update(&mut self, f: impl FnOnce(&mut TableModel<T>)) {
        f(&mut self.model);
        self.refresh();
    }

    /// Re-sync the view with the current store contents.
    pub fn refresh(&mut self) {
        self.view.refresh(self.model.rows());
        if let Some(storage) = self.selected
            && storage >= self.model.row_count()
        {
            self.selected = None;
        }
    }

    /// Total rows visible in the view.
    pub fn row_count(&self) -> usize {
        self.view.view_row_count()
    }

    /// Append an entity; returns the storage index it received.
    pub fn append(&mut self, entity: T) -> usize {
        let index = self.model.append(entity);
        self.refresh();
        index
    }

    /// The entity at the given view row.
    pub fn entry_at(&self, view_row: usize) -> Result<&T, TableError> {
        let storage = self.translate(view_row)?;
        self.model.entry(storage)
    }

    /// Remove and return the entity at the given view row.
    pub fn remove_at(&mut self, view_row: usize) -> Result<T, TableError> {
        let storage = self.translate(view_row)?;
        let removed = self.model.remove_at(storage)?;
        self.selected = match self.selected {
            Some(s) if s == storage => None,
            Some(s) if s > storage => Some(s - 1),
            other => other,
        };
        self.refresh();
        Ok(removed)
    }

    /// Remove all rows and drop the selection.
    pub fn clear(&mut self) {
        self.model.clear();
        self.selected = None;
        self.refresh();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select the row at the given view position.
    pub fn select(&mut self, view_row: usize) -> Result<(), TableError> {
        self.selected = Some(self.translate(view_row)?);
        Ok(())
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected storage index, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entity, or `None` when nothing is selected or the
    /// selected row is currently filtered out of the view.
    pub fn selected_entry(&self) -> Option<&T> {
        let storage = self.selected?;
        self.view.view_index_of(storage)?;
        self.model.entry(storage).ok()
    }

    /// Remove the selected row, if there is a visible selection.
    pub fn remove_selected(&mut self) -> Option<T> {
        let storage = self.selected?;
        self.view.view_index_of(storage)?;
        let removed = self.model.remove_at(storage).ok()?;
        self.selected = None;
        self.refresh();
        Some(removed)
    }

    // =========================================================================
    // Sort and filter
    // =========================================================================

    /// Sort the view with the given comparator (stable).
    pub fn sort_by(&mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) {
        self.view.sort_by(cmp);
        self.refresh();
    }

    /// Remove the sort order; the view falls back to storage order.
    pub fn clear_sort(&mut self) {
        self.view.clear_sort();
        self.refresh();
    }

    /// Filter the view with an inclusion predicate.
    pub fn filter(&mut self, include: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.view.set_filter(include);
        self.refresh();
        debug!("filter applied: {} rows visible", self.row_count());
    }

    /// Remove the filter; all rows become visible again.
    pub fn clear_filter(&mut self) {
        self.view.clear_filter();
        self.refresh();
    }

    fn translate(&self, view_row: usize) -> Result<usize, TableError> {
        self.view
            .storage_index(view_row)
            .ok_or_else(|| TableError::row_out_of_bounds(view_row, self.view.view_row_count()))
    }
}

impl<T: Entity + fmt::Debug> fmt::Debug for TableController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("model", &self.model)
            .field("view", &self.view)
            .field("selected", &self.selected)
            .finish()
    }
}
