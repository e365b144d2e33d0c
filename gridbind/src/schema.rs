//! Column specs, immutable column descriptors, and the schema builder.

use std::fmt;
use std::sync::Arc;

use crate::entity::Entity;
use crate::error::{FieldError, SchemaError};
use crate::value::{Value, ValueKind};

/// Initial column width hint when a spec does not set one.
///
/// The unit is whatever the host measures column widths in; the core never
/// interprets it.
pub const DEFAULT_WIDTH: u16 = 50;

/// Caller-supplied value extraction function for one column.
pub type Getter<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Caller-supplied value mutation function for one column.
pub type Setter<T> = Arc<dyn Fn(&mut T, Value) -> Result<(), FieldError> + Send + Sync>;

// =============================================================================
// ColumnSpec
// =============================================================================

/// Per-field column configuration, consumed by [`Schema::build`].
///
/// A spec that calls [`at`](ColumnSpec::at) claims that exact column slot;
/// specs without an index claim fill the remaining slots in declaration
/// order with synthesized metadata (label = field name, default width,
/// non-editable).
///
/// # Examples
///
/// ```
/// use gridbind::schema::ColumnSpec;
/// use gridbind::value::ValueKind;
///
/// let spec: ColumnSpec<()> = ColumnSpec::new("name", ValueKind::String)
///     .at(0)
///     .label("Name")
///     .tooltip("Display name")
///     .width(20)
///     .editable();
/// ```
pub struct ColumnSpec<T> {
    pub(crate) name: String,
    pub(crate) kind: ValueKind,
    pub(crate) index: Option<usize>,
    pub(crate) label: Option<String>,
    pub(crate) tooltip: String,
    pub(crate) width: u16,
    pub(crate) editable: bool,
    pub(crate) getter: Option<Getter<T>>,
    pub(crate) setter: Option<Setter<T>>,
}

impl<T> ColumnSpec<T> {
    /// Create a new spec for the named field with the given value kind.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            index: None,
            label: None,
            tooltip: String::new(),
            width: DEFAULT_WIDTH,
            editable: false,
            getter: None,
            setter: None,
        }
    }

    /// Claim an explicit column slot for this field.
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the display label (defaults to the field name).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the column tooltip text.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set the initial column width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Mark the column as editable.
    ///
    /// Non-editable columns silently ignore writes via
    /// [`set_value_at`](crate::model::TableModel::set_value_at).
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Supply a value extraction function for this column.
    ///
    /// Without one, values are read from the underlying field by name via
    /// [`Entity::field`].
    pub fn getter(mut self, f: impl Fn(&T) -> Value + Send + Sync + 'static) -> Self {
        self.getter = Some(Arc::new(f));
        self
    }

    /// Supply a value mutation function for this column.
    ///
    /// Without one, values are written to the underlying field by name via
    /// [`Entity::set_field`].
    pub fn setter(
        mut self,
        f: impl Fn(&mut T, Value) -> Result<(), FieldError> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(Arc::new(f));
        self
    }

    fn into_column(self, index: usize) -> Column<T> {
        Column {
            index,
            label: self.label.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            kind: self.kind,
            tooltip: self.tooltip,
            width: self.width,
            editable: self.editable,
            getter: self.getter,
            setter: self.setter,
        }
    }
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            index: self.index,
            label: self.label.clone(),
            tooltip: self.tooltip.clone(),
            width: self.width,
            editable: self.editable,
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("index", &self.index)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("editable", &self.editable)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

// =============================================================================
// Column
// =============================================================================

/// Immutable metadata describing one table column.
///
/// Built once by [`Schema::build`] and never mutated afterwards.
pub struct Column<T> {
    index: usize,
    name: String,
    label: String,
    kind: ValueKind,
    tooltip: String,
    width: u16,
    editable: bool,
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

impl<T> Column<T> {
    /// The column position, dense from 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The underlying field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The declared value kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The tooltip text (empty when unset).
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// The initial width hint.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Whether cells in this column accept writes.
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// The configured value extraction function, if any.
    pub fn getter(&self) -> Option<&Getter<T>> {
        self.getter.as_ref()
    }

    /// The configured value mutation function, if any.
    pub fn setter(&self) -> Option<&Setter<T>> {
        self.setter.as_ref()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            name: self.name.clone(),
            label: self.label.clone(),
            kind: self.kind,
            tooltip: self.tooltip.clone(),
            width: self.width,
            editable: self.editable,
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("width", &self.width)
            .field("editable", &self.editable)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

// =============================================================================
// Schema
// =============================================================================

/// The ordered, immutable column descriptor array for one entity type.
///
/// Invariant: descriptor indices are unique and dense over `0..len()`.
pub struct Schema<T> {
    columns: Vec<Column<T>>,
}

impl<T> Schema<T> {
    /// Build a schema from per-field specs.
    ///
    /// Specs with an explicit index claim that slot; a duplicate claim or a
    /// claim outside `0..specs.len()` fails the whole construction. Specs
    /// without an index fill the remaining slots in declaration order.
    /// Column count always equals the number of specs.
    pub fn build(specs: Vec<ColumnSpec<T>>) -> Result<Self, SchemaError> {
        let count = specs.len();
        let mut slots: Vec<Option<Column<T>>> = (0..count).map(|_| None).collect();
        let mut untagged = Vec::new();

        // Tagged specs claim their slot first.
        for spec in specs {
            match spec.index {
                Some(index) => {
                    if index >= count {
                        return Err(SchemaError::IndexOutOfRange { index, count });
                    }
                    if slots[index].is_some() {
                        return Err(SchemaError::DuplicateIndex { index });
                    }
                    slots[index] = Some(spec.into_column(index));
                }
                None => untagged.push(spec),
            }
        }

        // Untagged specs fill the open slots in declaration order. The open
        // slot count always matches the untagged count since tagged specs
        // occupy distinct slots.
        let open: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect();
        for (spec, index) in untagged.into_iter().zip(open) {
            slots[index] = Some(spec.into_column(index));
        }

        Ok(Self {
            columns: slots.into_iter().flatten().collect(),
        })
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The descriptor at the given column position.
    pub fn column(&self, index: usize) -> Option<&Column<T>> {
        self.columns.get(index)
    }

    /// Iterate over the descriptors in column order.
    pub fn columns(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }
}

impl<T: Entity> Schema<T> {
    /// Build the schema an entity type declares via [`Entity::column_specs`].
    pub fn for_entity() -> Result<Self, SchemaError> {
        Self::build(T::column_specs())
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("columns", &self.columns).finish()
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}
