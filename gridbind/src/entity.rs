//! The Entity trait: what a row type must provide.

use crate::error::FieldError;
use crate::schema::ColumnSpec;
use crate::value::Value;

/// Trait for types whose instances become table rows.
///
/// Implementations supply declaration-ordered field names, by-name dynamic
/// field access (the fallback used when a column has no explicit
/// accessor/mutator), and the per-field column specs the schema is built
/// from.
///
/// `#[derive(Entity)]` generates all of this from struct fields, with
/// `#[column(...)]` attributes carrying the optional metadata:
///
/// ```ignore
/// #[derive(Clone, Debug, Entity)]
/// struct Pet {
///     #[column(index = 0, label = "Name", tooltip = "Pet name", width = 20)]
///     name: String,
///     #[column(index = 1, label = "Owner")]
///     owner: String,
///     #[column(index = 2, label = "Age", editable)]
///     age: i32,
///     // untagged: synthesized descriptor (label = "notes", default width,
///     // non-editable), slotted after the tagged columns
///     notes: Option<String>,
/// }
/// ```
///
/// Hand-written implementations register their columns explicitly instead:
///
/// ```ignore
/// fn column_specs() -> Vec<ColumnSpec<Self>> {
///     vec![
///         ColumnSpec::new("name", ValueKind::String).at(0).label("Name"),
///         ColumnSpec::new("age", ValueKind::Int).at(1).editable(),
///     ]
/// }
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    /// Declared field names, in declaration order.
    fn fields() -> &'static [&'static str];

    /// Read the named field as a dynamic value.
    fn field(&self, name: &str) -> Result<Value, FieldError>;

    /// Write the named field from a dynamic value.
    ///
    /// Fails with [`FieldError::TypeMismatch`] when the value kind does not
    /// match the field, and [`FieldError::Missing`] for unknown names.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError>;

    /// Per-field column metadata, one spec per declared field.
    fn column_specs() -> Vec<ColumnSpec<Self>>;
}
