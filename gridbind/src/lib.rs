//! gridbind - bind plain data types to a host table widget.
//!
//! The crate derives column metadata (name, label, type, width, tooltip,
//! editability) from per-field declarations on an entity type, holds the
//! entity rows in an ordered store, and translates between view coordinates
//! (post sort/filter) and storage coordinates for the host's table surface.
//!
//! The rendering and sort/filter host is decoupled behind two contracts:
//! [`model::TableModel`] supplies column metadata and cell values by storage
//! index, and [`view::RowView`] is the capability a sort/filter layer
//! implements to answer view-to-storage translation. [`view::SortFilterView`]
//! is the bundled implementation for hosts that don't bring their own.
//!
//! # Example
//!
//! ```ignore
//! use gridbind::prelude::*;
//!
//! #[derive(Clone, Debug, Entity)]
//! struct Pet {
//!     #[column(index = 0, label = "Name", width = 20)]
//!     name: String,
//!     #[column(index = 1, label = "Owner")]
//!     owner: String,
//!     #[column(index = 2, label = "Age", editable)]
//!     age: i32,
//! }
//!
//! let mut table = TableController::new(TableModel::<Pet>::new()?);
//! table.append(Pet { name: "Rex".into(), owner: "Ada".into(), age: 3 });
//! table.sort_by(|a, b| a.name.cmp(&b.name));
//! let first = table.entry_at(0)?;
//! ```

pub mod controller;
pub mod entity;
pub mod error;
pub mod model;
pub mod rows;
pub mod schema;
pub mod value;
pub mod view;

pub use gridbind_derive::Entity;

pub mod prelude {
    pub use crate::controller::TableController;
    pub use crate::entity::Entity;
    pub use crate::error::{FieldError, SchemaError, TableError};
    pub use crate::model::TableModel;
    pub use crate::rows::{RowStore, RowsEvent};
    pub use crate::schema::{Column, ColumnSpec, Schema, DEFAULT_WIDTH};
    pub use crate::value::{FromValue, Value, ValueKind};
    pub use crate::view::{RowView, SortFilterView};

    pub use gridbind_derive::*;
}
