//! Tests for the table model: row mutations, events, and cell access.

use std::sync::{Arc, Mutex};

use gridbind::error::{FieldError, TableError};
use gridbind::model::TableModel;
use gridbind::rows::RowsEvent;
use gridbind::value::{Value, ValueKind};
use gridbind::Entity;

#[derive(Clone, Debug, PartialEq, Entity)]
struct Pet {
    #[column(index = 0, label = "Name", width = 20)]
    name: String,
    #[column(index = 1, label = "Owner")]
    owner: String,
    #[column(index = 2, label = "Age", editable)]
    age: i32,
}

fn pet(name: &str, owner: &str, age: i32) -> Pet {
    Pet {
        name: name.into(),
        owner: owner.into(),
        age,
    }
}

fn model() -> TableModel<Pet> {
    TableModel::new().unwrap()
}

#[test]
fn test_schema_matches_declaration() {
    let model = model();
    assert_eq!(model.column_count(), 3);
    assert_eq!(model.column_label(0).unwrap(), "Name");
    assert_eq!(model.column_name(1).unwrap(), "owner");
    assert_eq!(model.column_kind(2).unwrap(), ValueKind::Int);
    assert_eq!(model.column_width(0).unwrap(), 20);
    assert!(model.is_editable(2).unwrap());
    assert!(!model.is_editable(0).unwrap());
}

#[test]
fn test_append_then_get_last() {
    let mut model = model();
    let rex = pet("Rex", "Ada", 3);
    model.append(rex.clone());
    assert_eq!(model.row_count(), 1);
    assert_eq!(model.entry(model.row_count() - 1).unwrap(), &rex);
}

#[test]
fn test_remove_reindexes_contiguously() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    model.append(pet("Milo", "Bo", 5));
    model.append(pet("Ivy", "Cleo", 1));

    let removed = model.remove_at(1).unwrap();
    assert_eq!(removed.name, "Milo");
    assert_eq!(model.row_count(), 2);
    assert_eq!(model.entry(0).unwrap().name, "Rex");
    assert_eq!(model.entry(1).unwrap().name, "Ivy");
}

#[test]
fn test_remove_out_of_bounds() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    assert_eq!(
        model.remove_at(1).unwrap_err(),
        TableError::RowOutOfBounds { index: 1, len: 1 }
    );
    // Store unchanged.
    assert_eq!(model.row_count(), 1);
}

#[test]
fn test_clear() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    model.append(pet("Milo", "Bo", 5));
    model.clear();
    assert_eq!(model.row_count(), 0);
    // Clearing an empty store is a no-op.
    model.clear();
    assert_eq!(model.row_count(), 0);
}

#[test]
fn test_mutations_notify_observers() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut model = model();
    let sink = Arc::clone(&events);
    model
        .rows_mut()
        .subscribe(move |event| sink.lock().unwrap().push(*event));

    model.append(pet("Rex", "Ada", 3));
    model.append(pet("Milo", "Bo", 5));
    model.remove_at(0).unwrap();
    model.clear();
    model.clear(); // no event

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            RowsEvent::Inserted { index: 0 },
            RowsEvent::Inserted { index: 1 },
            RowsEvent::Removed { index: 0 },
            RowsEvent::Cleared { len: 1 },
        ]
    );
}

#[test]
fn test_value_at_reads_fields_by_name() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    assert_eq!(model.value_at(0, 0).unwrap(), Value::from("Rex"));
    assert_eq!(model.value_at(0, 2).unwrap(), Value::Int(3));
}

#[test]
fn test_value_at_prefers_custom_getter() {
    use gridbind::schema::{ColumnSpec, Schema};

    let schema = Schema::build(vec![
        ColumnSpec::new("name", ValueKind::String)
            .at(0)
            .getter(|p: &Pet| Value::from(format!("{} ({})", p.name, p.owner))),
    ])
    .unwrap();
    let mut model = TableModel::with_schema(schema);
    model.append(pet("Rex", "Ada", 3));
    assert_eq!(model.value_at(0, 0).unwrap(), Value::from("Rex (Ada)"));
}

#[test]
fn test_value_at_bounds() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    assert_eq!(
        model.value_at(0, 9).unwrap_err(),
        TableError::ColumnOutOfBounds { index: 9, count: 3 }
    );
    assert_eq!(
        model.value_at(4, 0).unwrap_err(),
        TableError::RowOutOfBounds { index: 4, len: 1 }
    );
}

#[test]
fn test_set_value_on_editable_column() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    let applied = model.set_value_at(0, 2, Value::Int(4)).unwrap();
    assert!(applied);
    assert_eq!(model.entry(0).unwrap().age, 4);
}

#[test]
fn test_set_value_on_non_editable_column_is_noop() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    let applied = model.set_value_at(0, 0, Value::from("Fido")).unwrap();
    assert!(!applied);
    assert_eq!(model.entry(0).unwrap().name, "Rex");
}

#[test]
fn test_set_value_emits_updated_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut model = model();
    let sink = Arc::clone(&events);
    model
        .rows_mut()
        .subscribe(move |event| sink.lock().unwrap().push(*event));

    model.append(pet("Rex", "Ada", 3));
    model.set_value_at(0, 2, Value::Int(4)).unwrap();
    // A rejected write produces no event.
    model.set_value_at(0, 0, Value::from("Fido")).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            RowsEvent::Inserted { index: 0 },
            RowsEvent::Updated { index: 0 },
        ]
    );
}

#[test]
fn test_set_value_type_mismatch_identifies_column() {
    let mut model = model();
    model.append(pet("Rex", "Ada", 3));
    let err = model.set_value_at(0, 2, Value::from("old")).unwrap_err();
    assert_eq!(
        err,
        TableError::Access {
            column: 2,
            source: FieldError::type_mismatch("age", "int", "string"),
        }
    );
    // Entity unchanged on failure.
    assert_eq!(model.entry(0).unwrap().age, 3);
}

#[test]
fn test_set_value_prefers_custom_setter() {
    use gridbind::schema::{ColumnSpec, Schema};

    let schema = Schema::build(vec![
        ColumnSpec::new("age", ValueKind::Int)
            .at(0)
            .editable()
            .setter(|p: &mut Pet, v| {
                p.age = v
                    .as_i32()
                    .ok_or_else(|| FieldError::type_mismatch("age", "int", v.type_name()))?
                    .max(0);
                Ok(())
            }),
    ])
    .unwrap();
    let mut model = TableModel::with_schema(schema);
    model.append(pet("Rex", "Ada", 3));
    model.set_value_at(0, 0, Value::Int(-5)).unwrap();
    assert_eq!(model.entry(0).unwrap().age, 0);
}
