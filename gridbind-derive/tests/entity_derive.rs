//! Tests for #[derive(Entity)] expansion, driven as an external user.

use chrono::{TimeZone, Utc};
use gridbind::entity::Entity as _;
use gridbind::error::{FieldError, SchemaError};
use gridbind::schema::{Schema, DEFAULT_WIDTH};
use gridbind::value::{Value, ValueKind};
use gridbind::Entity;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Entity)]
struct Person {
    #[column(index = 0, label = "Name", tooltip = "Full name", width = 24)]
    name: String,
    #[column(index = 1, label = "Owner")]
    owner: String,
    #[column(index = 2, label = "Age", editable)]
    age: i32,
}

#[derive(Clone, Debug, PartialEq, Entity)]
struct Asset {
    #[column(index = 0, label = "Id")]
    id: Uuid,
    #[column(index = 1, label = "Acquired")]
    acquired: chrono::DateTime<Utc>,
    #[column(index = 2, label = "Price", editable)]
    price: f64,
    active: bool,
    note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Entity)]
struct Clash {
    #[column(index = 0)]
    a: String,
    #[column(index = 0)]
    b: String,
}

fn person() -> Person {
    Person {
        name: "Ada".into(),
        owner: "Lab".into(),
        age: 36,
    }
}

#[test]
fn test_fields_in_declaration_order() {
    assert_eq!(Person::fields(), &["name", "owner", "age"]);
}

#[test]
fn test_schema_from_attributes() {
    let schema = Schema::<Person>::for_entity().unwrap();
    assert_eq!(schema.len(), 3);

    let name = schema.column(0).unwrap();
    assert_eq!(name.name(), "name");
    assert_eq!(name.label(), "Name");
    assert_eq!(name.tooltip(), "Full name");
    assert_eq!(name.width(), 24);
    assert_eq!(name.kind(), ValueKind::String);
    assert!(!name.editable());

    assert_eq!(schema.column(1).unwrap().label(), "Owner");

    let age = schema.column(2).unwrap();
    assert_eq!(age.kind(), ValueKind::Int);
    assert!(age.editable());
}

#[test]
fn test_untagged_fields_get_defaults_after_tagged() {
    let schema = Schema::<Asset>::for_entity().unwrap();
    assert_eq!(schema.len(), 5);

    // Untagged fields fill slots 3 and 4 in declaration order.
    let active = schema.column(3).unwrap();
    assert_eq!(active.name(), "active");
    assert_eq!(active.label(), "active");
    assert_eq!(active.width(), DEFAULT_WIDTH);
    assert_eq!(active.kind(), ValueKind::Bool);
    assert!(!active.editable());

    let note = schema.column(4).unwrap();
    assert_eq!(note.name(), "note");
    assert_eq!(note.kind(), ValueKind::String);
}

#[test]
fn test_kind_mapping() {
    let schema = Schema::<Asset>::for_entity().unwrap();
    assert_eq!(schema.column(0).unwrap().kind(), ValueKind::Guid);
    assert_eq!(schema.column(1).unwrap().kind(), ValueKind::DateTime);
    assert_eq!(schema.column(2).unwrap().kind(), ValueKind::Float);
}

#[test]
fn test_duplicate_index_fails_at_construction() {
    assert_eq!(
        Schema::<Clash>::for_entity().unwrap_err(),
        SchemaError::DuplicateIndex { index: 0 }
    );
}

#[test]
fn test_field_read() {
    let p = person();
    assert_eq!(p.field("name").unwrap(), Value::from("Ada"));
    assert_eq!(p.field("age").unwrap(), Value::Int(36));
    assert_eq!(
        p.field("missing").unwrap_err(),
        FieldError::missing("missing")
    );
}

#[test]
fn test_field_write() {
    let mut p = person();
    p.set_field("age", Value::Int(37)).unwrap();
    assert_eq!(p.age, 37);
    p.set_field("name", Value::from("Grace")).unwrap();
    assert_eq!(p.name, "Grace");
}

#[test]
fn test_field_write_type_mismatch() {
    let mut p = person();
    assert_eq!(
        p.set_field("age", Value::from("old")).unwrap_err(),
        FieldError::type_mismatch("age", "int", "string")
    );
    assert_eq!(p.age, 36);
}

#[test]
fn test_option_field_accepts_null() {
    let mut a = Asset {
        id: Uuid::new_v4(),
        acquired: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        price: 9.5,
        active: true,
        note: Some("keep".into()),
    };

    assert_eq!(a.field("note").unwrap(), Value::from("keep"));
    a.set_field("note", Value::Null).unwrap();
    assert_eq!(a.note, None);
    assert_eq!(a.field("note").unwrap(), Value::Null);
    a.set_field("note", Value::from("back")).unwrap();
    assert_eq!(a.note.as_deref(), Some("back"));
}

#[test]
fn test_guid_and_datetime_round_trip() {
    let id = Uuid::new_v4();
    let when = Utc.with_ymd_and_hms(2023, 6, 7, 8, 9, 10).unwrap();
    let mut a = Asset {
        id,
        acquired: when,
        price: 1.0,
        active: false,
        note: None,
    };

    assert_eq!(a.field("id").unwrap(), Value::Guid(id));
    assert_eq!(a.field("acquired").unwrap(), Value::DateTime(when));

    let other = Uuid::new_v4();
    a.set_field("id", Value::Guid(other)).unwrap();
    assert_eq!(a.id, other);
}

#[test]
fn test_derived_entity_in_model() {
    use gridbind::model::TableModel;

    let mut model: TableModel<Person> = TableModel::new().unwrap();
    model.append(person());
    assert_eq!(model.value_at(0, 0).unwrap(), Value::from("Ada"));
    assert!(model.set_value_at(0, 2, Value::Int(40)).unwrap());
    assert_eq!(model.entry(0).unwrap().age, 40);
    // Non-editable column: write ignored.
    assert!(!model.set_value_at(0, 0, Value::from("X")).unwrap());
}
