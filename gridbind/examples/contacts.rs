//! Contacts Example
//!
//! Binds a plain contact struct to a text-rendered table host, then walks
//! through sorting, filtering, selection, and in-place edits.

use std::fs::File;

use gridbind::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Clone, Debug, Entity)]
struct Contact {
    #[column(index = 0, label = "Name", tooltip = "Contact name", width = 16)]
    name: String,
    #[column(index = 1, label = "City", width = 12)]
    city: String,
    #[column(index = 2, label = "Age", width = 5, editable)]
    age: i32,
    email: Option<String>,
}

fn sample_contacts() -> Vec<Contact> {
    let data = [
        ("Ada Lovelace", "London", 36, Some("ada@analytical.engine")),
        ("Grace Hopper", "Arlington", 85, Some("grace@navy.mil")),
        ("Alan Turing", "Wilmslow", 41, None),
        ("Edsger Dijkstra", "Nuenen", 72, Some("ewd@utexas.edu")),
        ("Barbara Liskov", "Boston", 83, None),
    ];
    data.into_iter()
        .map(|(name, city, age, email)| Contact {
            name: name.to_string(),
            city: city.to_string(),
            age,
            email: email.map(str::to_string),
        })
        .collect()
}

/// A minimal rendering host: prints the table through the model boundary
/// (column labels and widths, cell values by translated index).
fn render<T: Entity>(table: &TableController<T>) {
    let model = table.model();
    let mut header = String::new();
    for col in model.schema().columns() {
        let width = col.width() as usize;
        header.push_str(&format!("{:width$} ", col.label()));
    }
    println!("{header}");

    for view_row in 0..table.row_count() {
        let storage = table
            .view()
            .storage_index(view_row)
            .expect("visible row maps to storage");
        let mut line = String::new();
        for col_index in 0..model.column_count() {
            let width = model.column_width(col_index).expect("valid column") as usize;
            let value = model
                .value_at(storage, col_index)
                .expect("valid cell access");
            let text = match value {
                Value::Null => String::new(),
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Int(i) => i.to_string(),
                Value::Long(i) => i.to_string(),
                Value::Float(x) => x.to_string(),
                other => format!("{other:?}"),
            };
            line.push_str(&format!("{text:width$} "));
        }
        println!("{line}");
    }
    println!();
}

fn main() {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("contacts-example.log").expect("create log file"),
    )
    .expect("init logger");

    let mut table =
        TableController::new(TableModel::<Contact>::new().expect("consistent column specs"));
    for contact in sample_contacts() {
        table.append(contact);
    }

    println!("== insertion order ==");
    render(&table);

    println!("== sorted by age ==");
    table.sort_by(|a, b| a.age.cmp(&b.age));
    render(&table);

    println!("== only contacts with an email ==");
    table.filter(|c| c.email.is_some());
    render(&table);

    table.select(0).expect("view has rows");
    if let Some(selected) = table.selected_entry() {
        println!("selected: {}", selected.name);
    }

    // Edit the selected contact's age through the cell surface.
    if let Some(storage) = table.selection() {
        table.update(|model| {
            model
                .set_value_at(storage, 2, Value::Int(37))
                .expect("age column is editable");
        });
    }

    table.clear_filter();
    table.clear_sort();
    println!("== after edit, insertion order ==");
    render(&table);
}
