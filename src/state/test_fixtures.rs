//! Shared fixtures for state and view-state tests.

use crate::model::{
    CellValue, Column, ColumnId, PagingData, TableRow,
};
use crate::state::{TableInput, TableOptions, TableState};
use serde_json::json;

/// A member record as an owning screen would fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub active: bool,
}

impl TableRow for Member {
    fn key(&self) -> Option<String> {
        Some(self.id.clone())
    }

    fn cell_value(&self, column: &ColumnId) -> CellValue {
        match column.as_str() {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "age" => json!(self.age),
            "active" => json!(self.active),
            _ => CellValue::Null,
        }
    }
}

pub fn col(id: &str) -> ColumnId {
    ColumnId::new(id).expect("fixture column ids are non-empty")
}

/// `id`, `name`, `age`, `active`, `notes`; `notes` is neither sortable nor pinnable.
pub fn member_columns() -> Vec<Column<Member>> {
    vec![
        Column::text(col("id"), "ID").with_size(8).with_min_size(4),
        Column::text(col("name"), "Name").with_size(20).with_min_size(6),
        Column::text(col("age"), "Age").with_size(6).with_min_size(3),
        Column::text(col("active"), "Active").with_size(8).with_min_size(3),
        Column::text(col("notes"), "Notes")
            .with_size(30)
            .with_min_size(10)
            .with_sortable(false)
            .with_pinnable(false),
    ]
}

pub fn member(n: usize) -> Member {
    Member {
        id: format!("m-{}", n),
        name: format!("Member {}", n),
        age: 20 + (n as u32 % 40),
        active: n % 2 == 0,
    }
}

pub fn members(range: std::ops::Range<usize>) -> Vec<Member> {
    range.map(member).collect()
}

/// Table with default options showing `rows` members of a `total`-row dataset.
pub fn table_with_rows(rows: usize, total: usize) -> TableState<Member> {
    table_with_options(TableOptions::default(), rows, total)
}

pub fn table_with_options(
    options: TableOptions<Member>,
    rows: usize,
    total: usize,
) -> TableState<Member> {
    let mut state = TableState::new(member_columns(), options);
    state.set_input(TableInput::new(
        members(0..rows),
        PagingData::new(total, 1, 10),
    ));
    state
}
