//! Data-modeler state: tables, relationships and the open editor forms.
//!
//! DESIGN
//! ======
//! Tables and relationships are always reloaded together after any change,
//! so this state never patches lists locally. Form state lives next to the
//! lists because closing a form resets it relative to the selected table.

#[cfg(test)]
#[path = "datasource_test.rs"]
mod datasource_test;

use wire::{DataColumn, DataRelationship, DataTable, NewTable};

/// Fallback label for ids that do not resolve to a loaded table or column.
pub const UNKNOWN: &str = "Unknown";

/// Column types offered by the column editor: `(value, label)`.
pub const DATA_TYPES: &[(&str, &str)] = &[
    ("VARCHAR", "VARCHAR"),
    ("INTEGER", "INTEGER"),
    ("UNIQUEIDENTIFIER", "UUID"),
    ("DECIMAL", "DECIMAL"),
    ("BOOLEAN", "BOOLEAN"),
    ("DATETIME", "DATETIME"),
    ("TEXT", "TEXT"),
];

/// Which editor form is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Table,
    Column,
    Relation,
}

/// Four selections needed to map a foreign key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationDraft {
    pub source_table_id: Option<i64>,
    pub source_column_id: Option<i64>,
    pub target_table_id: Option<i64>,
    pub target_column_id: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct ModelerState {
    pub tables: Vec<DataTable>,
    pub relationships: Vec<DataRelationship>,
    pub selected_table_id: Option<i64>,
    pub loading: bool,
    pub syncing: bool,

    pub modal: Option<ModalMode>,
    pub editing_column_id: Option<i64>,
    pub table_name: String,
    pub table_description: String,
    pub column: DataColumn,
    pub relation: RelationDraft,
}

impl ModelerState {
    pub fn table(&self, id: i64) -> Option<&DataTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn selected_table(&self) -> Option<&DataTable> {
        self.selected_table_id.and_then(|id| self.table(id))
    }

    /// Display name of table `id`, or [`UNKNOWN`].
    pub fn table_name(&self, id: Option<i64>) -> &str {
        id.and_then(|id| self.table(id)).map_or(UNKNOWN, |t| t.table_name.as_str())
    }

    /// Display name of column `column_id` of table `table_id`, or [`UNKNOWN`].
    pub fn column_name(&self, table_id: i64, column_id: i64) -> &str {
        self.columns_for(Some(table_id))
            .iter()
            .find(|c| c.id == Some(column_id))
            .map_or(UNKNOWN, |c| c.column_name.as_str())
    }

    /// Columns of table `id`; empty for unknown tables.
    pub fn columns_for(&self, id: Option<i64>) -> &[DataColumn] {
        id.and_then(|id| self.table(id)).map(|t| t.columns.as_slice()).unwrap_or_default()
    }

    /// Replace both lists after a reload. A selection whose table vanished
    /// is cleared.
    pub fn apply_loaded(&mut self, tables: Vec<DataTable>, relationships: Vec<DataRelationship>) {
        self.tables = tables;
        self.relationships = relationships;
        if self.selected_table_id.is_some_and(|id| self.table(id).is_none()) {
            self.selected_table_id = None;
        }
    }

    /// Open the column editor prefilled from an existing column.
    pub fn edit_column(&mut self, column: &DataColumn) {
        self.editing_column_id = column.id;
        self.column = column.clone();
        self.modal = Some(ModalMode::Column);
    }

    /// Close any form and reset it. The next new column is ordered after the
    /// selected table's existing columns.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.editing_column_id = None;
        self.table_name.clear();
        self.table_description.clear();
        self.relation = RelationDraft::default();
        self.column = blank_column(self.selected_table());
    }

    /// Payload for the create-table form.
    ///
    /// # Errors
    ///
    /// Returns a message when the table name is blank.
    pub fn new_table(&self) -> Result<NewTable, &'static str> {
        let name = self.table_name.trim();
        if name.is_empty() {
            return Err("Please enter a table name");
        }
        Ok(NewTable { table_name: name.to_owned(), description: self.table_description.trim().to_owned() })
    }

    /// Payload for the map-relationship form.
    ///
    /// # Errors
    ///
    /// Returns a message when a selection is missing or a table no longer
    /// exists.
    pub fn new_relationship(&self) -> Result<DataRelationship, &'static str> {
        let draft = &self.relation;
        let (Some(source_table_id), Some(source_column_id), Some(target_table_id), Some(target_column_id)) = (
            draft.source_table_id,
            draft.source_column_id,
            draft.target_table_id,
            draft.target_column_id,
        ) else {
            return Err("Please select all fields");
        };
        let (Some(source), Some(target)) = (self.table(source_table_id), self.table(target_table_id)) else {
            return Err("Invalid table selection");
        };
        Ok(DataRelationship {
            id: None,
            fk_name: Some(fk_name(&source.table_name, &target.table_name)),
            source_table_id,
            source_column_id,
            target_table_id,
            target_column_id,
        })
    }
}

/// Foreign-key constraint name for a source/target table pair.
pub fn fk_name(source_table: &str, target_table: &str) -> String {
    format!("FK_{source_table}_{target_table}")
}

/// A fresh column ordered after `table`'s existing columns.
pub fn blank_column(table: Option<&DataTable>) -> DataColumn {
    let existing = table.map_or(0, |t| t.columns.len());
    DataColumn { column_order: i64::try_from(existing).map_or(1, |n| n + 1), ..DataColumn::default() }
}

/// Change a column's type, resetting the length for types with a fixed one.
pub fn apply_data_type(column: &mut DataColumn, data_type: &str) {
    column.data_type = data_type.to_owned();
    match data_type {
        "UNIQUEIDENTIFIER" => column.length = 36,
        "VARCHAR" => column.length = 255,
        _ => {}
    }
}

/// Parse a `<select>` value; the empty placeholder option yields `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => None,
    }
}
