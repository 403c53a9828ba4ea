use super::*;

fn column(id: i64, name: &str) -> DataColumn {
    DataColumn { id: Some(id), column_name: name.to_owned(), ..DataColumn::default() }
}

fn table(id: i64, name: &str, columns: Vec<DataColumn>) -> DataTable {
    DataTable { id, table_name: name.to_owned(), description: None, columns }
}

fn loaded() -> ModelerState {
    let mut state = ModelerState::default();
    state.apply_loaded(
        vec![
            table(1, "Customers", vec![column(10, "Id"), column(11, "Name")]),
            table(2, "Orders", vec![column(20, "Id"), column(21, "CustomerId")]),
        ],
        Vec::new(),
    );
    state
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn table_name_falls_back_to_unknown() {
    let state = loaded();
    assert_eq!(state.table_name(Some(2)), "Orders");
    assert_eq!(state.table_name(Some(99)), UNKNOWN);
    assert_eq!(state.table_name(None), UNKNOWN);
}

#[test]
fn column_lookups() {
    let state = loaded();
    assert_eq!(state.columns_for(Some(1)).len(), 2);
    assert!(state.columns_for(Some(5)).is_empty());
    assert_eq!(state.column_name(2, 21), "CustomerId");
    assert_eq!(state.column_name(2, 10), UNKNOWN);
}

#[test]
fn reload_clears_vanished_selection() {
    let mut state = loaded();
    state.selected_table_id = Some(2);
    state.apply_loaded(vec![table(1, "Customers", Vec::new())], Vec::new());
    assert_eq!(state.selected_table_id, None);
}

// =============================================================
// Column form
// =============================================================

#[test]
fn data_type_sets_fixed_lengths() {
    let mut col = DataColumn { length: 10, ..DataColumn::default() };
    apply_data_type(&mut col, "UNIQUEIDENTIFIER");
    assert_eq!((col.data_type.as_str(), col.length), ("UNIQUEIDENTIFIER", 36));
    apply_data_type(&mut col, "INTEGER");
    assert_eq!(col.length, 36);
    apply_data_type(&mut col, "VARCHAR");
    assert_eq!(col.length, 255);
}

#[test]
fn closing_modal_orders_next_column_after_existing() {
    let mut state = loaded();
    state.selected_table_id = Some(1);
    state.edit_column(&column(10, "Id"));
    assert_eq!(state.modal, Some(ModalMode::Column));
    assert_eq!(state.editing_column_id, Some(10));
    state.close_modal();
    assert_eq!(state.modal, None);
    assert_eq!(state.editing_column_id, None);
    assert_eq!(state.column.column_order, 3);
    assert_eq!(state.column.column_name, "");
}

#[test]
fn blank_column_without_table_starts_at_one() {
    assert_eq!(blank_column(None).column_order, 1);
}

// =============================================================
// Table + relationship forms
// =============================================================

#[test]
fn new_table_requires_name() {
    let mut state = loaded();
    assert!(state.new_table().is_err());
    state.table_name = " Products ".to_owned();
    state.table_description = "catalog".to_owned();
    let table = state.new_table().expect("valid");
    assert_eq!(table.table_name, "Products");
    assert_eq!(table.description, "catalog");
}

#[test]
fn relationship_requires_all_fields() {
    let mut state = loaded();
    state.relation = RelationDraft {
        source_table_id: Some(2),
        source_column_id: Some(21),
        target_table_id: Some(1),
        target_column_id: None,
    };
    assert_eq!(state.new_relationship(), Err("Please select all fields"));
}

#[test]
fn relationship_is_named_after_tables() {
    let mut state = loaded();
    state.relation = RelationDraft {
        source_table_id: Some(2),
        source_column_id: Some(21),
        target_table_id: Some(1),
        target_column_id: Some(10),
    };
    let rel = state.new_relationship().expect("complete draft");
    assert_eq!(rel.fk_name.as_deref(), Some("FK_Orders_Customers"));
    assert_eq!((rel.source_column_id, rel.target_column_id), (21, 10));

    state.relation.target_table_id = Some(42);
    assert_eq!(state.new_relationship(), Err("Invalid table selection"));
}

#[test]
fn parse_id_treats_placeholder_as_none() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("12"), Some(12));
}
