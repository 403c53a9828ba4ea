use super::*;

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(Endpoint::SignIn.path(), "/auth/signin");
    assert_eq!(Endpoint::ListTables.path(), "/api/data/tables");
    assert_eq!(Endpoint::SyncTable { table_id: 4 }.path(), "/api/data/sync/4");
    assert_eq!(Endpoint::CreateColumn { table_id: 4 }.path(), "/api/data/table/4/column/create");
    assert_eq!(Endpoint::UpdateColumn { column_id: 9 }.path(), "/api/data/column/9");
    assert_eq!(Endpoint::DeleteRelationship { relationship_id: 2 }.path(), "/api/data/relationships/2");
    assert_eq!(Endpoint::ListPages.path(), "/api/pages/all");
    assert_eq!(Endpoint::GetPage { page_id: 7 }.path(), "/api/pages/get/7");
    assert_eq!(Endpoint::DeletePage { page_id: 7 }.path(), "/api/pages/delete/7");
    assert_eq!(Endpoint::ListWidgets { page_id: 7 }.path(), "/api/widgets?pageId=7");
    assert_eq!(Endpoint::DeleteWidget { widget_id: 11 }.path(), "/api/widgets/11");
}

#[test]
fn endpoint_methods() {
    assert_eq!(Endpoint::ListWidgets { page_id: 1 }.method(), Method::Get);
    assert_eq!(Endpoint::SyncWidget.method(), Method::Post);
    assert_eq!(Endpoint::UpdateColumn { column_id: 1 }.method(), Method::Put);
    assert_eq!(Endpoint::DeletePage { page_id: 1 }.method(), Method::Delete);
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn url_joins_base_without_double_slash() {
    assert_eq!(
        Endpoint::ListPages.url("http://localhost:8080/"),
        "http://localhost:8080/api/pages/all"
    );
}

#[test]
fn only_auth_endpoints_skip_bearer() {
    assert!(!Endpoint::SignIn.requires_auth());
    assert!(!Endpoint::SignUp.requires_auth());
    assert!(Endpoint::ListPages.requires_auth());
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn status_error_keeps_body_text() {
    let err = ApiError::from_status(400, "  Table name already exists\n");
    assert_eq!(err.to_string(), "Table name already exists");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn status_error_falls_back_for_empty_body() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err.to_string(), "request failed: 500");
    assert_eq!(ApiError::MissingSession.status(), None);
}

#[test]
fn new_widget_record_omits_id_and_keeps_null_parent() {
    let record = WidgetRecord {
        id: None,
        page_id: 3,
        kind: "w-button".to_owned(),
        label: "BUTTON".to_owned(),
        x: 0.0,
        y: 0.0,
        parent_id: None,
        widget_order: 0,
        properties: vec![PropertyRecord {
            property_name: "backgroundColor".to_owned(),
            property_value: "#000000".to_owned(),
        }],
    };
    let json = serde_json::to_value(&record).expect("serialize");
    assert!(json.get("id").is_none());
    assert_eq!(json["parentId"], serde_json::Value::Null);
    assert_eq!(json["type"], "w-button");
    assert_eq!(json["widgetOrder"], 0);
    assert_eq!(json["properties"][0]["propertyName"], "backgroundColor");
}

#[test]
fn widget_record_tolerates_missing_optional_fields() {
    let record: WidgetRecord =
        serde_json::from_str(r#"{"id":5,"pageId":1,"type":"w-section"}"#).expect("deserialize");
    assert_eq!(record.id, Some(5));
    assert_eq!(record.parent_id, None);
    assert_eq!(record.widget_order, 0);
    assert!(record.properties.is_empty());
    assert!(record.label.is_empty());
}

fn widget_row(field: &str) -> Result<WidgetRecord, serde_json::Error> {
    serde_json::from_str(&format!(r#"{{"id":5,"pageId":1,"type":"w-section","{field}":null}}"#))
}

#[test]
fn null_widget_order_reads_as_zero() {
    let record = widget_row("widgetOrder").expect("deserialize");
    assert_eq!(record.widget_order, 0);
}

#[test]
fn null_properties_read_as_empty() {
    let record = widget_row("properties").expect("deserialize");
    assert!(record.properties.is_empty());
}

#[test]
fn null_label_reads_as_empty() {
    let record = widget_row("label").expect("deserialize");
    assert!(record.label.is_empty());
}

#[test]
fn one_null_row_does_not_fail_the_list() {
    let rows: Vec<WidgetRecord> = serde_json::from_str(
        r#"[{"id":1,"pageId":1,"type":"w-section","label":"Hero","widgetOrder":0},
            {"id":2,"pageId":1,"type":"w-label","label":null,"parentId":null,"widgetOrder":null,"properties":null,"x":null}]"#,
    )
    .expect("deserialize");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].parent_id, None);
    assert!(rows[1].x.abs() < f64::EPSILON);
}

#[test]
fn column_defaults_match_new_column_form() {
    let column = DataColumn::default();
    assert_eq!(column.data_type, "VARCHAR");
    assert_eq!(column.length, 255);
    assert_eq!(column.column_order, 1);
    assert!(!column.is_primary_key);
}

#[test]
fn table_deserializes_without_columns() {
    let table: DataTable = serde_json::from_str(r#"{"id":1,"tableName":"customers"}"#).expect("deserialize");
    assert!(table.columns.is_empty());
    assert_eq!(table.description, None);
}
