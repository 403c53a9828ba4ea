use super::*;

#[test]
fn only_design_mode_edits() {
    assert_eq!(mode_from_query(Some("design")), RenderMode::Edit);
    assert_eq!(mode_from_query(Some("preview")), RenderMode::Preview);
    assert_eq!(mode_from_query(None), RenderMode::Preview);
}

#[test]
fn page_id_parses_integers_only() {
    assert_eq!(page_id_from_query(Some("12")), Some(12));
    assert_eq!(page_id_from_query(Some("abc")), None);
    assert_eq!(page_id_from_query(None), None);
}

#[test]
fn for_query_seeds_core_mode_and_background() {
    let state = DesignerState::for_query(Some("3"), Some("design"));
    assert_eq!(state.page_id, Some(3));
    assert_eq!(state.core.mode(), RenderMode::Edit);
    assert_eq!(state.background, DEFAULT_CANVAS_BACKGROUND);
}

#[test]
fn page_background_falls_back_when_blank() {
    let mut page = Page { id: 1, name: "Home".to_owned(), background_color: Some("#0a0a0a".to_owned()) };
    assert_eq!(canvas_background(&page), "#0a0a0a");
    page.background_color = Some(String::new());
    assert_eq!(canvas_background(&page), DEFAULT_CANVAS_BACKGROUND);
    page.background_color = None;
    let mut state = DesignerState::for_query(Some("1"), None);
    state.apply_page(&page);
    assert_eq!(state.page_name, "Home");
    assert_eq!(state.background, DEFAULT_CANVAS_BACKGROUND);
}
