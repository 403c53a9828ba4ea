use super::*;

fn page(id: i64, name: &str) -> Page {
    Page { id, name: name.to_owned(), background_color: None }
}

#[test]
fn new_page_trims_and_keeps_background() {
    let page = new_page("  Dashboard ", Some(DEFAULT_PAGE_BACKGROUND)).expect("valid name");
    assert_eq!(page.name, "Dashboard");
    assert_eq!(page.background_color.as_deref(), Some("#0a0a0a"));
}

#[test]
fn new_page_rejects_blank_names() {
    assert_eq!(new_page("   ", None), Err(EMPTY_NAME_MESSAGE));
}

#[test]
fn remove_drops_only_matching_page() {
    let mut state = PagesState { items: vec![page(1, "A"), page(2, "B")], ..PagesState::default() };
    state.remove(1);
    assert_eq!(state.items, vec![page(2, "B")]);
    state.remove(9);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn designer_href_encodes_mode() {
    assert_eq!(designer_href(7, RenderMode::Edit), "/designer?id=7&mode=design");
    assert_eq!(designer_href(7, RenderMode::Preview), "/designer?id=7");
}
