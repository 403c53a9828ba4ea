use super::*;

#[test]
fn push_replaces_current_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "Created!");
    let second = state.push(ToastKind::Error, "Server error");
    assert_ne!(first, second);
    let current = state.current.as_ref().expect("toast visible");
    assert_eq!(current.message, "Server error");
    assert_eq!(current.kind, ToastKind::Error);
}

#[test]
fn stale_dismissal_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    let second = state.push(ToastKind::Success, "two");
    state.dismiss(first);
    assert!(state.current.is_some());
    state.dismiss(second);
    assert!(state.current.is_none());
}

#[test]
fn kind_maps_to_modifier_class() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
