use super::*;

#[test]
fn default_is_loading_and_does_not_redirect() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_logged_in());
    assert!(!state.needs_login());
}

#[test]
fn resolved_without_token_needs_login() {
    let state = AuthState::resolved(None);
    assert!(state.needs_login());
}

#[test]
fn sign_in_then_out() {
    let mut state = AuthState::default();
    state.sign_in("jwt-1".to_owned());
    assert!(state.is_logged_in());
    assert!(!state.needs_login());
    state.sign_out();
    assert!(!state.is_logged_in());
    assert!(state.needs_login());
}
