use super::*;

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_state_carries_user() {
    let state = AuthState::signed_in(SessionUser { id: "admin@school.test".to_owned() });
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.map(|u| u.id).as_deref(), Some("admin@school.test"));
}

#[test]
fn signed_out_state_is_settled() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
