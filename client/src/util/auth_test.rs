use super::*;
use crate::net::types::SessionUser;

fn admin() -> SessionUser {
    SessionUser { id: "admin@school.test".to_owned() }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
    assert!(!should_redirect_authed(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&AuthState::signed_in(admin())));
}

#[test]
fn login_page_skips_ahead_for_existing_session() {
    assert!(should_redirect_authed(&AuthState::signed_in(admin())));
    assert!(!should_redirect_authed(&AuthState::signed_out()));
}

#[test]
fn routes_are_absolute() {
    assert_eq!(LOGIN_ROUTE, "/login");
    assert_eq!(HOME_ROUTE, "/dashboard");
}
