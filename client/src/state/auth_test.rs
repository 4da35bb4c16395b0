use super::*;

fn make_user() -> User {
    User {
        id: "user_1".to_owned(),
        username: Some("alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
        created_at: Some(1_700_000_000_000),
        last_sign_in_at: None,
    }
}

#[test]
fn default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn apply_snapshot_reports_sign_in_edge() {
    let mut state = AuthState::default();
    let snapshot = SessionSnapshot::signed_in(Some(SessionId::from("sess_1")), make_user());
    assert!(state.apply_snapshot(&snapshot));
    assert!(state.is_authenticated());
    assert_eq!(state.session_id, Some(SessionId::from("sess_1")));
}

#[test]
fn apply_snapshot_same_auth_flag_is_not_an_edge() {
    let mut state = AuthState::default();
    assert!(!state.apply_snapshot(&SessionSnapshot::signed_out()));

    state.apply_snapshot(&SessionSnapshot::signed_in(None, make_user()));
    let mut renamed = make_user();
    renamed.username = Some("alice2".to_owned());
    assert!(!state.apply_snapshot(&SessionSnapshot::signed_in(None, renamed)));
    assert_eq!(state.user.as_ref().and_then(|u| u.username.as_deref()), Some("alice2"));
}

#[test]
fn apply_snapshot_reports_sign_out_edge() {
    let mut state = AuthState::default();
    state.apply_snapshot(&SessionSnapshot::signed_in(None, make_user()));
    assert!(state.apply_snapshot(&SessionSnapshot::signed_out()));
    assert_eq!(state.user, None);
}

#[test]
fn finish_loading_clears_flag() {
    let mut state = AuthState::default();
    state.finish_loading();
    assert!(!state.loading);
}
