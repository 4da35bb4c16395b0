use super::*;

#[test]
fn exactly_one_screen_for_every_combination() {
    for authenticated in [false, true] {
        for show_profile in [false, true] {
            for mode in [AuthMode::SignIn, AuthMode::SignUp] {
                let screen = Screen::resolve(authenticated, show_profile, mode);
                let visible = [
                    screen.is_login_form(),
                    screen == Screen::Dashboard,
                    screen == Screen::Profile,
                ];
                assert_eq!(
                    visible.iter().filter(|v| **v).count(),
                    1,
                    "authenticated={authenticated} show_profile={show_profile} mode={mode:?}"
                );
                assert_eq!(screen.is_login_form(), !authenticated);
            }
        }
    }
}

#[test]
fn unauthenticated_screen_follows_mode() {
    assert_eq!(Screen::resolve(false, false, AuthMode::SignIn), Screen::SignIn);
    assert_eq!(Screen::resolve(false, true, AuthMode::SignUp), Screen::SignUp);
}

#[test]
fn authenticated_screen_follows_profile_flag() {
    assert_eq!(Screen::resolve(true, false, AuthMode::SignUp), Screen::Dashboard);
    assert_eq!(Screen::resolve(true, true, AuthMode::SignIn), Screen::Profile);
}

#[test]
fn profile_navigation_toggles_flag() {
    let mut ui = UiState::default();
    assert!(!ui.show_profile);
    ui.open_profile();
    assert!(ui.show_profile);
    ui.close_profile();
    assert!(!ui.show_profile);
}

#[test]
fn auth_change_resets_profile_flag() {
    let mut ui = UiState { show_profile: true };
    ui.on_auth_changed();
    assert_eq!(Screen::resolve(true, ui.show_profile, AuthMode::SignIn), Screen::Dashboard);
}

fn signed_in_snapshot() -> SessionSnapshot {
    let user = crate::net::types::User {
        id: "user_1".to_owned(),
        username: Some("alice".to_owned()),
        email: None,
        created_at: None,
        last_sign_in_at: None,
    };
    SessionSnapshot::signed_in(Some(crate::net::types::SessionId::from("sess_1")), user)
}

#[test]
fn apply_session_on_auth_edge_resets_profile_and_clears_form() {
    let mut auth = AuthState::default();
    let mut ui = UiState::default();
    let mut form = FormState::default();
    assert!(apply_session(&mut auth, &mut ui, &mut form, &signed_in_snapshot()));
    ui.open_profile();

    form.toggle_mode();
    form.set_identifier("alice".to_owned());
    form.set_secret("password123".to_owned());
    form.error = Some("stale".to_owned());
    assert!(apply_session(&mut auth, &mut ui, &mut form, &SessionSnapshot::signed_out()));
    assert!(!ui.show_profile);
    assert_eq!(form, FormState { mode: AuthMode::SignUp, ..FormState::default() });
    assert_eq!(Screen::resolve(auth.is_authenticated(), ui.show_profile, form.mode), Screen::SignUp);

    form.set_identifier("alice".to_owned());
    form.set_secret("password123".to_owned());
    assert!(apply_session(&mut auth, &mut ui, &mut form, &signed_in_snapshot()));
    assert_eq!(Screen::resolve(auth.is_authenticated(), ui.show_profile, form.mode), Screen::Dashboard);
    assert!(form.identifier.is_empty() && form.secret.is_empty());
    assert_eq!(form.mode, AuthMode::SignUp);
}

#[test]
fn apply_session_without_edge_keeps_local_state() {
    let mut auth = AuthState::default();
    let mut ui = UiState::default();
    let mut form = FormState::default();
    apply_session(&mut auth, &mut ui, &mut form, &signed_in_snapshot());
    ui.open_profile();
    form.set_identifier("typed".to_owned());

    assert!(!apply_session(&mut auth, &mut ui, &mut form, &signed_in_snapshot()));
    assert!(ui.show_profile);
    assert_eq!(form.identifier, "typed");
}
