//! Route-level panel switching between login, dashboard, and profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Subscribes to the identity service's session feed, mirrors snapshots into
//! `AuthState`, and derives the visible [`Screen`]. A change in the
//! authenticated flag resets `show_profile` and clears the form so every
//! fresh sign-in lands on the dashboard.

use leptos::prelude::*;

use crate::net::identity::IdentityHandle;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::session::SessionSnapshot;
use crate::state::ui::{Screen, UiState, apply_session};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let form = RwSignal::new(FormState::default());

    let subscription = identity.with_value(|service| {
        service.sessions().subscribe(move |snapshot: &SessionSnapshot| {
            // No-op once the panel has been disposed.
            auth.try_update(|a| ui.try_update(|u| form.try_update(|f| apply_session(a, u, f, snapshot))));
        })
    });
    // Dropped (and unsubscribed) when the panel's owner is cleaned up.
    let _subscription = StoredValue::new_local(subscription);

    #[cfg(feature = "hydrate")]
    {
        let service = identity.get_value();
        leptos::task::spawn_local(async move {
            if let Err(err) = service.refresh().await {
                log::warn!("session refresh failed: {err}");
            }
            auth.try_update(AuthState::finish_loading);
        });
    }

    let screen = Memo::new(move |_| {
        Screen::resolve(auth.with(AuthState::is_authenticated), ui.with(|u| u.show_profile), form.with(|f| f.mode))
    });
    let loading = Signal::derive(move || auth.with(|a| a.loading));
    let user = Signal::derive(move || auth.with(|a| a.user.clone()));

    let on_view_profile = Callback::new(move |()| ui.update(UiState::open_profile));
    let on_back = Callback::new(move |()| ui.update(UiState::close_profile));
    let on_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let service = identity.get_value();
            leptos::task::spawn_local(async move {
                crate::util::auth::sign_out(service.as_ref()).await;
            });
        }
    });

    view! {
        <main class="app">
            {move || match screen.get() {
                Screen::SignIn | Screen::SignUp => view! { <LoginPage form=form loading=loading/> }.into_any(),
                Screen::Dashboard => {
                    view! { <DashboardPage on_view_profile=on_view_profile on_sign_out=on_sign_out/> }.into_any()
                }
                Screen::Profile => {
                    view! { <ProfilePage user=user on_back=on_back on_sign_out=on_sign_out/> }.into_any()
                }
            }}
        </main>
    }
}
