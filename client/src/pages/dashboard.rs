//! Authenticated landing screen.

use leptos::prelude::*;

/// Welcome screen with profile and sign-out actions.
#[component]
pub fn DashboardPage(on_view_profile: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    view! {
        <div class="dashboard">
            <h1>"Welcome!"</h1>
            <p>"You are signed in."</p>
            <div class="dashboard-buttons">
                <button class="profile-btn" on:click=move |_| on_view_profile.run(())>
                    "View profile"
                </button>
                <button class="logout-btn" on:click=move |_| on_sign_out.run(())>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
