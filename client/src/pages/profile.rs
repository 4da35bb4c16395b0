//! Profile screen listing the signed-in user's provider record.

use leptos::prelude::*;

use crate::components::profile_row::ProfileRowView;
use crate::net::types::User;
use crate::util::profile::profile_rows;

#[component]
pub fn ProfilePage(user: Signal<Option<User>>, on_back: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    let rows = move || user.with(|u| u.as_ref().map(profile_rows).unwrap_or_default());

    view! {
        <div class="dashboard">
            <h1>"Profile"</h1>
            <div class="profile-info">
                <For each=rows key=|row| (row.label, row.value.clone()) let:row>
                    <ProfileRowView label=row.label value=row.value/>
                </For>
            </div>
            <div class="dashboard-buttons">
                <button class="back-btn" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button class="logout-btn" on:click=move |_| on_sign_out.run(())>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
