//! Single labelled line on the profile screen.

use leptos::prelude::*;

#[component]
pub fn ProfileRowView(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="profile-item">
            <strong>{label}":"</strong>
            " "
            <span class="profile-value">{value}</span>
        </div>
    }
}
