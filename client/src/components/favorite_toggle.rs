//! Heart button reflecting favorite membership.

use leptos::prelude::*;

const HEART_PATH: &str = "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z";

/// Toggle button; disabled until `ready` (favorites read and product loaded).
#[component]
pub fn FavoriteToggle(active: Signal<bool>, ready: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="favorite-toggle"
            class:favorite-toggle--active=move || active.get()
            disabled=move || !ready.get()
            aria-pressed=move || if active.get() { "true" } else { "false" }
            title=move || if active.get() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |_| on_toggle.run(())
        >
            <svg
                class="favorite-toggle__icon"
                viewBox="0 0 24 24"
                fill=move || if active.get() { "currentColor" } else { "none" }
                stroke="currentColor"
                aria-hidden="true"
            >
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=HEART_PATH></path>
            </svg>
        </button>
    }
}
