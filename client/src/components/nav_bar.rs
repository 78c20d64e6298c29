//! Top navigation bar.

use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    "ProductStore"
                </a>
                <div class="nav-bar__links">
                    <a href="/" class="nav-bar__link">
                        "Home"
                    </a>
                    <a href="/contact" class="nav-bar__link">
                        "Contact"
                    </a>
                </div>
            </div>
        </nav>
    }
}
