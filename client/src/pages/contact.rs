//! Static contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <p>"Questions about a product? Reach the store team at support@productstore.example."</p>
        </div>
    }
}
