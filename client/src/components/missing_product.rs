//! Terminal view for a detail page with nothing to show.

use leptos::prelude::*;

#[component]
pub fn MissingProduct(heading: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="missing-product">
            <h1 class="missing-product__heading">{heading}</h1>
            <p class="missing-product__message">{message}</p>
            <a href="/" class="back-link">
                "← Back to Home"
            </a>
        </div>
    }
}
