//! Listing card for one product.

use leptos::prelude::*;
use products::Product;

/// Image, clamped title, price, and a link to the detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.detail_path();
    let price = product.price_label();
    let Product { title, image, .. } = product;
    let alt = title.clone();

    view! {
        <div class="product-card">
            <div class="product-card__media">
                <img class="product-card__image" src=image alt=alt loading="lazy"/>
            </div>
            <div class="product-card__body">
                <h2 class="product-card__title">{title}</h2>
                <p class="product-card__price">{price}</p>
                <a class="btn btn--block" href=href>
                    "View Details"
                </a>
            </div>
        </div>
    }
}
