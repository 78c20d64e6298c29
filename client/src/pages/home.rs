//! Home page listing featured products.

use leptos::prelude::*;
use products::{LISTING_LIMIT, Product};

use crate::components::product_card::ProductCard;
use crate::net::api;

/// Home page: a fixed-size page of products from the catalog.
///
/// The listing resolves during SSR and is serialized into the page, so the
/// hydrated client does not fetch again. A failed fetch is thrown to the
/// error boundary and replaces the whole grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let products = Resource::new(|| LISTING_LIMIT, api::list_products);

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Featured Products"</h1>
            <Suspense fallback=move || view! { <p class="home-page__loading">"Loading products..."</p> }>
                <ErrorBoundary fallback=|errors| view! { <ListingError errors/> }>
                    {move || {
                        products
                            .get()
                            .map(|result| result.map(|list| view! { <ProductGrid products=list/> }))
                    }}
                </ErrorBoundary>
            </Suspense>
        </div>
    }
}

#[component]
fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="home-page__empty">"No products available right now."</p> }.into_any();
    }

    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product/> })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

#[component]
fn ListingError(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="listing-error" role="alert">
            <h2>"Failed to fetch products"</h2>
            <ul>
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
