//! Product detail page with the favorite toggle.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use products::Product;

use crate::components::favorite_toggle::FavoriteToggle;
use crate::components::missing_product::MissingProduct;
use crate::components::star_rating::StarRating;
use crate::net::api;
use crate::state::detail::{DetailPhase, DetailState, ToggleOutcome};
use crate::state::favorites::FavoriteSet;
use crate::util::favorite_store::{LocalStorageFavorites, SharedFavoriteStore};

/// Route component for `/products/:id`.
///
/// Each identifier mounts a fresh [`ProductDetail`] with its own fetch and its
/// own copy of the favorite set.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let segment = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    move || view! { <ProductDetail segment=segment.get()/> }
}

/// Detail view for one identifier segment.
///
/// Two mount-time completions feed one [`DetailState`]: the favorites read
/// (browser only, synchronous) and the product fetch. A completion that lands
/// after the view is disposed is dropped by `try_update`.
#[component]
fn ProductDetail(segment: String) -> impl IntoView {
    let store = use_context::<SharedFavoriteStore>().unwrap_or_else(|| Arc::new(LocalStorageFavorites));
    let detail = RwSignal::new(DetailState::default());

    Effect::new({
        let store = store.clone();
        move || {
            let favorites = FavoriteSet::from_ids(store.read());
            detail.try_update(|d| d.record_favorites(favorites));
        }
    });

    let product = LocalResource::new(move || api::get_product(segment.clone()));
    Effect::new(move || {
        let Some(result) = product.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = &result {
                log::error!("error fetching product: {e}");
            }
        }
        detail.try_update(|d| d.record_product(result));
    });

    let phase = Memo::new(move |_| detail.with(DetailState::phase));

    view! {
        <div class="product-page">
            {move || match phase.get() {
                DetailPhase::Loading => {
                    view! { <div class="spinner" role="status" aria-label="Loading product"></div> }.into_any()
                }
                DetailPhase::NotFound => {
                    view! {
                        <MissingProduct
                            heading="Product not found"
                            message="The catalog has no product with this identifier."
                        />
                    }
                        .into_any()
                }
                DetailPhase::Unavailable => {
                    view! {
                        <MissingProduct
                            heading="Product unavailable"
                            message="The catalog could not be reached. Try again later."
                        />
                    }
                        .into_any()
                }
                DetailPhase::Loaded => {
                    let loaded = detail.with_untracked(|d| d.product().cloned());
                    let store = store.clone();
                    loaded
                        .map(|product| view! { <ProductDetails product detail store/> })
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProductDetails(product: Product, detail: RwSignal<DetailState>, store: SharedFavoriteStore) -> impl IntoView {
    let price = product.price_label();
    let Product { title, description, category, image, rating, .. } = product;
    let alt = title.clone();

    let active = Signal::derive(move || detail.with(DetailState::is_favorite));
    let ready = Signal::derive(move || detail.with(DetailState::is_interactive));
    let on_toggle = Callback::new(move |()| {
        let outcome = detail.try_update(|d| d.toggle_favorite(store.as_ref())).flatten();
        if let Some(ToggleOutcome { persisted: Err(_e), .. }) = outcome {
            #[cfg(feature = "hydrate")]
            log::warn!("favorites not persisted: {_e}");
        }
    });

    view! {
        <a href="/" class="back-link">
            "← Back to Products"
        </a>
        <div class="product-detail">
            <div class="product-detail__media">
                <img class="product-detail__image" src=image alt=alt/>
            </div>
            <div class="product-detail__body">
                <div class="product-detail__header">
                    <h1 class="product-detail__title">{title}</h1>
                    <FavoriteToggle active ready on_toggle/>
                </div>
                <span class="product-detail__category">{category}</span>
                <p class="product-detail__price">{price}</p>
                <div class="product-detail__description">
                    <h3>"Description"</h3>
                    <p>{description}</p>
                </div>
                <StarRating rating/>
                <button type="button" class="btn btn--block btn--large">
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
