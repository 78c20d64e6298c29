//! Root application component, HTML shell, and route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::nav_bar::NavBar;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::product::ProductPage;
use crate::util::favorite_store::{LocalStorageFavorites, SharedFavoriteStore};

/// Full HTML document rendered by the server for every page request.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Application root: layout chrome plus the page routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let favorites: SharedFavoriteStore = Arc::new(LocalStorageFavorites);
    provide_context(favorites);

    view! {
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>
        <Title text="Product Showcase"/>
        <Meta name="description" content="Browse featured products and keep a list of favorites."/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
