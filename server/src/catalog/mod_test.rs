use super::*;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// Fake catalog
// =========================================================================

const FAKE_CATALOG_SIZE: u64 = 20;

struct FakeCatalog {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeCatalog {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn fixture(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Fixture {id}"),
        "price": 12.5,
        "description": "fixture product",
        "category": "electronics",
        "image": format!("https://example.test/{id}.jpg"),
        "rating": { "rate": 4.7, "count": 10 }
    })
}

async fn list_handler(State(hits): State<Arc<AtomicUsize>>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    let limit: u64 = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(FAKE_CATALOG_SIZE);
    Json(Value::Array((1..=limit.min(FAKE_CATALOG_SIZE)).map(fixture).collect()))
}

async fn item_handler(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match id.as_str() {
        "500" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "404" => StatusCode::NOT_FOUND.into_response(),
        "garbage" => (StatusCode::OK, "{not json").into_response(),
        _ => match id.parse::<u64>() {
            Ok(n) if (1..=FAKE_CATALOG_SIZE).contains(&n) => Json(fixture(n)).into_response(),
            // The public catalog answers unknown ids with an empty 200.
            _ => (StatusCode::OK, "").into_response(),
        },
    }
}

async fn spawn_fake_catalog() -> FakeCatalog {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/products", get(list_handler))
        .route("/products/{id}", get(item_handler))
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake catalog");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake catalog");
    });
    FakeCatalog { base_url: format!("http://{addr}"), hits }
}

// =========================================================================
// list_products
// =========================================================================

#[tokio::test]
async fn list_products_returns_at_most_limit_with_unique_positive_ids() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, false).unwrap();

    for limit in [1, 5, 7] {
        let products = catalog.list_products(limit).await.unwrap();
        assert!(products.len() <= limit);
        let ids: HashSet<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
        assert!(ids.iter().all(|id| *id > 0));
    }
}

#[tokio::test]
async fn list_products_serves_repeat_requests_from_cache() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    let first = catalog.list_products(5).await.unwrap();
    let second = catalog.list_products(5).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(fake.hits(), 1);

    catalog.list_products(3).await.unwrap();
    assert_eq!(fake.hits(), 2);
}

#[tokio::test]
async fn list_products_without_cache_always_fetches() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, false).unwrap();

    catalog.list_products(5).await.unwrap();
    catalog.list_products(5).await.unwrap();
    assert_eq!(fake.hits(), 2);
}

#[tokio::test]
async fn list_products_non_success_is_fetch_error() {
    let fake = spawn_fake_catalog().await;
    // No route at this prefix: the fake answers 404.
    let catalog = HttpCatalog::new(&format!("{}/missing", fake.base_url), true).unwrap();

    let err = catalog.list_products(5).await.unwrap_err();
    assert_eq!(err, CatalogError::Fetch { status: 404 });
}

#[tokio::test]
async fn list_products_unreachable_catalog_is_transport_error() {
    let catalog = HttpCatalog::new("http://127.0.0.1:1", false).unwrap();
    let err = catalog.list_products(5).await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}

// =========================================================================
// get_product
// =========================================================================

#[tokio::test]
async fn get_product_returns_requested_id() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    for id in ["1", "3", "20"] {
        let product = catalog.get_product(id).await.unwrap();
        assert_eq!(product.id.to_string(), id);
    }
}

#[tokio::test]
async fn get_product_is_never_cached() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    catalog.get_product("2").await.unwrap();
    catalog.get_product("2").await.unwrap();
    assert_eq!(fake.hits(), 2);
}

#[tokio::test]
async fn get_product_unknown_id_is_not_found() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    assert_eq!(catalog.get_product("9999").await.unwrap_err(), CatalogError::NotFound("9999".into()));
    assert_eq!(catalog.get_product("404").await.unwrap_err(), CatalogError::NotFound("404".into()));
}

#[tokio::test]
async fn get_product_non_numeric_segment_passes_through() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    let err = catalog.get_product("abc").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn get_product_server_error_is_fetch_error() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    assert_eq!(catalog.get_product("500").await.unwrap_err(), CatalogError::Fetch { status: 500 });
}

#[tokio::test]
async fn get_product_malformed_body_is_parse_error() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    assert!(matches!(catalog.get_product("garbage").await, Err(CatalogError::Parse(_))));
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let catalog = HttpCatalog::new("http://catalog.test/", true).unwrap();
    assert_eq!(catalog.base_url(), "http://catalog.test");
}

#[test]
fn from_config_uses_configured_base_url() {
    let config = ServerConfig { catalog_base_url: "http://catalog.test".into(), ..ServerConfig::default() };
    let catalog = HttpCatalog::from_config(&config).unwrap();
    assert_eq!(catalog.base_url(), "http://catalog.test");
}

#[tokio::test]
async fn list_products_cache_stays_bounded_across_many_limits() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    for limit in 100..400 {
        catalog.list_products(limit).await.unwrap();
    }
    let cache = catalog.listings.as_ref().expect("cache enabled");
    assert_eq!(cache.entry_count().await, cache::MAX_CACHED_LISTINGS);

    // Limits past capacity keep working; they just go to the catalog each time.
    let before = fake.hits();
    catalog.list_products(399).await.unwrap();
    assert_eq!(fake.hits(), before + 1);
}

#[tokio::test]
async fn get_product_keeps_segment_inside_one_path_segment() {
    let fake = spawn_fake_catalog().await;
    let catalog = HttpCatalog::new(&fake.base_url, true).unwrap();

    // Without encoding this would reach `/products/1` with a `limit` query.
    let err = catalog.get_product("1?limit=3").await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound("1?limit=3".into()));
}
