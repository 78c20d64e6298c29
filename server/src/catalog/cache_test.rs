use super::*;

fn sample(id: u64) -> Product {
    let body = serde_json::json!({
        "id": id,
        "title": "Backpack",
        "price": 10.0,
        "description": "",
        "category": "bags",
        "image": "https://example.test/a.jpg",
        "rating": { "rate": 4.0, "count": 3 }
    })
    .to_string();
    products::decode_product(&body, &id.to_string()).expect("fixture")
}

#[tokio::test]
async fn empty_cache_misses() {
    let cache = ListingCache::default();
    assert!(cache.get(5).await.is_none());
    assert_eq!(cache.entry_count().await, 0);
}

#[tokio::test]
async fn insert_then_get_returns_same_products() {
    let cache = ListingCache::default();
    cache.insert(2, vec![sample(1), sample(2)]).await;
    let hit = cache.get(2).await.expect("cached");
    assert_eq!(hit.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn entries_are_keyed_by_limit() {
    let cache = ListingCache::default();
    cache.insert(1, vec![sample(1)]).await;
    assert!(cache.get(5).await.is_none());
    cache.insert(5, vec![sample(1), sample(2)]).await;
    assert_eq!(cache.entry_count().await, 2);
}

#[tokio::test]
async fn distinct_limits_stop_at_capacity() {
    let cache = ListingCache::default();
    for limit in 100..400 {
        cache.insert(limit, vec![sample(1)]).await;
    }
    assert_eq!(cache.entry_count().await, MAX_CACHED_LISTINGS);
    assert!(cache.get(100).await.is_some());
    assert!(cache.get(399).await.is_none());
}

#[tokio::test]
async fn full_cache_still_refreshes_existing_limit() {
    let cache = ListingCache::default();
    for limit in 0..MAX_CACHED_LISTINGS {
        assert!(cache.insert(limit, vec![sample(1)]).await);
    }
    assert!(!cache.insert(MAX_CACHED_LISTINGS, vec![sample(1)]).await);
    assert!(cache.insert(0, vec![sample(1), sample(2)]).await);
    assert_eq!(cache.get(0).await.map(|p| p.len()), Some(2));
}
