use super::*;

#[test]
fn products_endpoint_targets_proxy() {
    assert_eq!(products_endpoint(5), "/api/products?limit=5");
}

#[test]
fn product_endpoint_passes_segment_through() {
    assert_eq!(product_endpoint("9999"), "/api/products/9999");
    assert_eq!(product_endpoint("abc"), "/api/products/abc");
}

#[test]
fn no_catalog_is_unavailable() {
    let err = no_catalog();
    assert_eq!(err.error_code(), "E_UNAVAILABLE");
    assert!(!err.is_not_found());
}
