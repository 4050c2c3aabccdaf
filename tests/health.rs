use axum::extract::State;
use aura_storefront::{
    catalog::CatalogStore, routes::health::health_check, state::AppState, storage::MemorySlot,
};

#[tokio::test]
async fn health_check_returns_ok() {
    let state = AppState::new(CatalogStore::open(MemorySlot::new()), "secret");
    let response = health_check(State(state)).await.expect("health");
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.products, 5);
}
