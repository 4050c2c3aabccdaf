use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use aura_storefront::{
    catalog::{CatalogStore, STORAGE_FULL_MESSAGE},
    dto::{auth::AdminLoginRequest, products::ProductFormData},
    error::AppError,
    middleware::auth::{ADMIN_PASSWORD_HEADER, AdminSession, ensure_admin},
    models::Category,
    routes::{admin, params::ProductQuery, products},
    state::AppState,
    storage::MemorySlot,
};

const PASSWORD: &str = "aura-test";

fn state_with(slot: MemorySlot) -> AppState {
    AppState::new(CatalogStore::open(slot), PASSWORD)
}

fn seeded_state() -> AppState {
    state_with(MemorySlot::new())
}

fn joggers() -> ProductFormData {
    ProductFormData {
        name: "Milton Joggers".into(),
        price: 85.0,
        description: "Tapered joggers".into(),
        short_description: "Joggers".into(),
        category: Category::Pants,
        sizes: vec!["S".into(), "M".into()],
        images: vec!["https://cdn.example.com/joggers.jpg".into()],
        featured: true,
        has_discount: Some(true),
        discount_percentage: Some(20.0),
    }
}

#[tokio::test]
async fn listing_filters_by_category_and_featured() {
    let state = seeded_state();

    let Json(hoodies) = products::list_products(
        State(state.clone()),
        Query(ProductQuery {
            category: Some(Category::Hoodie),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    let items = hoodies.data.unwrap().items;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|v| v.product.category == Category::Hoodie));
    assert_eq!(hoodies.meta.unwrap().total, Some(3));

    let Json(featured_pants) = products::list_products(
        State(state.clone()),
        Query(ProductQuery {
            category: Some(Category::Pants),
            featured: Some(true),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    let ids: Vec<_> = featured_pants
        .data
        .unwrap()
        .items
        .into_iter()
        .map(|v| v.product.id)
        .collect();
    assert_eq!(ids, vec!["4"]);
}

#[tokio::test]
async fn listing_pages_keep_catalog_order() {
    let state = seeded_state();

    let Json(page) = products::list_products(
        State(state),
        Query(ProductQuery {
            page: Some(2),
            per_page: Some(2),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    let ids: Vec<_> = page
        .data
        .unwrap()
        .items
        .into_iter()
        .map(|v| v.product.id)
        .collect();
    assert_eq!(ids, vec!["3", "4"]);
    let meta = page.meta.unwrap();
    assert_eq!((meta.page, meta.per_page, meta.total), (Some(2), Some(2), Some(5)));
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let query = ProductQuery {
        page: Some(i64::MAX),
        per_page: Some(20),
        ..Default::default()
    };
    let (page, per_page, offset) = query.page_window().unwrap();
    assert_eq!((page, per_page), (i64::MAX, 20));
    assert_eq!(offset, i64::MAX);

    let Json(resp) = products::list_products(State(seeded_state()), Query(query))
        .await
        .unwrap();
    assert!(resp.data.unwrap().items.is_empty());
    assert_eq!(resp.meta.unwrap().total, Some(5));
}

#[tokio::test]
async fn featured_endpoint_matches_store() {
    let state = seeded_state();
    let Json(resp) = products::featured_products(State(state)).await.unwrap();
    let items = resp.data.unwrap().items;
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|v| v.product.featured));
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let state = seeded_state();
    let result = products::get_product(State(state), Path("missing".to_string())).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn created_product_is_listed_with_display_price() {
    let state = seeded_state();

    let (status, Json(created)) =
        admin::create_product(State(state.clone()), AdminSession, Json(joggers()))
            .await
            .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let created = created.data.unwrap();
    assert_eq!(created.display_price, 68.0);

    let Json(detail) = products::get_product(State(state.clone()), Path(created.product.id.clone()))
        .await
        .unwrap();
    assert_eq!(detail.data.unwrap().product, created.product);

    let Json(all) = products::list_products(State(state), Query(ProductQuery::default()))
        .await
        .unwrap();
    assert_eq!(
        all.data.unwrap().items.last().map(|v| v.product.id.clone()),
        Some(created.product.id)
    );
}

#[tokio::test]
async fn invalid_form_data_is_rejected_before_the_store() {
    let state = seeded_state();

    let mut nameless = joggers();
    nameless.name = "   ".into();
    let result = admin::create_product(State(state.clone()), AdminSession, Json(nameless)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut free = joggers();
    free.price = 0.0;
    let result = admin::create_product(State(state.clone()), AdminSession, Json(free)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut bad_discount = joggers();
    bad_discount.discount_percentage = Some(0.0);
    let result = admin::update_product(
        State(state.clone()),
        AdminSession,
        Path("1".to_string()),
        Json(bad_discount),
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert_eq!(state.catalog().unwrap().list_all().len(), 5);
    assert_eq!(state.catalog().unwrap().get("1").unwrap().name, "AURA Essential Hoodie");
}

#[tokio::test]
async fn update_keeps_identity_and_unknown_ids_are_not_found() {
    let state = seeded_state();
    let original = state.catalog().unwrap().get("2").cloned().unwrap();

    let Json(updated) = admin::update_product(
        State(state.clone()),
        AdminSession,
        Path("2".to_string()),
        Json(joggers()),
    )
    .await
    .unwrap();
    let updated = updated.data.unwrap().product;
    assert_eq!(updated.id, "2");
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.name, "Milton Joggers");
    assert_eq!(updated.category, Category::Pants);

    let result = admin::update_product(
        State(state.clone()),
        AdminSession,
        Path("nope".to_string()),
        Json(joggers()),
    )
    .await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let result = admin::delete_product(State(state), AdminSession, Path("nope".to_string())).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_removes_product() {
    let state = seeded_state();
    admin::delete_product(State(state.clone()), AdminSession, Path("5".to_string()))
        .await
        .unwrap();

    let result = products::get_product(State(state), Path("5".to_string())).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn storage_full_stays_visible_until_dismissed() {
    let state = state_with(MemorySlot::with_quota(0));

    let result = admin::create_product(State(state.clone()), AdminSession, Json(joggers())).await;
    match result {
        Err(AppError::StorageFull(message)) => assert_eq!(message, STORAGE_FULL_MESSAGE),
        other => panic!("expected storage full, got {:?}", other.map(|_| ())),
    }

    assert!(state.catalog().unwrap().list_all().is_empty());

    let Json(status) = admin::storage_status(State(state.clone()), AdminSession)
        .await
        .unwrap();
    assert_eq!(status.data.unwrap().error.as_deref(), Some(STORAGE_FULL_MESSAGE));

    admin::clear_storage_error(State(state.clone()), AdminSession)
        .await
        .unwrap();
    let Json(status) = admin::storage_status(State(state), AdminSession).await.unwrap();
    assert_eq!(status.data.unwrap().error, None);
}

#[tokio::test]
async fn storage_warning_can_be_dismissed() {
    let state = state_with(MemorySlot::with_quota(0));
    state.catalog().unwrap().delete("1");

    let Json(status) = admin::storage_status(State(state.clone()), AdminSession)
        .await
        .unwrap();
    assert_eq!(status.data.unwrap().error.as_deref(), Some(STORAGE_FULL_MESSAGE));

    admin::clear_storage_error(State(state.clone()), AdminSession)
        .await
        .unwrap();
    assert!(state.catalog().unwrap().storage_error().is_none());
}

#[tokio::test]
async fn admin_login_checks_password() {
    let state = seeded_state();

    let Json(ok) = admin::login(
        State(state.clone()),
        Json(AdminLoginRequest {
            password: PASSWORD.into(),
        }),
    )
    .await
    .unwrap();
    assert!(ok.data.unwrap().authenticated);

    let result = admin::login(
        State(state),
        Json(AdminLoginRequest {
            password: "guess".into(),
        }),
    )
    .await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[test]
fn admin_header_must_match_password() {
    let mut headers = HeaderMap::new();
    assert!(matches!(
        ensure_admin(&headers, PASSWORD),
        Err(AppError::Unauthorized(_))
    ));

    headers.insert(ADMIN_PASSWORD_HEADER, HeaderValue::from_static("wrong"));
    assert!(matches!(
        ensure_admin(&headers, PASSWORD),
        Err(AppError::Unauthorized(_))
    ));

    headers.insert(ADMIN_PASSWORD_HEADER, HeaderValue::from_static(PASSWORD));
    assert!(ensure_admin(&headers, PASSWORD).is_ok());
}
