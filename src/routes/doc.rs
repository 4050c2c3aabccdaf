use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{AdminLoginRequest, AdminLoginResponse},
        products::{ProductFormData, ProductList, ProductView},
    },
    middleware::auth::ADMIN_PASSWORD_HEADER,
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::{admin, health, params, products},
    services::admin_service::StorageStatus,
};

struct AdminPasswordAddon;

impl Modify for AdminPasswordAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_password",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_PASSWORD_HEADER))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::featured_products,
        products::get_product,
        admin::login,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::storage_status,
        admin::clear_storage_error
    ),
    components(
        schemas(
            Category,
            Product,
            ProductFormData,
            ProductView,
            ProductList,
            AdminLoginRequest,
            AdminLoginResponse,
            StorageStatus,
            health::HealthData,
            params::ProductQuery,
            Meta,
            ApiResponse<ProductView>,
            ApiResponse<ProductList>,
            ApiResponse<StorageStatus>
        )
    ),
    modifiers(&AdminPasswordAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Public catalog endpoints"),
        (name = "Admin", description = "Catalog management endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
