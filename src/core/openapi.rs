use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::category_handler::list_categories,
        categories_handlers::category_handler::get_category,
        categories_handlers::category_handler::list_category_products,
        categories_handlers::category_handler::create_category,
        categories_handlers::category_handler::update_category,
        categories_handlers::category_handler::delete_category,
        // Products
        products_handlers::product_handler::search_products,
        products_handlers::product_handler::get_product,
        products_handlers::product_handler::create_product,
        products_handlers::product_handler::update_product,
        products_handlers::product_handler::delete_product,
    ),
    components(
        schemas(
            ErrorBody,
            // Categories
            categories_dtos::UpsertCategoryDto,
            categories_dtos::CategoryResponseDto,
            // Products
            products_dtos::UpsertProductDto,
            products_dtos::ProductResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Catalog categories"),
        (name = "products", description = "Catalog products and search"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Storefront catalog API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
