use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Read-only product routes (no authentication required)
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::search_products))
        .route("/api/products/{id}", get(handlers::get_product))
        .with_state(service)
}

/// Mutating product routes; mounted behind the auth middleware
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", post(handlers::create_product))
        .route(
            "/api/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .with_state(service)
}
