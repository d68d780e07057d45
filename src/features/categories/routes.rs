use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::categories::handlers::{self, CategoriesState};

/// Read-only category routes (no authentication required)
pub fn routes(state: CategoriesState) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .route(
            "/api/categories/{id}/products",
            get(handlers::list_category_products),
        )
        .with_state(state)
}

/// Mutating category routes; mounted behind the auth middleware
pub fn admin_routes(state: CategoriesState) -> Router {
    Router::new()
        .route("/api/categories", post(handlers::create_category))
        .route(
            "/api/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(state)
}
