use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::guards::RequireAdmin;
use crate::features::products::dtos::{
    ProductResponseDto, SearchProductsQuery, UpsertProductDto,
};
use crate::features::products::services::ProductService;

/// Search products with optional filters
#[utoipa::path(
    get,
    path = "/api/products",
    params(SearchProductsQuery),
    responses(
        (status = 200, description = "Matching products, ordered by id", body = Vec<ProductResponseDto>),
        (status = 500, description = "Storage failure")
    ),
    tag = "products"
)]
pub async fn search_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<SearchProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.search(&query.into()).await?;
    let response: Vec<ProductResponseDto> = products.into_iter().map(|p| p.into()).collect();

    Ok(Json(response))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponseDto>> {
    let product = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product not found with ID: {}", id)))?;

    Ok(Json(product.into()))
}

/// Create a product (admin only)
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = UpsertProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 500, description = "Storage failure")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Json(dto): Json<UpsertProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let product = service.create(&dto).await?;

    tracing::info!(
        "Product '{}' created with id {} by {}",
        product.name,
        product.product_id,
        user.sub
    );

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Replace a product (admin only).
///
/// All eight mutable fields are overwritten; the path identifier is
/// authoritative.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    request_body = UpsertProductDto,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
    Json(dto): Json<UpsertProductDto>,
) -> Result<StatusCode> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    if service.get(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product not found with ID: {}",
            id
        )));
    }

    service.update(id, &dto).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product and its cart entries (admin only)
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if service.get(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product not found with ID: {}",
            id
        )));
    }

    service.delete(id).await?;

    tracing::info!("Product {} deleted by {}", id, user.sub);

    Ok(StatusCode::NO_CONTENT)
}
