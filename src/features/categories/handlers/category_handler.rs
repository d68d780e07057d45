use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{CategoryResponseDto, UpsertCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::services::ProductService;

/// Shared state for category routes.
///
/// Category endpoints also serve the products-of-a-category listing, so both
/// services are injected, mirroring the two data-access dependencies of this
/// resource.
#[derive(Clone)]
pub struct CategoriesState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<CategoriesState>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = state.categories.list().await?;
    let response: Vec<CategoryResponseDto> = categories.into_iter().map(|c| c.into()).collect();

    Ok(Json(response))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<CategoriesState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponseDto>> {
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category not found with ID: {}", id)))?;

    Ok(Json(category.into()))
}

/// List the products of a category.
///
/// An unknown category id yields an empty list, not a 404.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/products",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<ProductResponseDto>),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories"
)]
pub async fn list_category_products(
    State(state): State<CategoriesState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = state.products.list_by_category(id).await?;
    let response: Vec<ProductResponseDto> = products.into_iter().map(|p| p.into()).collect();

    Ok(Json(response))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = UpsertCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    RequireAdmin(user): RequireAdmin,
    State(state): State<CategoriesState>,
    Json(dto): Json<UpsertCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let category = state.categories.create(&dto).await?;

    tracing::info!(
        "Category '{}' created with id {} by {}",
        category.name,
        category.category_id,
        user.sub
    );

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Replace a category (admin only).
///
/// The path identifier is authoritative; any id in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    request_body = UpsertCategoryDto,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<CategoriesState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpsertCategoryDto>,
) -> Result<StatusCode> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    if state.categories.get(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Category not found with ID: {}",
            id
        )));
    }

    state.categories.update(id, &dto).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category and its dependent rows (admin only)
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Storage failure")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    RequireAdmin(user): RequireAdmin,
    State(state): State<CategoriesState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if state.categories.get(id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Category not found with ID: {}",
            id
        )));
    }

    state.categories.delete(id).await?;

    tracing::info!("Category {} deleted by {}", id, user.sub);

    Ok(StatusCode::NO_CONTENT)
}
