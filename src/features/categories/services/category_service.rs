use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::UpsertCategoryDto;
use crate::features::categories::models::Category;

/// Data access for categories
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in storage order
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description FROM categories",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::storage("Error retrieving all categories", e))?;

        Ok(categories)
    }

    /// Get a category by id; absence is not an error
    pub async fn get(&self, category_id: i32) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name, description FROM categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::storage(format!("Error retrieving category {}", category_id), e)
        })?;

        Ok(category)
    }

    /// Insert a category and re-fetch it by the generated identifier, so the
    /// caller sees the real id
    pub async fn create(&self, data: &UpsertCategoryDto) -> Result<Category> {
        let (new_id,): (i32,) = sqlx::query_as(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING category_id",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Error creating category '{}'", data.name), e))?;

        self.get(new_id).await?.ok_or_else(|| {
            AppError::Internal(format!("Created category {} could not be re-fetched", new_id))
        })
    }

    /// Overwrite name and description for the matching row. A missing row is
    /// a silent no-op; handlers pre-check existence.
    pub async fn update(&self, category_id: i32, data: &UpsertCategoryDto) -> Result<()> {
        sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE category_id = $3")
            .bind(&data.name)
            .bind(&data.description)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::storage(format!("Error updating category with ID: {}", category_id), e)
            })?;

        Ok(())
    }

    /// Cascading delete: shopping-cart rows for the category's products, the
    /// products themselves, then the category row. Runs inside a single
    /// transaction so a mid-sequence failure rolls back every step.
    pub async fn delete(&self, category_id: i32) -> Result<()> {
        let context = || {
            format!(
                "Error deleting category with ID: {} and its associated data",
                category_id
            )
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        sqlx::query(
            "DELETE FROM shopping_cart WHERE product_id IN \
             (SELECT product_id FROM products WHERE category_id = $1)",
        )
        .bind(category_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::storage(context(), e))?;

        sqlx::query("DELETE FROM products WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        Ok(())
    }
}
