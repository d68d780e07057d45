use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::UpsertProductDto;
use crate::features::products::models::{Product, ProductFilter};

const PRODUCT_COLUMNS: &str =
    "product_id, name, price, category_id, description, color, stock, featured, image_url";

/// Data access for products
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search products with an optional set of predicates, ordered by
    /// ascending identifier
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM products WHERE 1=1",
            PRODUCT_COLUMNS
        ));
        filter.apply(&mut builder);
        builder.push(" ORDER BY product_id ASC");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage("Error during product search", e))?;

        Ok(products)
    }

    /// List the products of one category, storage order
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE category_id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::storage(
                format!("Error retrieving products for category ID: {}", category_id),
                e,
            )
        })?;

        Ok(products)
    }

    /// Get a product by id; absence is not an error
    pub async fn get(&self, product_id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE product_id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Error retrieving product {}", product_id), e))?;

        Ok(product)
    }

    /// Insert a product and re-fetch it by the generated identifier
    pub async fn create(&self, data: &UpsertProductDto) -> Result<Product> {
        let (new_id,): (i32,) = sqlx::query_as(
            "INSERT INTO products \
             (name, price, category_id, description, color, stock, featured, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING product_id",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.category_id)
        .bind(&data.description)
        .bind(&data.color)
        .bind(data.stock)
        .bind(data.featured)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Error creating product: {}", data.name), e))?;

        self.get(new_id).await?.ok_or_else(|| {
            AppError::Internal(format!("Created product {} could not be re-fetched", new_id))
        })
    }

    /// Full-row overwrite of all eight mutable fields. A missing row is a
    /// silent no-op; handlers pre-check existence.
    pub async fn update(&self, product_id: i32, data: &UpsertProductDto) -> Result<()> {
        sqlx::query(
            "UPDATE products SET name = $1, price = $2, category_id = $3, description = $4, \
             color = $5, stock = $6, featured = $7, image_url = $8 WHERE product_id = $9",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.category_id)
        .bind(&data.description)
        .bind(&data.color)
        .bind(data.stock)
        .bind(data.featured)
        .bind(&data.image_url)
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::storage(format!("Error updating product with ID: {}", product_id), e)
        })?;

        Ok(())
    }

    /// Delete a product after purging its shopping-cart rows, inside a single
    /// transaction so a partial cleanup never persists
    pub async fn delete(&self, product_id: i32) -> Result<()> {
        let context = || format!("Error deleting product with ID: {}", product_id);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        sqlx::query("DELETE FROM shopping_cart WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::storage(context(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::dtos::UpsertCategoryDto;
    use crate::features::categories::services::CategoryService;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    async fn seed_category(pool: &PgPool, name: &str) -> i32 {
        CategoryService::new(pool.clone())
            .create(&UpsertCategoryDto {
                name: name.to_string(),
                description: String::new(),
            })
            .await
            .unwrap()
            .category_id
    }

    fn product(name: &str, price: &str, category_id: i32, color: &str) -> UpsertProductDto {
        UpsertProductDto {
            name: name.to_string(),
            price: dec(price),
            category_id,
            description: format!("{} description", name),
            color: color.to_string(),
            stock: 10,
            featured: false,
            image_url: format!("{}.jpg", name.to_lowercase()),
        }
    }

    #[sqlx::test]
    async fn test_create_assigns_id_and_round_trips_all_fields(pool: PgPool) {
        let category_id = seed_category(&pool, "Lighting").await;
        let service = ProductService::new(pool);

        let created = service
            .create(&product("Desk Lamp", "29.99", category_id, "Bright red"))
            .await
            .unwrap();

        let fetched = service.get(created.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.product_id, created.product_id);
        assert_eq!(fetched.name, "Desk Lamp");
        assert_eq!(fetched.price, dec("29.99"));
        assert_eq!(fetched.category_id, category_id);
        assert_eq!(fetched.description, "Desk Lamp description");
        assert_eq!(fetched.color, "Bright red");
        assert_eq!(fetched.stock, 10);
        assert!(!fetched.featured);
        assert_eq!(fetched.image_url, "desk lamp.jpg");
    }

    #[sqlx::test]
    async fn test_search_without_filters_returns_all_ordered_by_id(pool: PgPool) {
        let category_id = seed_category(&pool, "Kitchen").await;
        let service = ProductService::new(pool);
        let a = service
            .create(&product("Kettle", "19.99", category_id, ""))
            .await
            .unwrap();
        let b = service
            .create(&product("Toaster", "24.99", category_id, ""))
            .await
            .unwrap();

        let all = service
            .search(&ProductFilter::new(
                Some(-1),
                Some(dec("-1")),
                Some(dec("-1")),
                Some(String::new()),
            ))
            .await
            .unwrap();

        let ids: Vec<i32> = all.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![a.product_id, b.product_id]);
    }

    #[sqlx::test]
    async fn test_search_by_category_returns_matching_subset(pool: PgPool) {
        let kitchen = seed_category(&pool, "Kitchen").await;
        let garden = seed_category(&pool, "Garden").await;
        let service = ProductService::new(pool);
        let kettle = service
            .create(&product("Kettle", "19.99", kitchen, ""))
            .await
            .unwrap();
        service
            .create(&product("Hose", "12.50", garden, ""))
            .await
            .unwrap();
        let toaster = service
            .create(&product("Toaster", "24.99", kitchen, ""))
            .await
            .unwrap();

        let filter = ProductFilter::new(Some(kitchen), None, None, None);
        let matches = service.search(&filter).await.unwrap();

        let ids: Vec<i32> = matches.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![kettle.product_id, toaster.product_id]);
    }

    #[sqlx::test]
    async fn test_search_color_is_case_sensitive_substring_match(pool: PgPool) {
        let category_id = seed_category(&pool, "Decor").await;
        let service = ProductService::new(pool);
        service
            .create(&product("Lamp", "29.99", category_id, "Bright red"))
            .await
            .unwrap();
        service
            .create(&product("Shelf", "49.99", category_id, "redwood"))
            .await
            .unwrap();
        service
            .create(&product("Vase", "14.99", category_id, "Red"))
            .await
            .unwrap();

        let filter = ProductFilter::new(None, None, None, Some("red".to_string()));
        let matches = service.search(&filter).await.unwrap();

        let colors: Vec<&str> = matches.iter().map(|p| p.color.as_str()).collect();
        assert_eq!(colors, vec!["Bright red", "redwood"]);
    }

    #[sqlx::test]
    async fn test_search_by_price_bounds(pool: PgPool) {
        let category_id = seed_category(&pool, "Kitchen").await;
        let service = ProductService::new(pool);
        service
            .create(&product("Spoon", "4.99", category_id, ""))
            .await
            .unwrap();
        let kettle = service
            .create(&product("Kettle", "19.99", category_id, ""))
            .await
            .unwrap();
        service
            .create(&product("Mixer", "89.99", category_id, ""))
            .await
            .unwrap();

        let filter = ProductFilter::new(None, Some(dec("10")), Some(dec("50")), None);
        let matches = service.search(&filter).await.unwrap();

        let ids: Vec<i32> = matches.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![kettle.product_id]);
    }

    #[sqlx::test]
    async fn test_update_overwrites_price_and_keeps_other_fields(pool: PgPool) {
        let category_id = seed_category(&pool, "Lighting").await;
        let service = ProductService::new(pool);
        let created = service
            .create(&product("Desk Lamp", "29.99", category_id, "Bright red"))
            .await
            .unwrap();

        let changed = product("Desk Lamp", "24.99", category_id, "Bright red");
        service.update(created.product_id, &changed).await.unwrap();

        let fetched = service.get(created.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.price, dec("24.99"));
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.color, created.color);
        assert_eq!(fetched.stock, created.stock);
        assert_eq!(fetched.image_url, created.image_url);
    }

    #[sqlx::test]
    async fn test_delete_purges_cart_rows_and_product(pool: PgPool) {
        let category_id = seed_category(&pool, "Toys").await;
        let service = ProductService::new(pool.clone());
        let created = service
            .create(&product("Kite", "9.99", category_id, ""))
            .await
            .unwrap();
        sqlx::query("INSERT INTO shopping_cart (user_id, product_id, quantity) VALUES (1, $1, 3)")
            .bind(created.product_id)
            .execute(&pool)
            .await
            .unwrap();

        service.delete(created.product_id).await.unwrap();

        assert!(service.get(created.product_id).await.unwrap().is_none());
        let cart_rows: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM shopping_cart WHERE product_id = $1")
                .bind(created.product_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(cart_rows, 0);
    }

    #[sqlx::test]
    async fn test_list_by_unknown_category_is_empty(pool: PgPool) {
        let service = ProductService::new(pool);

        let products = service.list_by_category(9999).await.unwrap();
        assert!(products.is_empty());
    }
}
