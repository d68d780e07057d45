use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::products::models::{Product, ProductFilter};

/// Query parameters for product search.
///
/// All four filters are optional; `-1` (numeric) and `""` (color) are
/// accepted as explicit "no filter" sentinels.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsQuery {
    /// Restrict to one category
    pub category_id: Option<i32>,
    /// Lower price bound (inclusive)
    pub min_price: Option<Decimal>,
    /// Upper price bound (inclusive)
    pub max_price: Option<Decimal>,
    /// Case-sensitive substring match on color
    pub color: Option<String>,
}

impl From<SearchProductsQuery> for ProductFilter {
    fn from(q: SearchProductsQuery) -> Self {
        ProductFilter::new(q.category_id, q.min_price, q.max_price, q.color)
    }
}

/// Request DTO for creating or replacing a product.
///
/// Updates overwrite all eight fields; there is no partial-field update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Non-negative expected but not enforced
    pub price: Decimal,

    pub category_id: i32,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub stock: i32,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: String,
}

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub category_id: i32,
    pub description: String,
    pub color: String,
    pub stock: i32,
    pub featured: bool,
    pub image_url: String,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.product_id,
            name: p.name,
            price: p.price,
            category_id: p.category_id,
            description: p.description,
            color: p.color,
            stock: p.stock,
            featured: p.featured,
            image_url: p.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_field_names() {
        let dto = ProductResponseDto {
            product_id: 12,
            name: "Desk Lamp".to_string(),
            price: "29.99".parse().unwrap(),
            category_id: 3,
            description: "Adjustable arm".to_string(),
            color: "Bright red".to_string(),
            stock: 40,
            featured: true,
            image_url: "lamp.jpg".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["productId"], 12);
        assert_eq!(value["categoryId"], 3);
        assert_eq!(value["imageUrl"], "lamp.jpg");
        assert_eq!(value["featured"], true);
    }

    #[test]
    fn test_request_defaults_optional_fields() {
        let dto: UpsertProductDto = serde_json::from_str(
            r#"{"name": "Mug", "price": "7.50", "categoryId": 2}"#,
        )
        .unwrap();

        assert_eq!(dto.category_id, 2);
        assert_eq!(dto.stock, 0);
        assert!(!dto.featured);
        assert_eq!(dto.color, "");
        assert_eq!(dto.image_url, "");
    }

    #[test]
    fn test_search_query_sentinels_become_no_filter() {
        let query = SearchProductsQuery {
            category_id: Some(-1),
            min_price: Some("-1".parse().unwrap()),
            max_price: None,
            color: Some(String::new()),
        };

        let filter: ProductFilter = query.into();
        assert_eq!(filter, ProductFilter::default());
    }
}
