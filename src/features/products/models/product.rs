use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for a catalog product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
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
