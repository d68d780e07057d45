mod product_dto;

pub use product_dto::{ProductResponseDto, SearchProductsQuery, UpsertProductDto};
