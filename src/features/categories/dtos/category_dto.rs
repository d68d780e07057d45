use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Request DTO for creating or replacing a category.
///
/// The identifier is never taken from the body: inserts get a generated one
/// and updates use the path identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub category_id: i32,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id,
            name: c.name,
            description: c.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_field_names() {
        let dto = CategoryResponseDto {
            category_id: 7,
            name: "Electronics".to_string(),
            description: "Gadgets and devices".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["categoryId"], 7);
        assert_eq!(value["name"], "Electronics");
        assert_eq!(value["description"], "Gadgets and devices");
    }

    #[test]
    fn test_request_parses_camel_case_and_defaults_description() {
        let dto: UpsertCategoryDto =
            serde_json::from_str(r#"{"name": "Home Goods"}"#).unwrap();
        assert_eq!(dto.name, "Home Goods");
        assert_eq!(dto.description, "");
    }
}
