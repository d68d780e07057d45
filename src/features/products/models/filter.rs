use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

/// Filter specification for product search.
///
/// Each predicate is optional; present predicates combine with AND. Clients
/// may pass the sentinel values `-1` (numeric bounds, category) or a blank
/// string (color) to mean "no filter on this field" - `new` normalizes those
/// to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub color: Option<String>,
}

impl ProductFilter {
    pub fn new(
        category_id: Option<i32>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
        color: Option<String>,
    ) -> Self {
        Self {
            category_id: category_id.filter(|&id| id != -1),
            min_price: min_price.filter(|p| *p != Decimal::NEGATIVE_ONE),
            max_price: max_price.filter(|p| *p != Decimal::NEGATIVE_ONE),
            color: color.filter(|c| !c.is_empty()),
        }
    }

    /// Append the active predicates to a query ending in `WHERE 1=1`.
    ///
    /// Every user-supplied value goes through `push_bind`; the clause text
    /// itself is fixed. Color matches as a case-sensitive substring.
    pub fn apply(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if let Some(category_id) = self.category_id {
            builder.push(" AND category_id = ").push_bind(category_id);
        }

        if let Some(min_price) = self.min_price {
            builder.push(" AND price >= ").push_bind(min_price);
        }

        if let Some(max_price) = self.max_price {
            builder.push(" AND price <= ").push_bind(max_price);
        }

        if let Some(color) = &self.color {
            builder
                .push(" AND color LIKE ")
                .push_bind(format!("%{}%", color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn build_sql(filter: &ProductFilter) -> String {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        filter.apply(&mut builder);
        builder.push(" ORDER BY product_id ASC");
        builder.sql().to_string()
    }

    #[test]
    fn test_sentinels_normalize_to_no_filter() {
        let filter = ProductFilter::new(
            Some(-1),
            Some(dec("-1")),
            Some(dec("-1")),
            Some(String::new()),
        );
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_no_filter_adds_no_predicates() {
        let sql = build_sql(&ProductFilter::default());
        assert_eq!(sql, "SELECT * FROM products WHERE 1=1 ORDER BY product_id ASC");
    }

    #[test]
    fn test_negative_one_decimal_in_any_scale_is_a_sentinel() {
        let filter = ProductFilter::new(None, Some(dec("-1.00")), None, None);
        assert_eq!(filter.min_price, None);
    }

    #[test]
    fn test_single_category_predicate() {
        let filter = ProductFilter::new(Some(5), None, None, None);
        let sql = build_sql(&filter);
        assert_eq!(
            sql,
            "SELECT * FROM products WHERE 1=1 AND category_id = $1 ORDER BY product_id ASC"
        );
    }

    #[test]
    fn test_all_predicates_combine_with_and_in_declaration_order() {
        let filter = ProductFilter::new(
            Some(5),
            Some(dec("10")),
            Some(dec("99.99")),
            Some("red".to_string()),
        );
        let sql = build_sql(&filter);
        assert_eq!(
            sql,
            "SELECT * FROM products WHERE 1=1 AND category_id = $1 AND price >= $2 \
             AND price <= $3 AND color LIKE $4 ORDER BY product_id ASC"
        );
    }

    #[test]
    fn test_real_price_bound_is_kept() {
        let filter = ProductFilter::new(None, Some(dec("0")), Some(dec("25")), None);
        assert_eq!(filter.min_price, Some(dec("0")));
        assert_eq!(filter.max_price, Some(dec("25")));
    }
}
