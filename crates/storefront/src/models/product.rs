//! Catalog domain types.

use serde::{Deserialize, Serialize};

use maison_core::{CategoryId, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Lowercase name of the category this product belongs to.
    pub category: String,
    /// Whether the product is shown in the featured section.
    pub featured: bool,
}

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name (e.g., "Lighting").
    pub name: String,
}

impl Category {
    /// The name products use to refer to this category.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Filters for narrowing a product listing.
///
/// All filters are optional and combine with AND. Price bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Restrict to a category (`None` or "All Products" means everything).
    pub category: Option<CategoryId>,
    /// Lowest acceptable unit price.
    pub min_price: Option<Price>,
    /// Highest acceptable unit price.
    pub max_price: Option<Price>,
    /// Case-insensitive text that must appear in the name or description.
    pub text: Option<String>,
}

impl ProductQuery {
    /// Whether a product passes the price and text filters.
    ///
    /// The category filter is applied by the catalog lookup, not here.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Minimal Desk Lamp".to_string(),
            description: "Adjustable brightness.".to_string(),
            price: Price::from_cents(8999),
            image: String::new(),
            category: "lighting".to_string(),
            featured: true,
        }
    }

    #[test]
    fn test_category_slug() {
        let category = Category {
            id: CategoryId::new("5"),
            name: "Kitchenware".to_string(),
        };
        assert_eq!(category.slug(), "kitchenware");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(ProductQuery::default().matches(&lamp()));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let query = ProductQuery {
            min_price: Some(Price::from_cents(8999)),
            max_price: Some(Price::from_cents(8999)),
            ..ProductQuery::default()
        };
        assert!(query.matches(&lamp()));

        let query = ProductQuery {
            max_price: Some(Price::from_cents(8998)),
            ..ProductQuery::default()
        };
        assert!(!query.matches(&lamp()));
    }

    #[test]
    fn test_text_matches_name_or_description() {
        let by_name = ProductQuery {
            text: Some("desk".to_string()),
            ..ProductQuery::default()
        };
        let by_description = ProductQuery {
            text: Some("BRIGHTNESS".to_string()),
            ..ProductQuery::default()
        };
        let miss = ProductQuery {
            text: Some("chair".to_string()),
            ..ProductQuery::default()
        };
        assert!(by_name.matches(&lamp()));
        assert!(by_description.matches(&lamp()));
        assert!(!miss.matches(&lamp()));
    }
}
