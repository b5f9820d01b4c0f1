//! In-memory product catalog.

use maison_core::{CategoryId, Price, ProductId};

use crate::models::{Category, Product};

/// Static list of products and categories serving as the mock data source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit data.
    #[must_use]
    pub const fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by ID.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Products in a category.
    ///
    /// `None` and the "All Products" ID return the whole catalog. An unknown
    /// category ID matches nothing.
    #[must_use]
    pub fn in_category(&self, id: Option<&CategoryId>) -> Vec<Product> {
        let Some(id) = id.filter(|id| !id.is_all_products()) else {
            return self.products.clone();
        };

        let Some(slug) = self.category(id).map(Category::slug) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.category == slug)
            .cloned()
            .collect()
    }

    /// The demo catalog: six home goods across five categories.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            product(
                "1",
                "Minimal Desk Lamp",
                "A sleek, minimalist desk lamp with adjustable brightness and color temperature.",
                8999,
                "photo-1507473885765-e6ed057f782c",
                "lighting",
                true,
            ),
            product(
                "2",
                "Modern Lounge Chair",
                "Contemporary lounge chair with premium fabric upholstery and wooden legs.",
                34999,
                "photo-1567538096630-e0c55bd6374c",
                "furniture",
                true,
            ),
            product(
                "3",
                "Ceramic Coffee Mug",
                "Handcrafted ceramic coffee mug with a matte finish and ergonomic handle.",
                2499,
                "photo-1514228742587-6b1558fcca3d",
                "kitchenware",
                false,
            ),
            product(
                "4",
                "Wool Throw Blanket",
                "Soft, premium wool throw blanket perfect for adding warmth and style to any space.",
                12999,
                "photo-1600369671236-e74521d4b6ad",
                "textiles",
                false,
            ),
            product(
                "5",
                "Minimalist Wall Clock",
                "Simple, elegant wall clock with a white face and matte black hands.",
                5999,
                "photo-1563861826100-9cb868fdbe1c",
                "decor",
                true,
            ),
            product(
                "6",
                "Glass Vase Set",
                "Set of three glass vases in varying heights, perfect for fresh or dried florals.",
                7999,
                "photo-1581912492723-688317ba2162",
                "decor",
                false,
            ),
        ];

        let categories = [
            ("1", "All Products"),
            ("2", "Furniture"),
            ("3", "Lighting"),
            ("4", "Textiles"),
            ("5", "Kitchenware"),
            ("6", "Decor"),
        ]
        .into_iter()
        .map(|(id, name)| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        })
        .collect();

        Self::new(products, categories)
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    photo: &str,
    category: &str,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: format!(
            "https://images.unsplash.com/{photo}?auto=format&fit=crop&w=1000&q=80"
        ),
        category: category.to_string(),
        featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_products_category_returns_everything() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.in_category(None).len(), 6);
        assert_eq!(
            catalog.in_category(Some(&CategoryId::new("1"))).len(),
            6
        );
    }

    #[test]
    fn test_category_filter_uses_lowercased_name() {
        let catalog = Catalog::demo();
        let decor = catalog.in_category(Some(&CategoryId::new("6")));
        let ids: Vec<_> = decor.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::demo();
        assert!(catalog.in_category(Some(&CategoryId::new("99"))).is_empty());
    }

    #[test]
    fn test_featured() {
        let ids: Vec<_> = Catalog::demo()
            .featured()
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::demo();
        let mug = catalog.product(&ProductId::new("3"));
        assert_eq!(mug.map(|p| p.price), Some(Price::from_cents(2499)));
        assert!(catalog.product(&ProductId::new("7")).is_none());
    }
}
