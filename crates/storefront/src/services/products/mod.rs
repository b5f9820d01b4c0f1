//! Product service.
//!
//! Thin wrapper over the mock API that logs failures and caches catalog
//! reads using `moka`. The catalog is static, so the cache only saves the
//! simulated round trip on repeat reads.

mod cache;

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, instrument};

use maison_core::{CategoryId, ProductId};

use crate::api::{ApiError, MockApi};
use crate::config::CacheConfig;
use crate::models::{Category, Product, ProductQuery};

use cache::{CacheKey, CacheValue};

/// Catalog access for the storefront.
#[derive(Clone)]
pub struct ProductService {
    inner: Arc<ProductServiceInner>,
}

struct ProductServiceInner {
    api: MockApi,
    cache: Cache<CacheKey, CacheValue>,
}

impl ProductService {
    /// Create a new product service.
    #[must_use]
    pub fn new(api: MockApi, config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.ttl)
            .build();

        Self {
            inner: Arc::new(ProductServiceInner { api, cache }),
        }
    }

    /// Get all products, optionally restricted to a category.
    #[instrument(skip(self))]
    pub async fn get_products(&self, category_id: Option<&CategoryId>) -> Vec<Product> {
        let category = category_id.filter(|id| !id.is_all_products()).cloned();
        let cache_key = CacheKey::Products {
            category: category.clone(),
        };

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return products;
        }

        let products = self.inner.api.get_products(category.as_ref()).await;
        if products.is_empty() && category.is_some() {
            debug!("Category matched no products");
        }

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        products
    }

    /// Get featured products.
    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Vec<Product> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Featured).await
        {
            debug!("Cache hit for featured products");
            return products;
        }

        let products = self.inner.api.get_featured_products().await;
        self.inner
            .cache
            .insert(CacheKey::Featured, CacheValue::Products(products.clone()))
            .await;

        products
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ProductNotFound` if the catalog has no such product.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, ApiError> {
        let cache_key = CacheKey::Product(id.clone());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let Some(product) = self.inner.api.get_product_by_id(id).await else {
            let err = ApiError::ProductNotFound(id.clone());
            tracing::error!(product_id = %id, error = %err, "Error fetching product");
            return Err(err);
        };

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Get all categories.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Vec<Category> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return categories;
        }

        let categories = self.inner.api.get_categories().await;
        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(categories.clone()),
            )
            .await;

        categories
    }

    /// Products matching every filter in `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &ProductQuery) -> Vec<Product> {
        self.get_products(query.category.as_ref())
            .await
            .into_iter()
            .filter(|product| query.matches(product))
            .collect()
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use maison_core::Price;

    use super::*;
    use crate::api::{Catalog, LatencyProfile};

    fn service(latency: LatencyProfile) -> ProductService {
        ProductService::new(
            MockApi::new(Catalog::demo(), latency),
            &CacheConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_get_products_all_and_by_category() {
        let service = service(LatencyProfile::none());
        assert_eq!(service.get_products(None).await.len(), 6);
        assert_eq!(
            service.get_products(Some(&CategoryId::new("1"))).await.len(),
            6
        );
        assert_eq!(
            service.get_products(Some(&CategoryId::new("2"))).await.len(),
            1
        );
        assert!(
            service
                .get_products(Some(&CategoryId::new("42")))
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_product_not_found() {
        let service = service(LatencyProfile::none());
        let err = service
            .get_product_by_id(&ProductId::new("404"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::ProductNotFound(ProductId::new("404")));
        assert_eq!(err.to_string(), "Product not found: 404");
    }

    #[tokio::test]
    async fn test_search_combines_filters() {
        let service = service(LatencyProfile::none());
        let query = ProductQuery {
            category: Some(CategoryId::new("6")),
            max_price: Some(Price::from_cents(6000)),
            ..ProductQuery::default()
        };
        let results = service.search(&query).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Minimalist Wall Clock");
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_reads_are_cached() {
        let service = service(LatencyProfile::default());

        let start = tokio::time::Instant::now();
        let first = service.get_featured_products().await;
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        let second = service.get_featured_products().await;
        assert!(start.elapsed() < Duration::from_millis(500));
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_all_forces_refetch() {
        let service = service(LatencyProfile::default());
        let _ = service.get_categories().await;
        service.invalidate_all().await;

        let start = tokio::time::Instant::now();
        let _ = service.get_categories().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
