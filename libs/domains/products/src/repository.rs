use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProductReq, Product, ProductFilter, ProductOrderBy, UpdateProductReq};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProductReq) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List one page of products matching a filter, in the filter's order
    async fn list(&self, filter: &ProductFilter, skip: u64, limit: u64)
        -> ProductResult<Vec<Product>>;

    /// Count products matching a filter
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64>;

    /// Update an existing product
    async fn update(&self, id: Uuid, input: UpdateProductReq) -> ProductResult<Product>;

    /// Check if a product name exists (case-insensitive)
    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn compare(a: &Product, b: &Product, order_by: ProductOrderBy) -> Ordering {
    let primary = match order_by {
        ProductOrderBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        ProductOrderBy::Price => a.price.total_cmp(&b.price),
        ProductOrderBy::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    // v7 ids are time ordered, which keeps ties stable across calls
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProductReq) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.values().any(|p| same_name(&p.name, &input.name)) {
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = Product::new(input);
        if products.values().any(|p| p.code == product.code) {
            return Err(ProductError::DuplicateCode(product.code));
        }

        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, code = %product.code, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = compare(a, b, filter.order_by);
            if filter.order_desc {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(result.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn update(&self, id: Uuid, input: UpdateProductReq) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if let Some(name) = &input.name {
            let taken = products
                .values()
                .any(|p| p.id != id && same_name(&p.name, name));
            if taken {
                return Err(ProductError::DuplicateName(name.clone()));
            }
        }

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);

        tracing::info!(product_id = %id, "Updated product");
        Ok(product.clone())
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.values().any(|p| same_name(&p.name, name)))
    }
}
