use axum_helpers::Pagination;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProductReq, ListProductReq, Product, ProductFilter, UpdateProductReq};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Requests reaching the service have already been decoded and validated by
/// the HTTP layer; the service owns existence and uniqueness rules.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by its id
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &str) -> ProductResult<Product> {
        let id = parse_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List one page of products and its pagination metadata
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        req: &ListProductReq,
    ) -> ProductResult<(Vec<Product>, Pagination)> {
        let filter = ProductFilter::from(req);
        let total = self.repository.count(&filter).await?;
        let products = self
            .repository
            .list(&filter, Pagination::skip(req.page, req.limit), req.limit)
            .await?;

        Ok((products, Pagination::new(req.page, req.limit, total)))
    }

    /// Create a product; names are unique regardless of case
    #[instrument(skip(self))]
    pub async fn create(&self, req: &CreateProductReq) -> ProductResult<Product> {
        if self.repository.exists_by_name(&req.name).await? {
            return Err(ProductError::DuplicateName(req.name.clone()));
        }

        self.repository.create(req.clone()).await
    }

    /// Update the fields present in `req`
    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, req: &UpdateProductReq) -> ProductResult<Product> {
        let id = parse_id(id)?;
        let current = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if let Some(name) = &req.name {
            let renamed = current.name.to_lowercase() != name.trim().to_lowercase();
            if renamed && self.repository.exists_by_name(name).await? {
                return Err(ProductError::DuplicateName(name.clone()));
            }
        }

        self.repository.update(id, req.clone()).await
    }
}

fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| ProductError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn sample(name: &str) -> Product {
        Product::new(CreateProductReq {
            name: name.to_string(),
            description: "desc".to_string(),
            price: 10.0,
        })
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_id_without_touching_repository() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service.get_product_by_id("not-a-uuid").await;
        assert!(matches!(result, Err(ProductError::InvalidId(id)) if id == "not-a-uuid"));
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product_by_id(&id.to_string()).await;
        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_exists_by_name()
            .with(eq("Mug"))
            .returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let req = CreateProductReq {
            name: "Mug".to_string(),
            description: "desc".to_string(),
            price: 3.0,
        };
        let result = service.create(&req).await;
        assert!(matches!(result, Err(ProductError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_create_passes_request_to_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_name().returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|req| Ok(Product::new(req)));

        let service = ProductService::new(mock_repo);
        let req = CreateProductReq {
            name: "Mug".to_string(),
            description: "desc".to_string(),
            price: 3.0,
        };
        let product = service.create(&req).await.unwrap();
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 3.0);
    }

    #[tokio::test]
    async fn test_list_builds_pagination_from_count() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().returning(|_| Ok(45));
        mock_repo
            .expect_list()
            .withf(|_, skip, limit| *skip == 20 && *limit == 20)
            .returning(|_, _, _| Ok(vec![sample("Mug")]));

        let service = ProductService::new(mock_repo);
        let req = ListProductReq {
            page: 2,
            ..Default::default()
        };
        let (products, pagination) = service.list_products(&req).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(pagination, Pagination::new(2, 20, 45));
        assert_eq!(pagination.total_page, 3);
    }

    #[tokio::test]
    async fn test_update_missing_product_skips_write() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .update(&Uuid::now_v7().to_string(), &UpdateProductReq::default())
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rename_to_existing_name() {
        let current = sample("Cup");
        let id = current.id;

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(current.clone())));
        mock_repo
            .expect_exists_by_name()
            .with(eq("Mug"))
            .returning(|_| Ok(true));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let req = UpdateProductReq {
            name: Some("Mug".to_string()),
            ..Default::default()
        };
        let result = service.update(&id.to_string(), &req).await;
        assert!(matches!(result, Err(ProductError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_skips_uniqueness_check() {
        let current = sample("Cup");
        let id = current.id;
        let stored = current.clone();

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        mock_repo.expect_exists_by_name().never();
        mock_repo.expect_update().times(1).returning(move |_, req| {
            let mut updated = current.clone();
            updated.apply_update(req);
            Ok(updated)
        });

        let service = ProductService::new(mock_repo);
        let req = UpdateProductReq {
            name: Some("cup".to_string()),
            price: Some(4.0),
            ..Default::default()
        };
        let updated = service.update(&id.to_string(), &req).await.unwrap();
        assert_eq!(updated.price, 4.0);
        assert_eq!(updated.name, "cup");
    }
}
