use axum_helpers::Pagination;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryFilter, CreateCategoryReq, ListCategoryReq, UpdateCategoryReq};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_category_by_id(&self, id: &str) -> CategoryResult<Category> {
        let id = parse_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        req: &ListCategoryReq,
    ) -> CategoryResult<(Vec<Category>, Pagination)> {
        let filter = CategoryFilter::from(req);
        let total = self.repository.count(&filter).await?;
        let categories = self
            .repository
            .list(&filter, Pagination::skip(req.page, req.limit), req.limit)
            .await?;

        Ok((categories, Pagination::new(req.page, req.limit, total)))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, req: &CreateCategoryReq) -> CategoryResult<Category> {
        if self.repository.exists_by_name(&req.name).await? {
            return Err(CategoryError::DuplicateName(req.name.clone()));
        }

        self.repository.create(req.clone()).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, req: &UpdateCategoryReq) -> CategoryResult<Category> {
        let id = parse_id(id)?;
        let current = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        if let Some(name) = &req.name {
            let renamed = current.name.to_lowercase() != name.trim().to_lowercase();
            if renamed && self.repository.exists_by_name(name).await? {
                return Err(CategoryError::DuplicateName(name.clone()));
            }
        }

        self.repository.update(id, req.clone()).await
    }
}

fn parse_id(id: &str) -> CategoryResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| CategoryError::InvalidId(id.to_string()))
}
