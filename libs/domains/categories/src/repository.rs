use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryFilter, CreateCategoryReq, UpdateCategoryReq};

/// Data access for categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: CreateCategoryReq) -> CategoryResult<Category>;

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>>;

    /// Page of matching categories, oldest first
    async fn list(
        &self,
        filter: &CategoryFilter,
        skip: u64,
        limit: u64,
    ) -> CategoryResult<Vec<Category>>;

    async fn count(&self, filter: &CategoryFilter) -> CategoryResult<u64>;

    async fn update(&self, id: Uuid, input: UpdateCategoryReq) -> CategoryResult<Category>;

    /// Case-insensitive name lookup
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool>;
}

/// In-memory implementation of CategoryRepository
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategoryReq) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        if categories.values().any(|c| same_name(&c.name, &input.name)) {
            return Err(CategoryError::DuplicateName(input.name));
        }

        let category = Category::new(input);
        categories.insert(category.id, category.clone());

        tracing::info!(category_id = %category.id, "Created category");
        Ok(category)
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &CategoryFilter,
        skip: u64,
        limit: u64,
    ) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(result.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: &CategoryFilter) -> CategoryResult<u64> {
        let categories = self.categories.read().await;
        Ok(categories.values().filter(|c| filter.matches(c)).count() as u64)
    }

    async fn update(&self, id: Uuid, input: UpdateCategoryReq) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        if let Some(name) = &input.name {
            if categories
                .values()
                .any(|c| c.id != id && same_name(&c.name, name))
            {
                return Err(CategoryError::DuplicateName(name.clone()));
            }
        }

        let category = categories
            .get_mut(&id)
            .ok_or(CategoryError::NotFound(id))?;
        category.apply_update(input);

        tracing::info!(category_id = %id, "Updated category");
        Ok(category.clone())
    }

    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        let categories = self.categories.read().await;
        Ok(categories.values().any(|c| same_name(&c.name, name)))
    }
}
