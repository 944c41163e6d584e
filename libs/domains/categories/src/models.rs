use axum_helpers::pagination::{default_limit, default_page, MAX_LIMIT};
use axum_helpers::validation::not_blank;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Category entity
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
}

/// Request body for updating a category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryReq {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Query parameters for listing categories
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCategoryReq {
    /// Case-insensitive substring of the category name
    pub name: Option<String>,
    pub active: Option<bool>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_LIMIT))]
    pub limit: u64,
}

impl Default for ListCategoryReq {
    fn default() -> Self {
        Self {
            name: None,
            active: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// Repository-level filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl From<&ListCategoryReq> for CategoryFilter {
    fn from(req: &ListCategoryReq) -> Self {
        Self {
            name: req.name.clone().filter(|s| !s.trim().is_empty()),
            active: req.active,
        }
    }
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        let name_ok = self.name.as_ref().is_none_or(|name| {
            category
                .name
                .to_lowercase()
                .contains(&name.trim().to_lowercase())
        });
        let active_ok = self.active.is_none_or(|active| category.active == active);
        name_ok && active_ok
    }
}

impl Category {
    pub fn new(input: CreateCategoryReq) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.trim().to_string(),
            description: input.description,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateCategoryReq) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = Utc::now();
    }
}
