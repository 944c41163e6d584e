use axum_helpers::pagination::{default_limit, default_page, MAX_LIMIT};
use axum_helpers::validation::not_blank;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Prefix of generated product codes
pub const CODE_PREFIX: &str = "PRD-";

/// Product entity, owned by the repository
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    /// Short human-readable code, unique per product
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a product.
///
/// Missing fields decode to their zero value and are then rejected by
/// validation, so a client gets field-level errors instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProductReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

/// Request body for updating a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductReq {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub active: Option<bool>,
}

/// Sort key for product listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductOrderBy {
    Name,
    Price,
    #[default]
    CreatedAt,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductReq {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    /// Exact product code
    pub code: Option<String>,
    /// Only active / inactive products
    pub active: Option<bool>,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,
    /// Page size (1..=100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_LIMIT))]
    pub limit: u64,
    #[serde(default)]
    pub order_by: ProductOrderBy,
    #[serde(default)]
    pub order_desc: bool,
}

impl Default for ListProductReq {
    fn default() -> Self {
        Self {
            name: None,
            code: None,
            active: None,
            page: default_page(),
            limit: default_limit(),
            order_by: ProductOrderBy::default(),
            order_desc: false,
        }
    }
}

/// Repository-level filter derived from [`ListProductReq`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub code: Option<String>,
    pub active: Option<bool>,
    pub order_by: ProductOrderBy,
    pub order_desc: bool,
}

impl From<&ListProductReq> for ProductFilter {
    fn from(req: &ListProductReq) -> Self {
        Self {
            name: req.name.clone().filter(|s| !s.trim().is_empty()),
            code: req.code.clone().filter(|s| !s.trim().is_empty()),
            active: req.active,
            order_by: req.order_by,
            order_desc: req.order_desc,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product
                .name
                .to_lowercase()
                .contains(&name.trim().to_lowercase())
            {
                return false;
            }
        }
        if let Some(code) = &self.code {
            if product.code != *code {
                return false;
            }
        }
        if let Some(active) = self.active {
            if product.active != active {
                return false;
            }
        }
        true
    }
}

impl Product {
    /// Create a new product from the create request
    pub fn new(input: CreateProductReq) -> Self {
        let now = Utc::now();
        let id = Uuid::now_v7();
        Self {
            id,
            code: generate_code(&id),
            name: input.name.trim().to_string(),
            description: input.description,
            price: input.price,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in an update request
    pub fn apply_update(&mut self, update: UpdateProductReq) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = Utc::now();
    }
}

/// `PRD-` followed by the last 8 hex digits of the id, uppercased.
///
/// The tail of a v7 UUID is random, unlike its timestamp head.
pub fn generate_code(id: &Uuid) -> String {
    let simple = id.simple().to_string();
    format!("{}{}", CODE_PREFIX, simple[simple.len() - 8..].to_uppercase())
}
