use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Invalid category id: {0}")]
    InvalidId(String),

    #[error("Category not found: {0}")]
    NotFound(Uuid),

    #[error("Category with name '{0}' already exists")]
    DuplicateName(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl CategoryError {
    /// 400 with the error text as message
    pub fn into_read_error(self) -> AppError {
        AppError::BadRequest(self.to_string())
    }

    /// 500 "Something went wrong"
    pub fn into_write_error(self) -> AppError {
        AppError::InternalServerError(self.to_string())
    }
}
