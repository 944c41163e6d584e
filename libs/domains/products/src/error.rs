use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Product with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Product with code '{0}' already exists")]
    DuplicateCode(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Lookups and listings answer every service failure with 400 and the
    /// error text as the envelope message.
    pub fn into_read_error(self) -> AppError {
        AppError::BadRequest(self.to_string())
    }

    /// Creates and updates answer every service failure with 500.
    ///
    /// This differs from [`Self::into_read_error`] for the same failures;
    /// existing clients depend on both status codes.
    pub fn into_write_error(self) -> AppError {
        AppError::InternalServerError(self.to_string())
    }
}
