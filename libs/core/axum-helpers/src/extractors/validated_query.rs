//! Query-string extractor with automatic validation.

use crate::errors::AppError;
use crate::validation::validate_struct;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query-string extractor with automatic validation.
///
/// Binding failures reject with [`AppError::QueryExtractorRejection`] and
/// constraint violations with [`AppError::ValidationError`], both rendered in
/// the standard envelope with status 400.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        validate_struct(&data)?;
        Ok(ValidatedQuery(data))
    }
}
