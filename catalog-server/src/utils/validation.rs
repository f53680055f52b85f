//! Input validation helpers
//!
//! Request bodies go through [`AppJson`] so that malformed payloads
//! (missing fields, wrong types, invalid JSON) surface as
//! [`AppError::Validation`] and map to the 400 `"invalid params"`
//! contract instead of the framework's default rejection.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::{AppError, AppResult};

/// JSON extractor with the application's validation error contract
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}

/// Validate a single request DTO
pub fn check<T: Validate>(value: &T) -> AppResult<()> {
    value
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Validate every DTO in a batch, failing on the first invalid one
pub fn check_all<'a, T, I>(values: I) -> AppResult<()>
where
    T: Validate + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for value in values {
        check(value)?;
    }
    Ok(())
}
