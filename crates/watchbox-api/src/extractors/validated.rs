//! `ValidatedJson` extractor — deserializes a JSON body and runs its
//! declarative validation rules before the handler sees it.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// A JSON request body that has passed its `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation {
                message: format!("Invalid request body: {e}"),
                errors: Vec::new(),
            })?;

        value.validate().map_err(|e| ApiError::Validation {
            message: "Validation failed".to_string(),
            errors: flatten_errors(&e),
        })?;

        Ok(Self(value))
    }
}

/// Flattens `validator` output into `"field: message"` strings.
fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut flat: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    flat.sort();
    flat
}
