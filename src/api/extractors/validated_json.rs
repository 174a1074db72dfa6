//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON body that has passed both deserialization and `Validate`.
///
/// Every failure, from a missing content type to an empty required field,
/// is reported as [`AppError::Validation`] so clients see a single 422 shape.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct BlogRequest {
///     #[validate(length(min = 1))]
///     title: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<BlogRequest>) {
///     // payload.title is non-empty here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Render field errors as `field: message` pairs, sorted by field name.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(length(min = 1))]
        body: String,
    }

    #[test]
    fn test_format_lists_each_field() {
        let sample = Sample {
            title: String::new(),
            body: String::new(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "body: is invalid, title: Title is required"
        );
    }

    #[test]
    fn test_valid_input_passes() {
        let sample = Sample {
            title: "A".to_string(),
            body: "B".to_string(),
        };
        assert!(sample.validate().is_ok());
    }
}
