//! Path extractor that reports malformed parameters in the error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Path parameters that failed to parse (`/blog/abc`, an id overflowing
/// `i32`) become [`AppError::Validation`], the same 422 shape as bad bodies.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn echo(ValidatedPath(id): ValidatedPath<i32>) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app: Router = Router::new().route("/item/:id", get(echo));
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_numeric_id_is_extracted() {
        assert_eq!(status_for("/item/42").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_ids_are_validation_errors() {
        assert_eq!(status_for("/item/abc").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for("/item/99999999999").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
