//! JSON body extractor with validation via the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes and validates a JSON request body.
///
/// Rejects with 400 when the body is empty, is the JSON literal `null`,
/// is not valid JSON for `T`, or fails `T::validate`. The handler is never
/// reached in those cases.
///
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<ProductDto>) -> Json<ProductDto> {
///     Json(payload)
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let data = parse_body::<T>(&body)?;
        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("Request body is required".to_string()));
    }

    match serde_json::from_slice::<Option<T>>(body) {
        Ok(Some(data)) => Ok(data),
        Ok(None) => Err(AppError::BadRequest("Request body is required".to_string())),
        Err(e) => Err(AppError::InvalidJson(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    async fn extract(body: &'static str) -> Result<ValidatedJson<Payload>, AppError> {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        ValidatedJson::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(payload) = extract(r#"{"name":"widget"}"#).await.unwrap();
        assert_eq!(payload.name, "widget");
    }

    #[tokio::test]
    async fn test_rejects_empty_body() {
        assert!(matches!(extract("").await, Err(AppError::BadRequest(_))));
        assert!(matches!(extract("  \n").await, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_rejects_null_body() {
        assert!(matches!(extract("null").await, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        assert!(matches!(extract("{\"name\":").await, Err(AppError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_rejects_invalid_payload() {
        let result = extract(r#"{"name":"far too long a name"}"#).await;
        match result {
            Err(AppError::ValidationError(errors)) => {
                assert!(errors.field_errors().contains_key("name"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|v| v.0)),
        }
    }
}
