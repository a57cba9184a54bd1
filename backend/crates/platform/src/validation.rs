//! Validated JSON Extraction
//!
//! [`ValidatedJson`] deserializes a JSON body and runs the DTO's declarative
//! `validator` rules. Every field is checked; all failures are collected into
//! one composite 400 response before the handler runs.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use kernel::error::{app_error::AppError, violation::FieldViolation};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// JSON body that passed its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        validate(&value)?;
        Ok(Self(value))
    }
}

/// Like [`ValidatedJson`], but a request without a body yields `T::default()`
///
/// For endpoints whose fields are all optional. A non-empty body still needs a
/// JSON content type and must pass the DTO's rules.
#[derive(Debug, Clone)]
pub struct ValidatedJsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJsonOrDefault<T>
where
    T: DeserializeOwned + Validate + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), state).await?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let ValidatedJson(value) = ValidatedJson::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Run a DTO's rules and convert failures into a composite [`AppError`]
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::validation(violations_from(&errors)))
}

/// Flatten `validator` errors into wire-named field violations
///
/// Rust field names are snake_case while DTOs serialize as camelCase, so keys
/// are converted. Nested structs produce dotted keys. Output is sorted by key.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(p) => format!("{}.{}", p, to_camel_case(&field.to_string())),
            None => to_camel_case(&field.to_string()),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    let mut violation = FieldViolation::body(key.clone(), e.code.to_string());
                    if let Some(message) = &e.message {
                        violation = violation.with_message(message.to_string());
                    }
                    out.push(violation);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&key), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{}[{}]", key, index)), out);
                }
            }
        }
    }
}

fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        #[validate(required, length(max = 10))]
        new_token: Option<String>,
        #[validate(length(max = 10))]
        old_token: Option<String>,
        #[validate(required, length(max = 3))]
        provider: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("refresh_token"), "refreshToken");
        assert_eq!(to_camel_case("provider"), "provider");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn test_errors_are_accumulated_not_short_circuited() {
        let payload = Payload {
            new_token: None,
            old_token: Some("x".repeat(11)),
            provider: Some("toolong".to_string()),
        };

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.status_code(), 400);

        let found: Vec<(&str, &str)> = err
            .violations()
            .iter()
            .map(|v| (v.key.as_str(), v.error.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("newToken", "required"),
                ("oldToken", "length"),
                ("provider", "length"),
            ]
        );
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = Payload {
            new_token: Some("abc".to_string()),
            old_token: None,
            provider: Some("fcm".to_string()),
        };
        assert!(validate(&payload).is_ok());
    }

    #[tokio::test]
    async fn test_extractor_accepts_valid_body() {
        let req = json_request(r#"{"newToken":"abc","provider":"fcm"}"#);
        let ValidatedJson(payload) = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.new_token.as_deref(), Some("abc"));
        assert!(payload.old_token.is_none());
    }

    #[tokio::test]
    async fn test_extractor_rejects_malformed_json_with_400() {
        let req = json_request(r#"{"newToken":"#);
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extractor_rejects_invalid_fields_with_400() {
        let req = json_request(r#"{"provider":"toolong"}"#);
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_or_default_accepts_missing_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let ValidatedJsonOrDefault(payload) =
            ValidatedJsonOrDefault::<Payload>::from_request(req, &())
                .await
                .unwrap();
        assert!(payload.new_token.is_none());
        assert!(payload.provider.is_none());
    }

    #[tokio::test]
    async fn test_or_default_still_validates_a_present_body() {
        let req = json_request(r#"{"oldToken":"xxxxxxxxxxx"}"#);
        let err = ValidatedJsonOrDefault::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        let keys: Vec<&str> = err.violations().iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["newToken", "oldToken", "provider"]);
    }

    #[tokio::test]
    async fn test_or_default_requires_json_content_type_for_a_present_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"newToken":"abc","provider":"fcm"}"#))
            .unwrap();
        let err = ValidatedJsonOrDefault::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
