//! HTTP error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use serde_path_to_error::Segment;
use thiserror::Error;
use tripapi::BookingError;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// One schema violation, located by its path in the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// 422 body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// 400 body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request validation failed ({} errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { detail }),
            )
                .into_response(),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
            }
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SameOriginAndDestination => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl ApiError {
    /// Validation failure that concerns the body as a whole
    pub fn body(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(vec!["body".to_string()], msg, kind)])
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut loc = vec!["body".to_string()];
        for segment in err.path().iter() {
            match segment {
                Segment::Seq { index } => loc.push(index.to_string()),
                Segment::Map { key } => loc.push(key.clone()),
                Segment::Enum { variant } => loc.push(variant.clone()),
                Segment::Unknown => {}
            }
        }

        let inner = err.inner();
        let msg = inner.to_string();
        let kind = match inner.classify() {
            Category::Data => match missing_field(&msg) {
                // serde reports a missing field at its parent's path
                Some(field) => {
                    loc.push(field);
                    "missing"
                }
                None => "invalid_data",
            },
            Category::Syntax | Category::Eof => "json_invalid",
            Category::Io => "body_unreadable",
        };

        ApiError::Validation(vec![FieldError::new(loc, msg, kind)])
    }
}

/// Field name out of serde's "missing field `name`" message
fn missing_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next().map(str::to_string)
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut detail = Vec::new();
        collect_field_errors(&errors, &["body".to_string()], &mut detail);
        detail.sort_by(|a, b| a.loc.cmp(&b.loc));
        ApiError::Validation(detail)
    }
}

/// Flatten nested validator errors into located field errors
fn collect_field_errors(errors: &ValidationErrors, prefix: &[String], out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let mut loc = prefix.to_vec();
        loc.push(field.to_string());

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code));
                    out.push(FieldError::new(loc.clone(), msg, error.code.to_string()));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &loc, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let mut item_loc = loc.clone();
                    item_loc.push(index.to_string());
                    collect_field_errors(nested, &item_loc, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(email(message = "value is not a valid email address"))]
        email: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(length(equal = 3))]
        code: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn test_nested_errors_are_located() {
        let value = Outer {
            code: "TOOLONG".to_string(),
            inner: Inner {
                email: "nope".to_string(),
            },
        };

        let ApiError::Validation(detail) = ApiError::from(value.validate().unwrap_err()) else {
            panic!("expected validation error");
        };

        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0].loc, vec!["body", "code"]);
        assert_eq!(detail[0].kind, "length");
        assert_eq!(detail[1].loc, vec!["body", "inner", "email"]);
        assert_eq!(detail[1].msg, "value is not a valid email address");
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Wrapper {
        items: Vec<Item>,
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Item {
        name: String,
        count: u32,
    }

    fn deserialize_error(json: &str) -> Vec<FieldError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        let err = serde_path_to_error::deserialize::<_, Wrapper>(deserializer).unwrap_err();
        let ApiError::Validation(detail) = ApiError::from(err) else {
            panic!("expected validation error");
        };
        detail
    }

    #[test]
    fn test_missing_field_is_located() {
        let detail = deserialize_error(r#"{"items": [{"name": "a", "count": 1}, {"name": "b"}]}"#);

        assert_eq!(detail.len(), 1);
        assert_eq!(detail[0].loc, vec!["body", "items", "1", "count"]);
        assert_eq!(detail[0].kind, "missing");
    }

    #[test]
    fn test_wrong_type_is_located() {
        let detail = deserialize_error(r#"{"items": [{"name": "a", "count": "many"}]}"#);

        assert_eq!(detail[0].loc, vec!["body", "items", "0", "count"]);
        assert_eq!(detail[0].kind, "invalid_data");
    }

    #[test]
    fn test_syntax_error_is_body_level() {
        let detail = deserialize_error(r#"{"items": ["#);

        assert_eq!(detail[0].kind, "json_invalid");
        assert_eq!(detail[0].loc[0], "body");
    }

    #[test]
    fn test_missing_field_name_parsing() {
        assert_eq!(
            missing_field("missing field `email` at line 1 column 9"),
            Some("email".to_string())
        );
        assert_eq!(missing_field("invalid type: string"), None);
    }

    #[test]
    fn test_booking_error_is_bad_request() {
        let err = ApiError::from(BookingError::SameOriginAndDestination);
        assert!(matches!(&err, ApiError::BadRequest(msg) if msg == "Origin and Destination cannot be the same."));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_status() {
        let err = ApiError::Validation(vec![FieldError::new(
            vec!["body".to_string()],
            "missing",
            "missing",
        )]);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
