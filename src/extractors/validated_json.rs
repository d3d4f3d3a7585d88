//! Validated JSON extractor - deserialization followed by `validator` rules.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{RefOr, Schema},
};
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult, FieldError};

/// A request body with its own rejection message ("Invalid user data", ...).
///
/// The `ToSchema` impl doubles as the list of required fields, so a body
/// missing several of them gets one error per field.
pub trait Payload: DeserializeOwned + Validate + ToSchema {
    const INVALID: &'static str;
}

/// Extracts `T` from a JSON body and runs its validation rules.
///
/// Missing required fields, fields of the wrong type and rule violations are
/// all reported as [`AppError::Validation`] carrying `T::INVALID` and one
/// entry per offending field.
///
/// ```rust,ignore
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUserRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Payload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                rejected::<T>(vec![FieldError {
                    field: "body".to_string(),
                    message: rejection.body_text(),
                }])
            })?;

        from_value(value).map(ValidatedJson)
    }
}

/// Same checks as [`ValidatedJson`] for an already parsed body or a
/// fragment of one.
pub fn from_value<T: Payload>(value: Value) -> AppResult<T> {
    let missing = missing_fields::<T>(&value);
    if !missing.is_empty() {
        return Err(rejected::<T>(missing));
    }

    let payload: T = serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." { "body".to_string() } else { path };
        rejected::<T>(vec![FieldError {
            field,
            message: err.inner().to_string(),
        }])
    })?;

    payload
        .validate()
        .map_err(|errors| rejected::<T>(field_errors(&errors)))?;
    Ok(payload)
}

// Absent and null both count as missing.
fn missing_fields<T: Payload>(value: &Value) -> Vec<FieldError> {
    let RefOr::T(Schema::Object(schema)) = T::schema() else {
        return Vec::new();
    };
    let Some(object) = value.as_object() else {
        return vec![FieldError {
            field: "body".to_string(),
            message: "expected a JSON object".to_string(),
        }];
    };

    schema
        .required
        .iter()
        .filter(|name| object.get(name.as_str()).is_none_or(Value::is_null))
        .map(|name| FieldError {
            field: name.clone(),
            message: "Required".to_string(),
        })
        .collect()
}

fn rejected<T: Payload>(errors: Vec<FieldError>) -> AppError {
    AppError::Validation {
        message: T::INVALID.to_string(),
        errors,
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let name = camel_case(field);
            errs.iter().map(move |e| FieldError {
                field: name.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{name} is invalid")),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

// Rule violations are keyed by Rust field name; report the wire name.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
