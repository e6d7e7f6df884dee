use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use staffdir_store::StoreError;

pub fn store_error_to_response(err: StoreError) -> Response {
    match err {
        StoreError::Validation(errors) => validation_error_to_response(&errors),
        other => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            other.to_string(),
        ),
    }
}

/// 400 with one entry per violated field rule.
fn validation_error_to_response(errors: &validator::ValidationErrors) -> Response {
    let violations: Vec<serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                json!({
                    "field": wire_field_name(&field.to_string()),
                    "message": e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
        })
        .collect();

    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "violations": violations,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Fallback for routes nothing matched (only reachable once authenticated).
pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "no such route")
}

/// Violations report the wire-level (camelCase) field names, matching the
/// serde renames on the domain types.
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_camel_cased() {
        assert_eq!(wire_field_name("first_name"), "firstName");
        assert_eq!(wire_field_name("email"), "email");
        assert_eq!(wire_field_name("department"), "department");
    }
}
