use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::api::error::ApiError;
use crate::models::{Ruleset, MOVIE_RULES, USER_RULES};

/// Largest write payload the gates will buffer.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Validation gate for movie writes.
pub async fn validate_movie(request: Request, next: Next) -> Response {
    validate_with(MOVIE_RULES, request, next).await
}

/// Validation gate for user writes.
pub async fn validate_user(request: Request, next: Next) -> Response {
    validate_with(USER_RULES, request, next).await
}

/// Buffer the body, run `rules` against it and either reject with 422 or
/// forward the original bytes untouched.
///
/// Only syntactically invalid JSON skips the rules; the `Json` extractor
/// downstream rejects it.
async fn validate_with(rules: Ruleset, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => return ApiError::InvalidBody(err.to_string()).into_response(),
    };

    if let Some(payload) = payload_fields(&bytes) {
        if let Err(errors) = rules.check(&payload) {
            return ApiError::Validation(errors).into_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Fields of a write body. An empty body and any JSON value other than an
/// object carry no fields. `None` when the bytes are not JSON at all.
fn payload_fields(bytes: &[u8]) -> Option<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Some(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes).ok()? {
        Value::Object(fields) => Some(fields),
        _ => Some(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_has_no_fields() {
        assert_eq!(payload_fields(b""), Some(Map::new()));
        assert_eq!(payload_fields(b" \n"), Some(Map::new()));
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        let bodies: [&[u8]; 5] = [b"[]", b"[1, 2]", b"\"title\"", b"42", b"null"];
        for body in bodies {
            assert_eq!(payload_fields(body), Some(Map::new()));
        }
    }

    #[test]
    fn test_object_fields_are_kept() {
        let fields = payload_fields(br#"{"title": "Alien", "color": true}"#).unwrap();
        assert_eq!(fields.get("title"), Some(&json!("Alien")));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_invalid_json_is_not_interpreted() {
        assert_eq!(payload_fields(br#"{"title": "#), None);
        assert_eq!(payload_fields(b"title=Alien"), None);
    }
}
