#![allow(dead_code)]

use std::sync::Once;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use cinema_api::api::{create_routes, AppState};
use cinema_api::models::UserPayload;
use fake::faker::address::en::CityName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Router plus direct access to the repositories behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn is_json(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("json"))
            .unwrap_or(false)
    }
}

impl TestApp {
    pub fn in_memory() -> Self {
        Self::with_state(AppState::in_memory())
    }

    pub fn with_state(state: AppState) -> Self {
        init_test_logging();
        Self {
            router: create_routes(state.clone()),
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    const LANGUAGES: [&'static str; 5] = ["French", "English", "German", "Spanish", "Italian"];

    /// A complete user body with a unique email
    pub fn user_json() -> Value {
        let language = Self::LANGUAGES[(0..Self::LANGUAGES.len()).fake::<usize>()];
        json!({
            "firstname": FirstName().fake::<String>(),
            "lastname": LastName().fake::<String>(),
            "email": format!("{}@wild.co", Uuid::new_v4()),
            "city": CityName().fake::<String>(),
            "language": language,
        })
    }

    pub fn user_payload() -> UserPayload {
        serde_json::from_value(Self::user_json()).unwrap()
    }

    pub fn movie_json() -> Value {
        json!({
            "title": "Metropolis",
            "director": "Fritz Lang",
            "year": "1927",
            "color": false,
            "duration": 153
        })
    }
}
