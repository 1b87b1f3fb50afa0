//! API key authentication for the webhook route

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API key expected on skill requests. `None` disables the check.
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    fn allows(&self, presented: Option<&str>) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => presented == Some(expected.as_str()),
        }
    }
}

/// Middleware that rejects requests without the configured API key
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let auth = request.extensions().get::<ApiKeyAuth>().cloned();

    if let Some(auth) = auth {
        let presented = request
            .headers()
            .get("X-API-Key")
            .and_then(|v| v.to_str().ok());

        if !auth.allows(presented) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Missing or invalid API key" })),
            )
                .into_response();
        }
    }

    next.run(request).await
}
