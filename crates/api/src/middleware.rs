use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use staffdir_auth::TokenVerifier;

/// Fixed response body for every authentication failure.
const UNAUTHORIZED_BODY: &str = r#"{"error": "Unauthorized access. Invalid or missing token."}"#;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Bearer authentication stage.
///
/// Outermost stage of the pipeline: on a missing/malformed header or a
/// rejected token it produces the 401 response itself and nothing downstream
/// (logging included) runs.
pub async fn require_bearer(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return unauthorized();
    };

    if let Err(e) = state.verifier.verify(token) {
        tracing::warn!(error = %e, "rejected bearer token");
        return unauthorized();
    }

    next.run(req).await
}

/// Request/response logging stage.
///
/// Sits inside the auth layer, so short-circuited 401s never reach it.
/// Purely observational: the request and response pass through untouched.
pub async fn log_requests(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    tracing::info!(%method, path, "incoming request");

    let response = next.run(req).await;

    tracing::info!(
        status = response.status().as_u16(),
        %method,
        path,
        "outgoing response"
    );

    response
}

/// The candidate token is the exact substring after the `"Bearer "` prefix;
/// any other scheme (or no header at all) means there is no candidate.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "application/json")],
        UNAUTHORIZED_BODY,
    )
        .into_response()
}
