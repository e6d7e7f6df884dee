//! HTTP application wiring (Axum router + middleware pipeline).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use staffdir_auth::{StaticTokenVerifier, TokenVerifier};
use staffdir_store::{InMemoryUserStore, UserStore};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Stage order is fixed here: authenticator first, request logging second,
/// then routing. Layers wrap bottom-up, so the authenticator is added last.
/// The fallback is registered before the layers so unmatched paths go
/// through the same pipeline.
pub fn build_app(token_secret: String) -> Router {
    let verifier: Arc<dyn TokenVerifier> = Arc::new(StaticTokenVerifier::new(token_secret));
    let auth_state = middleware::AuthState { verifier };

    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());

    routes::router()
        .fallback(errors::not_found)
        .layer(Extension(store))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::require_bearer,
        ))
}
