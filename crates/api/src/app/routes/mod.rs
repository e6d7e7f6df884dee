use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for everything behind the authenticator.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/users", users::router())
}
