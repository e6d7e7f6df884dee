use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use staffdir_store::UserStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn list_users(Extension(store): Extension<Arc<dyn UserStore>>) -> Response {
    match store.list() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match store.get(id) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Json(body): Json<dto::UserRequest>,
) -> Response {
    match store.create(body.into_draft()) {
        Ok(user) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/users/{}", user.id))],
            Json(user),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UserRequest>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match store.update(id, body.into_draft()) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(response) => return response,
    };

    match store.delete(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn parse_id(raw: &str) -> Result<u64, Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id")
    })
}
