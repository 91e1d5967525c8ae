use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListUsersQuery>,
) -> axum::response::Response {
    match services.users_list(&query.names()) {
        Ok(records) => (StatusCode::OK, Json(dto::users_envelope(records))).into_response(),
        Err(err) => errors::ledger_error_to_response(err),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    match services.user_create(&body.user) {
        Ok(record) => {
            tracing::info!(user = %record.name, "user created");
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => errors::ledger_error_to_response(err),
    }
}
