use axum::{
    Router,
    routing::{get, post},
};

pub mod iou;
pub mod system;
pub mod users;

/// Router for the ledger endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/iou", post(iou::create_iou))
}
