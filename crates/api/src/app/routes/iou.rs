use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn create_iou(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateIouRequest>,
) -> axum::response::Response {
    match services.iou_record(&body.lender, &body.borrower, body.amount) {
        Ok((lender, borrower)) => {
            tracing::info!(
                lender = %lender.name,
                borrower = %borrower.name,
                amount = body.amount,
                "iou recorded"
            );
            // Lender first, then borrower; only the bulk query sorts.
            (
                StatusCode::OK,
                Json(dto::users_envelope(vec![lender, borrower])),
            )
                .into_response()
        }
        Err(err) => errors::ledger_error_to_response(err),
    }
}
