use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tally_ledger::LedgerError;

/// Translate a ledger error into a client-facing response.
///
/// This table is the only place error kinds meet HTTP status codes; the
/// ledger itself knows nothing about transport.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        LedgerError::UnknownUser(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        LedgerError::DuplicateUser(_) => json_error(StatusCode::CONFLICT, "conflict", message),
        LedgerError::InvalidAmount(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_amount", message)
        }
        LedgerError::EmptyName => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
