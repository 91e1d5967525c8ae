use serde::Deserialize;
use serde_json::json;

use tally_ledger::UserRecord;

// -------------------------
// Request DTOs
// -------------------------

/// Query for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Comma-separated user names; absent or blank means "all users".
    pub users: Option<String>,
}

impl ListUsersQuery {
    pub fn names(&self) -> Vec<String> {
        self.users
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateIouRequest {
    pub lender: String,
    pub borrower: String,
    pub amount: f64,
}

// -------------------------
// Response mapping
// -------------------------

/// Wrap records in the `{"users": [...]}` envelope shared by the list and
/// IOU endpoints. Callers pass records in the order the contract requires
/// (sorted for the bulk query, lender-then-borrower for an IOU).
pub fn users_envelope(records: Vec<UserRecord>) -> serde_json::Value {
    json!({ "users": records })
}
