use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// One user's debt record.
///
/// `owes` and `owed_by` are accumulated per-counterparty totals, not lists
/// of individual IOUs. `balance` is always derived as
/// `sum(owed_by) - sum(owes)`; it is recomputed after every mutation and
/// never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    /// Creditor name -> amount this user owes them.
    pub owes: BTreeMap<String, f64>,
    /// Debtor name -> amount they owe this user.
    pub owed_by: BTreeMap<String, f64>,
    pub balance: f64,
}

impl UserRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            owes: BTreeMap::new(),
            owed_by: BTreeMap::new(),
            balance: 0.0,
        }
    }

    fn recompute_balance(&mut self) {
        self.balance = self.owed_by.values().sum::<f64>() - self.owes.values().sum::<f64>();
    }
}

/// The IOU ledger: user name -> debt record.
///
/// Invariants held after every completed mutation:
/// - for any users A and B, `A.owed_by[B] == B.owes[A]` (both sides of a
///   debt are written together);
/// - every `balance` equals `sum(owed_by) - sum(owes)`.
///
/// All validation runs before any mutation, so a rejected operation leaves
/// the ledger untouched. The ledger itself is not synchronized; callers
/// sharing one instance across threads put it behind a single exclusive
/// lock held for the duration of each operation.
#[derive(Debug, Default)]
pub struct Ledger {
    users: BTreeMap<String, UserRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user with no debts and a zero balance.
    ///
    /// Names are unique; re-creating an existing name is rejected and the
    /// existing record is left unchanged.
    pub fn create_user(&mut self, name: &str) -> LedgerResult<UserRecord> {
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.users.contains_key(name) {
            return Err(LedgerError::duplicate_user(name));
        }

        let record = UserRecord::new(name);
        self.users.insert(name.to_string(), record.clone());
        tracing::debug!(user = name, "user created");
        Ok(record)
    }

    /// Look up a single user's record.
    pub fn get_user(&self, name: &str) -> LedgerResult<UserRecord> {
        self.users
            .get(name)
            .cloned()
            .ok_or_else(|| LedgerError::unknown_user(name))
    }

    /// Look up many users at once.
    ///
    /// An empty `names` slice means "all users". Results come back in
    /// ascending name order regardless of request order, and duplicate
    /// names in the request collapse to one record. If any requested name
    /// is missing, the error carries the first missing name in request
    /// order and nothing is returned.
    pub fn get_users(&self, names: &[String]) -> LedgerResult<Vec<UserRecord>> {
        if names.is_empty() {
            return Ok(self.users.values().cloned().collect());
        }

        let mut selected: BTreeSet<&str> = BTreeSet::new();
        for name in names {
            if !self.users.contains_key(name.as_str()) {
                return Err(LedgerError::unknown_user(name));
            }
            selected.insert(name.as_str());
        }

        Ok(selected
            .into_iter()
            .filter_map(|name| self.users.get(name))
            .cloned()
            .collect())
    }

    /// Record that `borrower` now owes `lender` an additional `amount`.
    ///
    /// Validation order: lender exists, borrower exists, amount is a
    /// strictly positive finite number. Both sides of the debt and both
    /// balances are then updated together. Returns the updated records as
    /// `(lender, borrower)` — deliberately NOT sorted by name; only the
    /// bulk query sorts.
    ///
    /// A self-IOU (`lender == borrower`) is permitted: both maps on the one
    /// record gain the entry and the balance nets to zero.
    pub fn record_iou(
        &mut self,
        lender: &str,
        borrower: &str,
        amount: f64,
    ) -> LedgerResult<(UserRecord, UserRecord)> {
        if !self.users.contains_key(lender) {
            return Err(LedgerError::unknown_user(lender));
        }
        if !self.users.contains_key(borrower) {
            return Err(LedgerError::unknown_user(borrower));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        if let Some(record) = self.users.get_mut(lender) {
            *record.owed_by.entry(borrower.to_string()).or_insert(0.0) += amount;
            record.recompute_balance();
        }
        if let Some(record) = self.users.get_mut(borrower) {
            *record.owes.entry(lender.to_string()).or_insert(0.0) += amount;
            record.recompute_balance();
        }

        tracing::debug!(lender, borrower, amount, "iou recorded");
        Ok((self.get_user(lender)?, self.get_user(borrower)?))
    }
}
