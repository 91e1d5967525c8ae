use std::sync::{Mutex, MutexGuard};

use tally_ledger::{Ledger, LedgerResult, UserRecord};

/// Shared application state handed to every handler.
///
/// The ledger sits behind one coarse exclusive lock held for the duration
/// of each operation. Operations are in-memory map arithmetic, so the lock
/// is cheap and keeps the owes/owedBy/balance triple consistent under
/// concurrent requests.
pub struct AppServices {
    ledger: Mutex<Ledger>,
}

impl AppServices {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    pub fn users_list(&self, names: &[String]) -> LedgerResult<Vec<UserRecord>> {
        self.ledger().get_users(names)
    }

    pub fn user_create(&self, name: &str) -> LedgerResult<UserRecord> {
        self.ledger().create_user(name)
    }

    pub fn iou_record(
        &self,
        lender: &str,
        borrower: &str,
        amount: f64,
    ) -> LedgerResult<(UserRecord, UserRecord)> {
        self.ledger().record_iou(lender, borrower, amount)
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        // A panic while holding the lock can only come from a bug in the
        // ledger itself; the state is still usable, so recover the guard.
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
