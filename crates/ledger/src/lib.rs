//! `tally-ledger` — the in-memory IOU ledger.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod error;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, UserRecord};
