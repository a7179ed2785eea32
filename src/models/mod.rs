//! Data models for NeoBank commands and services
//!
//! Cards and transactions make up a session's ledger; `SessionUser` is what an
//! authenticator hands back; `LedgerStats` is the derived dashboard overview.

pub mod card;
pub mod transaction;
pub mod user;
pub mod stats;

pub use card::{Card, CardCategory, CardColor};
pub use transaction::{Direction, Transaction, TransactionStatus};
pub use user::{Role, SessionUser};
pub use stats::LedgerStats;
