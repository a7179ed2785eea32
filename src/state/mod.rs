//! In-memory session state: one `Session` per chat user, each holding a `Ledger` once signed in.

pub mod ledger;
pub mod session;

pub use ledger::{parse_amount, HistoryPage, Ledger};
pub use session::{Dashboard, Session, SessionStore, SessionView};
