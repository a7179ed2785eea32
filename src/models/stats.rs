//! Dashboard overview models

use crate::utils::Money;

/// Derived totals shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStats {
    pub total_balance: Money,
    pub card_count: usize,
    pub virtual_card_count: usize,
    pub transaction_count: usize,
}
