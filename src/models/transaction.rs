//! Transaction models

use crate::utils::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
        }
    }
}

/// An immutable record of money movement.
///
/// Not linked to a card: an outgoing transfer debits a card, but the record
/// itself only keeps the counterparty and amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Creation time in unix milliseconds, as a string
    pub id: String,
    pub direction: Direction,
    /// Always positive; the sign comes from `direction`
    pub amount: Money,
    pub counterparty: String,
    /// Pre-formatted date, e.g. `2025-10-26 14:30`
    pub date: String,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Amount with a `+`/`-` prefix depending on direction
    pub fn signed_amount(&self) -> String {
        match self.direction {
            Direction::Incoming => format!("+{}", self.amount),
            Direction::Outgoing => format!("-{}", self.amount),
        }
    }
}
