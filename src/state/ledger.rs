use chrono::{DateTime, Local, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::card::mask_number;
use crate::models::{
    Card, CardCategory, CardColor, Direction, LedgerStats, Transaction, TransactionStatus,
};
use crate::utils::{BankError, Money};

pub const TRANSACTIONS_PER_PAGE: usize = 10;
pub const CARDS_PER_PAGE: usize = 20;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Cards and transactions of one signed-in session.
///
/// Transactions are kept newest-first. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct Ledger {
    owner: String,
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
    next_card_id: u64,
    last_transaction_ms: i64,
}

/// One page of a list shown in chat.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub items: &'a [T],
}

pub type HistoryPage<'a> = Page<'a, Transaction>;
pub type CardPage<'a> = Page<'a, Card>;

/// Slice `items` into 1-based pages. An empty list still has one page.
fn paginate<'a, T>(
    items: &'a [T],
    per_page: usize,
    page: usize,
    what: &str,
) -> Result<Page<'a, T>, BankError> {
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page).max(1);

    if page == 0 || page > total_pages {
        return Err(BankError::Validation(format!(
            "Invalid page number. {} has {} page(s)",
            what, total_pages
        )));
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_count);

    Ok(Page {
        page,
        total_pages,
        total_count,
        items: &items[start..end],
    })
}

/// Parse a user-entered transfer amount; it must be a positive plain decimal.
pub fn parse_amount(amount: &str) -> Result<Money, BankError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(BankError::Validation("Please fill in all fields".to_string()));
    }

    let money: Money = amount
        .parse()
        .map_err(|_| BankError::Validation(format!("'{}' is not a valid amount", amount)))?;
    if !money.is_positive() {
        return Err(BankError::Validation("Amount must be positive".to_string()));
    }
    Ok(money)
}

impl Ledger {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            cards: Vec::new(),
            transactions: Vec::new(),
            next_card_id: 1,
            last_transaction_ms: 0,
        }
    }

    /// A ledger pre-filled with the demo cards and history every new dashboard starts with.
    pub fn seeded(owner: impl Into<String>) -> Self {
        let mut ledger = Self::new(owner);

        ledger.push_card(
            "4532 •••• •••• 8901",
            Money::new(125_430, 50),
            CardCategory::Virtual,
            CardColor::Orchid,
        );
        ledger.push_card(
            "5421 •••• •••• 3456",
            Money::new(48_250, 0),
            CardCategory::Physical,
            CardColor::Ocean,
        );

        // Oldest first, each one prepended.
        let seed = [
            ("4", Direction::Incoming, Money::new(52_000, 0), "Salary", "2025-10-25 09:00"),
            ("3", Direction::Outgoing, Money::new(850, 0), "Starbucks", "2025-10-25 18:45"),
            ("2", Direction::Outgoing, Money::new(3_200, 0), "Ozon", "2025-10-26 12:15"),
            ("1", Direction::Incoming, Money::new(15_000, 0), "Maria Petrova", "2025-10-26 14:30"),
        ];
        for (id, direction, amount, counterparty, date) in seed {
            ledger.transactions.insert(
                0,
                Transaction {
                    id: id.to_string(),
                    direction,
                    amount,
                    counterparty: counterparty.to_string(),
                    date: date.to_string(),
                    status: TransactionStatus::Completed,
                },
            );
        }

        ledger
    }

    fn push_card(
        &mut self,
        number: &str,
        balance: Money,
        category: CardCategory,
        color: CardColor,
    ) -> &Card {
        let card = Card {
            id: self.next_card_id.to_string(),
            number: number.to_string(),
            balance,
            category,
            color,
            owner: self.owner.clone(),
        };
        self.next_card_id += 1;
        self.cards.push(card);
        &self.cards[self.cards.len() - 1]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Issue a new virtual card with a zero balance.
    pub fn issue_card(&mut self) -> Card {
        self.issue_card_with(&mut rand::thread_rng())
    }

    pub fn issue_card_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        let number = mask_number(rng.gen_range(1000..=9999), rng.gen_range(1000..=9999));
        let color = *CardColor::ISSUE_PALETTE
            .choose(rng)
            .unwrap_or(&CardColor::ISSUE_PALETTE[0]);

        let card = self
            .push_card(&number, Money::zero(), CardCategory::Virtual, color)
            .clone();
        debug!("Issued card {} ({}) for {}", card.id, card.number, self.owner);
        card
    }

    /// Record an outgoing transfer and debit `card_id`.
    ///
    /// Fails with `BankError::Validation` before touching any state when the
    /// recipient is blank, the amount is missing, unparseable or not positive,
    /// or the debit would overflow the card balance.
    /// A `card_id` that matches no card debits nothing but still records the
    /// transaction; the debited balance may go negative.
    pub fn record_transfer(
        &mut self,
        card_id: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<Transaction, BankError> {
        self.record_transfer_at(card_id, recipient, amount, Utc::now())
    }

    pub fn record_transfer_at(
        &mut self,
        card_id: &str,
        recipient: &str,
        amount: &str,
        now: DateTime<Utc>,
    ) -> Result<Transaction, BankError> {
        if recipient.trim().is_empty() {
            return Err(BankError::Validation("Please fill in all fields".to_string()));
        }
        let amount = parse_amount(amount)?;
        self.record_debit_at(card_id, recipient, amount, now)
    }

    /// Same as `record_transfer`, with the amount already parsed.
    pub fn record_debit(
        &mut self,
        card_id: &str,
        recipient: &str,
        amount: Money,
    ) -> Result<Transaction, BankError> {
        self.record_debit_at(card_id, recipient, amount, Utc::now())
    }

    pub fn record_debit_at(
        &mut self,
        card_id: &str,
        recipient: &str,
        amount: Money,
        now: DateTime<Utc>,
    ) -> Result<Transaction, BankError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(BankError::Validation("Please fill in all fields".to_string()));
        }
        if !amount.is_positive() {
            return Err(BankError::Validation("Amount must be positive".to_string()));
        }

        let debit = match self.cards.iter().position(|c| c.id == card_id) {
            Some(index) => {
                let balance = self.cards[index].balance.checked_sub(amount).ok_or_else(|| {
                    BankError::Validation("Amount is too large for this card".to_string())
                })?;
                Some((index, balance))
            }
            None => None,
        };

        // Ids come from the creation timestamp; bump on same-millisecond transfers.
        let id_ms = now.timestamp_millis().max(self.last_transaction_ms + 1);
        self.last_transaction_ms = id_ms;

        let transaction = Transaction {
            id: id_ms.to_string(),
            direction: Direction::Outgoing,
            amount,
            counterparty: recipient.to_string(),
            date: now.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            status: TransactionStatus::Completed,
        };
        self.transactions.insert(0, transaction.clone());

        match debit {
            Some((index, balance)) => {
                let card = &mut self.cards[index];
                card.balance = balance;
                debug!("Debited {} from card {}, balance now {}", amount, card.id, card.balance);
            }
            None => debug!(
                "Transfer recorded against unknown card {}, no balance debited",
                card_id
            ),
        }

        Ok(transaction)
    }

    pub fn total_balance(&self) -> Money {
        self.cards.iter().map(|c| c.balance).sum()
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            total_balance: self.total_balance(),
            card_count: self.cards.len(),
            virtual_card_count: self
                .cards
                .iter()
                .filter(|c| c.category == CardCategory::Virtual)
                .count(),
            transaction_count: self.transactions.len(),
        }
    }

    /// Page `page` (1-based) of the newest-first history.
    pub fn history_page(&self, page: usize) -> Result<HistoryPage<'_>, BankError> {
        paginate(&self.transactions, TRANSACTIONS_PER_PAGE, page, "History")
    }

    /// Page `page` (1-based) of the cards, in issue order.
    pub fn cards_page(&self, page: usize) -> Result<CardPage<'_>, BankError> {
        paginate(&self.cards, CARDS_PER_PAGE, page, "Card list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ledger_with_card(balance: Money) -> Ledger {
        let mut ledger = Ledger::new("Alexey Ivanov");
        ledger.push_card(
            "5421 •••• •••• 3456",
            balance,
            CardCategory::Physical,
            CardColor::Ocean,
        );
        ledger
    }

    #[test]
    fn test_seeded_ledger_matches_demo_data() {
        let ledger = Ledger::seeded("Alexey Ivanov");
        assert_eq!(ledger.cards().len(), 2);
        assert_eq!(ledger.card("1").unwrap().balance, Money::new(125_430, 50));
        assert_eq!(ledger.card("1").unwrap().category, CardCategory::Virtual);
        assert_eq!(ledger.card("2").unwrap().balance, Money::new(48_250, 0));
        assert!(ledger.cards().iter().all(|c| c.owner == "Alexey Ivanov"));

        let counterparties: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|t| t.counterparty.as_str())
            .collect();
        assert_eq!(counterparties, vec!["Maria Petrova", "Ozon", "Starbucks", "Salary"]);
    }

    #[test]
    fn test_issue_card_appends_zero_balance_virtual_card() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let mut rng = StdRng::seed_from_u64(7);

        for expected_len in 3..8 {
            let card = ledger.issue_card_with(&mut rng);
            assert_eq!(ledger.cards().len(), expected_len);
            assert_eq!(card.balance, Money::zero());
            assert_eq!(card.category, CardCategory::Virtual);
            assert_eq!(card.owner, "Alexey Ivanov");
            assert!(CardColor::ISSUE_PALETTE.contains(&card.color));
            assert_eq!(ledger.cards().last(), Some(&card));
        }

        let ids: std::collections::HashSet<&str> =
            ledger.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_issued_card_number_is_masked() {
        let mut ledger = Ledger::new("Bob");
        let card = ledger.issue_card_with(&mut StdRng::seed_from_u64(1));
        let groups: Vec<&str> = card.number.split(' ').collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[1], "••••");
        assert_eq!(groups[2], "••••");
        for visible in [groups[0], groups[3]] {
            let n: u16 = visible.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_transfer_debits_card_and_prepends_transaction() {
        let mut ledger = ledger_with_card(Money::new(48_250, 0));
        let tx = ledger.record_transfer("1", "Alice", "100").unwrap();

        assert_eq!(tx.direction, Direction::Outgoing);
        assert_eq!(tx.amount, Money::new(100, 0));
        assert_eq!(tx.counterparty, "Alice");
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(ledger.transactions()[0], tx);
        assert_eq!(ledger.card("1").unwrap().balance, Money::new(48_150, 0));
        assert_eq!(ledger.card("1").unwrap().balance.to_string(), "48150.00");
    }

    #[test]
    fn test_transfer_validation_leaves_state_untouched() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let cards_before = ledger.cards().to_vec();
        let txs_before = ledger.transactions().to_vec();

        let invalid = [
            ("", "100"),
            ("   ", "100"),
            ("Alice", ""),
            ("Alice", "ten"),
            ("Alice", "0"),
            ("Alice", "-5"),
            ("Alice", "1e3"),
            ("Alice", "1e50000000"),
        ];
        for (recipient, amount) in invalid {
            let err = ledger.record_transfer("1", recipient, amount).unwrap_err();
            assert!(matches!(err, BankError::Validation(_)), "{:?}/{:?}", recipient, amount);
        }

        assert_eq!(ledger.cards(), cards_before.as_slice());
        assert_eq!(ledger.transactions(), txs_before.as_slice());
    }

    #[test]
    fn test_transfer_to_unknown_card_still_records() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let total_before = ledger.total_balance();

        ledger.record_transfer("missing", "Ozon", "10").unwrap();

        assert_eq!(ledger.transactions().len(), 5);
        assert_eq!(ledger.total_balance(), total_before);
    }

    #[test]
    fn test_transfer_may_overdraw() {
        let mut ledger = ledger_with_card(Money::new(50, 0));
        ledger.record_transfer("1", "Alice", "80.25").unwrap();
        assert_eq!(ledger.card("1").unwrap().balance, Money::new(-30, -25));
    }

    #[test]
    fn test_transactions_are_newest_first_with_unique_ids() {
        let mut ledger = Ledger::new("Bob");
        let now = Utc.with_ymd_and_hms(2025, 10, 27, 10, 0, 0).unwrap();

        let first = ledger.record_transfer_at("1", "A", "1", now).unwrap();
        let second = ledger.record_transfer_at("1", "B", "2", now).unwrap();
        // Clock going backwards must not reorder anything.
        let earlier = now - chrono::Duration::seconds(5);
        let third = ledger.record_transfer_at("1", "C", "3", earlier).unwrap();

        let order: Vec<&str> =
            ledger.transactions().iter().map(|t| t.counterparty.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
        assert_eq!(first.id, now.timestamp_millis().to_string());
        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
    }

    #[test]
    fn test_stats_track_every_mutation() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let stats = ledger.stats();
        assert_eq!(stats.total_balance, Money::new(173_680, 50));
        assert_eq!(stats.card_count, 2);
        assert_eq!(stats.virtual_card_count, 1);
        assert_eq!(stats.transaction_count, 4);

        ledger.record_transfer("2", "Alice", "100").unwrap();
        assert_eq!(ledger.stats().total_balance, Money::new(173_580, 50));
        assert_eq!(ledger.stats().transaction_count, 5);

        ledger.issue_card_with(&mut StdRng::seed_from_u64(3));
        let stats = ledger.stats();
        assert_eq!(stats.card_count, 3);
        assert_eq!(stats.virtual_card_count, 2);
        assert_eq!(
            stats.total_balance,
            ledger.cards().iter().map(|c| c.balance).sum::<Money>()
        );
    }

    #[test]
    fn test_history_paging() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        for i in 0..8 {
            ledger.record_transfer("1", &format!("R{}", i), "1").unwrap();
        }

        let first = ledger.history_page(1).unwrap();
        assert_eq!(first.total_count, 12);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].counterparty, "R7");

        let second = ledger.history_page(2).unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[1].counterparty, "Salary");

        assert!(ledger.history_page(0).is_err());
        assert!(ledger.history_page(3).is_err());
    }

    #[test]
    fn test_empty_history_has_one_page() {
        let ledger = Ledger::new("Bob");
        let page = ledger.history_page(1).unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_overflowing_debit_is_rejected_before_recording() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let max_amount = "92233720368547758";

        ledger.record_transfer("1", "Alice", max_amount).unwrap();
        let balance_after_first = ledger.card("1").unwrap().balance;
        assert_eq!(ledger.transactions().len(), 5);

        let err = ledger.record_transfer("1", "Alice", max_amount).unwrap_err();
        assert!(matches!(err, BankError::Validation(_)), "{:?}", err);
        assert_eq!(ledger.transactions().len(), 5);
        assert_eq!(ledger.card("1").unwrap().balance, balance_after_first);

        // Unknown cards are never debited, so they cannot overflow.
        ledger.record_transfer("missing", "Alice", max_amount).unwrap();
        assert_eq!(ledger.transactions().len(), 6);
    }

    #[test]
    fn test_total_balance_saturates() {
        let mut ledger = Ledger::new("Bob");
        let lowest = Money::new(-92_233_720_368_547_758, -8);
        for balance in [lowest, Money::new(-1, 0)] {
            ledger.push_card(
                "0000 •••• •••• 0001",
                balance,
                CardCategory::Virtual,
                CardColor::Amber,
            );
        }
        assert_eq!(ledger.total_balance(), lowest);
        assert_eq!(ledger.stats().card_count, 2);
    }

    #[test]
    fn test_parse_amount_at_the_command_boundary() {
        assert_eq!(parse_amount("+100").unwrap(), Money::new(100, 0));
        assert_eq!(parse_amount(" 250.50 ").unwrap(), Money::new(250, 50));
        for input in ["1,5", "1e3", "NaN", "-inf", "0.00", "-1", "١٠٠", "", "  "] {
            let err = parse_amount(input).unwrap_err();
            assert!(matches!(err, BankError::Validation(_)), "{:?}", input);
        }
    }

    #[test]
    fn test_record_debit_validates_without_mutating() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        assert!(ledger.record_debit("1", " ", Money::new(1, 0)).is_err());
        assert!(ledger.record_debit("1", "Alice", Money::zero()).is_err());
        assert_eq!(ledger.transactions().len(), 4);

        let tx = ledger.record_debit("2", " Alice ", Money::new(50, 0)).unwrap();
        assert_eq!(tx.counterparty, "Alice");
        assert_eq!(ledger.card("2").unwrap().balance, Money::new(48_200, 0));
    }

    #[test]
    fn test_cards_paging() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..CARDS_PER_PAGE {
            ledger.issue_card_with(&mut rng);
        }

        let first = ledger.cards_page(1).unwrap();
        assert_eq!(first.total_count, CARDS_PER_PAGE + 2);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), CARDS_PER_PAGE);
        assert_eq!(first.items[0].id, "1");

        let second = ledger.cards_page(2).unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[1].id, (CARDS_PER_PAGE + 2).to_string());

        assert!(ledger.cards_page(3).is_err());
        assert_eq!(Ledger::new("Bob").cards_page(1).unwrap().total_pages, 1);
    }
}
