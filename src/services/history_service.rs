use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::prelude::Context;

use crate::models::{Direction, Transaction};
use crate::services::session_store;
use crate::state::HistoryPage;
use crate::utils::notice::{clip, COUNTERPARTY_DISPLAY_LIMIT};
use crate::utils::BankError;

pub struct HistoryResult {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub transactions: Vec<Transaction>,
}

impl From<HistoryPage<'_>> for HistoryResult {
    fn from(page: HistoryPage<'_>) -> Self {
        HistoryResult {
            page: page.page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            transactions: page.items.to_vec(),
        }
    }
}

pub async fn get_history(
    ctx: &Context,
    user_id: u64,
    page: usize,
) -> Result<HistoryResult, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| {
            s.dashboard()?.ledger.history_page(page).map(HistoryResult::from)
        })
        .await
}

/// One history line, e.g. `⬆️ **Ozon** · -3200.00 ₽`
pub fn format_transaction(tx: &Transaction, currency: &str) -> String {
    let arrow = match tx.direction {
        Direction::Incoming => "⬇️",
        Direction::Outgoing => "⬆️",
    };
    format!(
        "{} **{}** · `{} {}`\n└─ {} · {}\n",
        arrow,
        clip(&tx.counterparty, COUNTERPARTY_DISPLAY_LIMIT),
        tx.signed_amount(),
        currency,
        tx.date,
        tx.status.label()
    )
}

pub fn render_history(result: &HistoryResult, currency: &str) -> String {
    result
        .transactions
        .iter()
        .map(|tx| format_transaction(tx, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn create_history_embed(result: &HistoryResult, currency: &str) -> CreateEmbed {
    if result.transactions.is_empty() {
        return CreateEmbed::default()
            .title("📋 Transaction History")
            .description("No transactions yet")
            .color(0xffa500);
    }

    CreateEmbed::default()
        .title("📋 Transaction History")
        .description(render_history(result, currency))
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{} ({} total transactions)",
            result.page, result.total_pages, result.total_count
        )))
        .color(0x00ff00)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ledger;
    use crate::utils::notice::EMBED_DESCRIPTION_LIMIT;
    use crate::utils::Money;

    #[test]
    fn test_format_incoming_and_outgoing() {
        let ledger = Ledger::seeded("Alexey Ivanov");
        let txs = ledger.transactions();

        assert_eq!(
            format_transaction(&txs[0], "₽"),
            "⬇️ **Maria Petrova** · `+15000.00 ₽`\n└─ 2025-10-26 14:30 · Completed\n"
        );
        assert!(format_transaction(&txs[1], "₽").contains("`-3200.00 ₽`"));
    }

    #[test]
    fn test_history_result_from_page() {
        let ledger = Ledger::seeded("Alexey Ivanov");
        let result = HistoryResult::from(ledger.history_page(1).unwrap());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_count, 4);
        assert_eq!(result.transactions[3].counterparty, "Salary");
    }

    #[test]
    fn test_full_page_of_long_recipients_fits_in_embed() {
        let mut ledger = Ledger::seeded("Alexey Ivanov");
        let recipient = "Ж".repeat(2000);
        for _ in 0..10 {
            ledger
                .record_debit("1", &recipient, Money::new(92_233_720_368_547, 0))
                .unwrap();
        }

        let result = HistoryResult::from(ledger.history_page(1).unwrap());
        assert_eq!(result.transactions.len(), 10);

        let rendered = render_history(&result, "₽");
        assert!(rendered.chars().count() <= EMBED_DESCRIPTION_LIMIT, "{}", rendered.len());
        assert!(rendered.contains('…'));
    }
}
