use serenity::builder::CreateEmbed;
use serenity::prelude::Context;
use tracing::info;

use crate::models::{Card, Transaction};
use crate::services::session_store;
use crate::state::parse_amount;
use crate::utils::{notice, BankError};

pub struct TransferResult {
    pub transaction: Transaction,
    /// Card the amount was debited from, after the debit
    pub card: Option<Card>,
}

/// Record an outgoing transfer from the user's selected card.
pub async fn execute_transfer(
    ctx: &Context,
    user_id: u64,
    recipient: &str,
    amount: &str,
) -> Result<TransferResult, BankError> {
    // Parse before taking the session lock.
    let amount = parse_amount(amount)?;

    let store = session_store(ctx).await?;
    let result = store
        .with_session(user_id, |s| {
            let dashboard = s.dashboard_mut()?;
            let transaction = dashboard.transfer(recipient, amount)?;
            Ok::<_, BankError>(TransferResult {
                card: dashboard.ledger.card(&dashboard.selected_card).cloned(),
                transaction,
            })
        })
        .await?;

    info!(
        "User {} sent {} to {} (tx {})",
        user_id, result.transaction.amount, result.transaction.counterparty, result.transaction.id
    );
    Ok(result)
}

pub fn create_transfer_embed(result: &TransferResult, currency: &str) -> CreateEmbed {
    let tx = &result.transaction;
    let mut embed = notice::success(
        "✅ Transfer complete!",
        format!(
            "{} {} sent to **{}**",
            tx.amount,
            currency,
            notice::clip(&tx.counterparty, notice::COUNTERPARTY_DISPLAY_LIMIT)
        ),
    )
    .field("Date", &tx.date, true)
    .field("Status", tx.status.label(), true);

    if let Some(card) = &result.card {
        embed = embed.field(
            "Debited from",
            format!("{}\nBalance: {} {}", card.number, card.balance, currency),
            false,
        );
    }

    embed.footer(serenity::builder::CreateEmbedFooter::new(format!("ID: {}", tx.id)))
}
