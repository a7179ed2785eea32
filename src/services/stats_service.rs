use serenity::builder::CreateEmbed;
use serenity::prelude::Context;

use crate::models::{LedgerStats, SessionUser};
use crate::services::session_store;
use crate::utils::{notice, BankError};

pub struct StatsResult {
    pub user: SessionUser,
    pub stats: LedgerStats,
}

/// Dashboard overview, recomputed from the ledger on every call.
pub async fn get_stats(ctx: &Context, user_id: u64) -> Result<StatsResult, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| {
            s.dashboard().map(|d| StatsResult {
                user: d.user.clone(),
                stats: d.ledger.stats(),
            })
        })
        .await
}

pub fn create_stats_embed(result: &StatsResult, currency: &str) -> CreateEmbed {
    let stats = &result.stats;
    let embed = CreateEmbed::default()
        .title("🏦 NeoBank Dashboard")
        .field("Total balance", format!("**{} {}**", stats.total_balance, currency), false)
        .field(
            "Cards",
            format!("{}\n{} virtual", stats.card_count, stats.virtual_card_count),
            true,
        )
        .field("Transactions", format!("{}\nAll completed", stats.transaction_count), true)
        .color(0xa855f7);

    notice::with_user_footer(embed, &result.user.display_name, result.user.is_admin())
}
