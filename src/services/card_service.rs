use serenity::builder::CreateEmbed;
use serenity::prelude::Context;

use crate::models::{Card, CardColor, SessionUser};
use crate::services::session_store;
use crate::utils::{notice, BankError, Table};

pub struct CardListResult {
    pub user: SessionUser,
    /// Cards on the requested page only
    pub cards: Vec<Card>,
    pub selected_card: String,
    /// Selected card's design tag, even when it sits on another page
    pub selected_color: Option<CardColor>,
    pub page: usize,
    pub total_pages: usize,
    pub card_count: usize,
    pub virtual_card_count: usize,
}

/// Issue a virtual card on the user's ledger.
pub async fn execute_issue(ctx: &Context, user_id: u64) -> Result<Card, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| s.dashboard_mut().map(|d| d.ledger.issue_card()))
        .await
}

pub async fn list_cards(
    ctx: &Context,
    user_id: u64,
    page: usize,
) -> Result<CardListResult, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| {
            let dashboard = s.dashboard()?;
            let cards = dashboard.ledger.cards_page(page)?;
            let stats = dashboard.ledger.stats();
            Ok::<_, BankError>(CardListResult {
                user: dashboard.user.clone(),
                cards: cards.items.to_vec(),
                selected_card: dashboard.selected_card.clone(),
                selected_color: dashboard.ledger.card(&dashboard.selected_card).map(|c| c.color),
                page: cards.page,
                total_pages: cards.total_pages,
                card_count: stats.card_count,
                virtual_card_count: stats.virtual_card_count,
            })
        })
        .await
}

/// Make `card_id` the card transfers are debited from.
pub async fn select_card(ctx: &Context, user_id: u64, card_id: &str) -> Result<Card, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| {
            let dashboard = s.dashboard_mut()?;
            dashboard.select_card(card_id)?;
            dashboard
                .ledger
                .card(card_id)
                .cloned()
                .ok_or_else(|| BankError::Internal(format!("card {} vanished", card_id)))
        })
        .await
}

pub fn render_card_table(cards: &[Card], selected_card: &str, currency: &str) -> String {
    let mut table = Table::new(&["", "ID", "Number", "Type", "Balance"]).align_right(4);
    for card in cards {
        table.add_row(vec![
            if card.id == selected_card { "▶".to_string() } else { String::new() },
            card.id.clone(),
            card.number.clone(),
            card.category.label().to_string(),
            format!("{} {}", card.balance, currency),
        ]);
    }
    table.render()
}

pub fn create_cards_embed(result: &CardListResult, currency: &str) -> CreateEmbed {
    let title = if result.total_pages > 1 {
        format!("💳 My Cards (page {}/{})", result.page, result.total_pages)
    } else {
        "💳 My Cards".to_string()
    };

    let embed = CreateEmbed::default()
        .title(title)
        .description(render_card_table(&result.cards, &result.selected_card, currency))
        .field(
            "Cards",
            format!("{} ({} virtual)", result.card_count, result.virtual_card_count),
            true,
        )
        .field("Transfers from", format!("card `{}`", result.selected_card), true)
        .field(
            "Actions",
            "`$issue` new virtual card · `$select <id>` choose card · `$cards <page>` more",
            false,
        )
        .color(result.selected_color.map(|c| c.hex()).unwrap_or(0x00b0f4));

    notice::with_user_footer(embed, &result.user.display_name, result.user.is_admin())
}

pub fn create_issue_embed(card: &Card, currency: &str) -> CreateEmbed {
    notice::success("💳 Card issued!", "Your virtual card has been created.")
        .field("Number", &card.number, false)
        .field("Card ID", &card.id, true)
        .field("Balance", format!("{} {}", card.balance, currency), true)
        .field("Owner", &card.owner, true)
        .field("Design", card.color.name(), true)
        .color(card.color.hex())
}

pub fn create_select_embed(card: &Card, currency: &str) -> CreateEmbed {
    notice::success(
        "✅ Card selected",
        format!("Transfers will be debited from **{}**", card.number),
    )
    .field("Balance", format!("{} {}", card.balance, currency), true)
}
