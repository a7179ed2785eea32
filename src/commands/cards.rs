use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::parse_page;
use crate::services::{card_service, settings};
use crate::utils::BankError;

/// `$cards [page]`
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    let page = match args.first() {
        None => 1,
        Some(arg) => parse_page(arg, "`$cards` or `$cards 2`")?,
    };

    let currency = settings(ctx).await?.currency.clone();
    let result = card_service::list_cards(ctx, msg.author.id.get(), page).await?;
    super::send_embed(ctx, msg, card_service::create_cards_embed(&result, &currency)).await
}
