use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{card_service, settings};
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    let card_id = args
        .first()
        .ok_or_else(|| BankError::Validation("Usage: `$select <card id>` (see `$cards`)".to_string()))?;

    let currency = settings(ctx).await?.currency.clone();
    let card = card_service::select_card(ctx, msg.author.id.get(), card_id).await?;
    super::send_embed(ctx, msg, card_service::create_select_embed(&card, &currency)).await
}
