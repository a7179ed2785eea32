use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{card_service, settings};
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let currency = settings(ctx).await?.currency.clone();
    let card = card_service::execute_issue(ctx, msg.author.id.get()).await?;
    super::send_embed(ctx, msg, card_service::create_issue_embed(&card, &currency)).await
}
