use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{settings, stats_service};
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let currency = settings(ctx).await?.currency.clone();
    let result = stats_service::get_stats(ctx, msg.author.id.get()).await?;
    super::send_embed(ctx, msg, stats_service::create_stats_embed(&result, &currency)).await
}
