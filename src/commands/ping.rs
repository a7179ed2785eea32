use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::time::Instant;

use crate::services::ping_service;
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let start_time = Instant::now();

    let response = msg
        .channel_id
        .send_message(ctx, CreateMessage::default().content("📊 Calculating metrics..."))
        .await?;

    let metrics = ping_service::get_ping_metrics(ctx, start_time).await?;
    let embed = ping_service::create_ping_embed(&metrics);

    response.delete(ctx).await?;
    super::send_embed(ctx, msg, embed).await
}
