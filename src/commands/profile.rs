use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::session_service;
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let user = session_service::current_user(ctx, msg.author.id.get()).await?;
    super::send_embed(ctx, msg, session_service::create_profile_embed(&user)).await
}
