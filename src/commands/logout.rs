use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::session_service;
use crate::utils::{notice, BankError};

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let user = session_service::sign_out(ctx, msg.author.id.get()).await?;
    let embed = notice::success(
        "👋 Signed out",
        format!("See you soon, {}! Your session data has been cleared.", user.display_name),
    );
    super::send_embed(ctx, msg, embed).await
}
