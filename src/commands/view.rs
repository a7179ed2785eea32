use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::send_embed;
use crate::services::{session_service, session_store};
use crate::state::SessionView;
use crate::utils::BankError;

/// `$view [login|register]` - switch between the sign-in forms, or show the current one.
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    let user_id = msg.author.id.get();

    let view = match args.first() {
        None => session_store(ctx).await?.view_of(user_id).await,
        Some(arg) => {
            let target = SessionView::parse(arg).ok_or_else(|| {
                BankError::Validation(format!("Unknown view '{}'. Use `login` or `register`.", arg))
            })?;
            session_service::switch_view(ctx, user_id, target).await?;
            target
        }
    };

    if view == SessionView::Dashboard {
        return super::stats::execute(ctx, msg).await;
    }
    send_embed(ctx, msg, session_service::create_view_embed(view)).await
}
