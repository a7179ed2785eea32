use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::{hide_credentials, send_embed};
use crate::services::auth_service::AuthRequest;
use crate::services::session_service;
use crate::state::SessionView;
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    if args.is_empty() {
        return send_embed(ctx, msg, session_service::create_view_embed(SessionView::Login)).await;
    }

    hide_credentials(ctx, msg).await;

    let request = AuthRequest::Login {
        username: args[0].to_string(),
        password: args.get(1).copied().unwrap_or_default().to_string(),
    };

    let user = session_service::submit(ctx, msg.author.id.get(), request).await?;
    send_embed(ctx, msg, session_service::create_welcome_embed(&user, false)).await
}
