use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::{hide_credentials, send_embed};
use crate::services::auth_service::AuthRequest;
use crate::services::session_service;
use crate::state::SessionView;
use crate::utils::BankError;

/// `$register <username> <email> <password> <full name...>`
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    if args.is_empty() {
        return send_embed(ctx, msg, session_service::create_view_embed(SessionView::Register)).await;
    }

    hide_credentials(ctx, msg).await;

    let field = |idx: usize| args.get(idx).copied().unwrap_or_default().to_string();
    let request = AuthRequest::Register {
        username: field(0),
        email: field(1),
        password: field(2),
        full_name: args.get(3..).map(|rest| rest.join(" ")).unwrap_or_default(),
    };

    let user = session_service::submit(ctx, msg.author.id.get(), request).await?;
    send_embed(ctx, msg, session_service::create_welcome_embed(&user, true)).await
}
