use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::parse_page;
use crate::services::{history_service, settings};
use crate::utils::BankError;

/// `$history [page]`, page may be written `2` or `p2`
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    let page = match args.first() {
        None => 1,
        Some(arg) => parse_page(arg, "`$history` or `$history p2`")?,
    };

    let currency = settings(ctx).await?.currency.clone();
    let result = history_service::get_history(ctx, msg.author.id.get(), page).await?;
    super::send_embed(ctx, msg, history_service::create_history_embed(&result, &currency)).await
}
