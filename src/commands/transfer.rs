use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::send_embed;
use crate::services::{settings, transfer_service};
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), BankError> {
    if args.is_empty() {
        let help_embed = CreateEmbed::default()
            .title("💸 Transfer Command")
            .description("Send money to a card or phone number")
            .field("Usage", "`$transfer <recipient> <amount>`", false)
            .field(
                "Examples",
                "`$transfer 4276 1234 5678 9012 1500`\n\
                 `$transfer +7 999 123-45-67 250.50`",
                false,
            )
            .field(
                "Notes",
                "• The last word is the amount, everything before it is the recipient\n\
                 • Money is debited from your selected card (`$cards`, `$select <id>`)",
                false,
            )
            .color(0x00ff00);
        return send_embed(ctx, msg, help_embed).await;
    }

    let (recipient, amount) = split_recipient_amount(args);

    let currency = settings(ctx).await?.currency.clone();
    let result = transfer_service::execute_transfer(ctx, msg.author.id.get(), &recipient, amount).await?;
    send_embed(ctx, msg, transfer_service::create_transfer_embed(&result, &currency)).await
}

/// Last argument is the amount, the rest joined is the recipient.
fn split_recipient_amount<'a>(args: &[&'a str]) -> (String, &'a str) {
    match args.split_last() {
        Some((amount, recipient)) => (recipient.join(" "), amount),
        None => (String::new(), ""),
    }
}
