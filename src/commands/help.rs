use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::send_embed;
use crate::utils::BankError;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), BankError> {
    let embed = CreateEmbed::default()
        .title("📖 NeoBank Commands Help")
        .description("**NeoBank** - a next-generation bank, right in your chat.\nDM the bot to keep your credentials private.")
        .color(0x00b0f4)
        .field(
            "🎯 General",
            "`$ping` - Check bot latency\n`$help` - Show this help message",
            false,
        )
        .field(
            "🔑 Account",
            "`$login <username> <password>` - Sign in\n`$view register` / `$view login` - Switch form\n`$register <username> <email> <password> <full name>` - Create account\n`$profile` - Who am I\n`$logout` - Sign out",
            false,
        )
        .field(
            "💳 Cards",
            "`$stats` - Dashboard overview\n`$cards [page]` - List your cards\n`$issue` - Issue a virtual card\n`$select <card id>` - Card used for transfers",
            false,
        )
        .field(
            "💸 Transfers",
            "`$transfer <card number or phone> <amount>` - Send money\n`$history [page]` - Transaction history",
            false,
        );

    send_embed(ctx, msg, embed).await
}
