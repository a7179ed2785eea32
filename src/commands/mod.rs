pub mod help;
pub mod ping;
pub mod view;
pub mod login;
pub mod register;
pub mod logout;
pub mod profile;
pub mod stats;
pub mod cards;
pub mod issue;
pub mod select;
pub mod transfer;
pub mod history;

use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

use crate::utils::{notice, BankError};

pub const PREFIX: &str = "$";

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let parts: Vec<&str> = msg.content.split_whitespace().collect();
    let Some(command) = parts.first().and_then(|c| c.strip_prefix(PREFIX)) else {
        return;
    };
    let command = command.to_lowercase();
    let args = &parts[1..];

    let span = tracing::info_span!(
        "command",
        cmd = %command,
        user = msg.author.id.get(),
        interaction = %Uuid::new_v4()
    );

    async {
        debug!("Dispatching ${} with {} arg(s)", command, args.len());

        let result = match command.as_str() {
            "help" => help::execute(ctx, msg).await,
            "ping" => ping::execute(ctx, msg).await,
            "view" => view::execute(ctx, msg, args).await,
            "login" | "signin" => login::execute(ctx, msg, args).await,
            "register" | "signup" => register::execute(ctx, msg, args).await,
            "logout" | "signout" => logout::execute(ctx, msg).await,
            "profile" | "me" => profile::execute(ctx, msg).await,
            "stats" | "dashboard" => stats::execute(ctx, msg).await,
            "cards" => cards::execute(ctx, msg, args).await,
            "issue" => issue::execute(ctx, msg).await,
            "select" => select::execute(ctx, msg, args).await,
            "transfer" | "send" => transfer::execute(ctx, msg, args).await,
            "history" | "tr" => history::execute(ctx, msg, args).await,
            _ => return,
        };

        if let Err(e) = result {
            report_error(ctx, msg, &command, &e).await;
        }
    }
    .instrument(span)
    .await;
}

/// Show a failed command to the user as a notification embed.
async fn report_error(ctx: &Context, msg: &Message, command: &str, error: &BankError) {
    match error {
        BankError::Discord(_) | BankError::Internal(_) | BankError::Network(_) => {
            warn!("Error executing ${}: {}", command, error)
        }
        _ => debug!("${} rejected: {}", command, error),
    }

    if let Err(e) = msg
        .channel_id
        .send_message(ctx, CreateMessage::default().embed(notice::failure(error)))
        .await
    {
        warn!("Failed to send error notice for ${}: {}", command, e);
    }
}

/// Remove a message carrying credentials from a guild channel.
pub(crate) async fn hide_credentials(ctx: &Context, msg: &Message) {
    if msg.guild_id.is_none() {
        return;
    }
    if let Err(e) = msg.delete(ctx).await {
        debug!("Could not delete credentials message {}: {}", msg.id, e);
    }
}

/// Parse a 1-based page argument written `2` or `p2`.
pub(crate) fn parse_page(arg: &str, usage: &str) -> Result<usize, BankError> {
    let lower = arg.to_lowercase();
    lower
        .strip_prefix('p')
        .unwrap_or(lower.as_str())
        .parse::<usize>()
        .map_err(|_| BankError::Validation(format!("Invalid page number. Use: {}", usage)))
}

/// Send `embed` as a reply in the command's channel.
pub(crate) async fn send_embed(
    ctx: &Context,
    msg: &Message,
    embed: serenity::builder::CreateEmbed,
) -> Result<(), BankError> {
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed))
        .await?;
    Ok(())
}
