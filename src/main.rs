use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod state;
mod utils;

use config::{AuthMode, Config};
use services::auth_service::{Authenticator, MockAuthenticator, RemoteAuthenticator};
use state::SessionStore;

struct Handler;

struct BotData;

impl TypeMapKey for BotData {
    type Value = Instant;
}

struct Sessions;

impl TypeMapKey for Sessions {
    type Value = Arc<SessionStore>;
}

struct AuthBackend;

impl TypeMapKey for AuthBackend {
    type Value = Arc<dyn Authenticator>;
}

struct Settings;

impl TypeMapKey for Settings {
    type Value = Arc<Config>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        debug!("Checking Discord rate limit status...");
        match ctx.http.get_current_user().await {
            Ok(_) => info!("No rate limit detected - Bot is fully ready!"),
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("429") || error_msg.contains("rate limit") || error_msg.contains("Ratelimited") {
                    warn!("Bot is being rate limited by Discord! Error: {}", error_msg);
                } else {
                    warn!("Failed to check rate limit status: {}", error_msg);
                }
            }
        }
    }
}

fn build_authenticator(mode: &AuthMode) -> Arc<dyn Authenticator> {
    match mode {
        AuthMode::Mock => Arc::new(MockAuthenticator),
        AuthMode::Remote { url } => Arc::new(RemoteAuthenticator::new(api::auth::AuthApiClient::new(url.clone()))),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("neobank=debug,serenity=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🏦 Starting NeoBank bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    let authenticator = build_authenticator(&config.auth_mode);
    match &config.auth_mode {
        AuthMode::Mock => info!("Authentication: local mock (demo credentials)"),
        AuthMode::Remote { url } => info!("Authentication: remote endpoint {}", url),
    }

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<BotData>(Instant::now());
        data.insert::<Sessions>(Arc::new(SessionStore::new()));
        data.insert::<AuthBackend>(authenticator);
        data.insert::<Settings>(Arc::new(config));
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
