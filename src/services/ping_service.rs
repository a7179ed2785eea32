use serenity::prelude::*;
use std::time::Instant;

use crate::services::{authenticator, session_store};
use crate::utils::BankError;

pub struct PingMetrics {
    pub response_roundtrip: u64,
    pub uptime: String,
    pub auth_backend: &'static str,
    pub signed_in_sessions: usize,
}

pub fn format_uptime(secs: u64) -> String {
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

pub async fn get_ping_metrics(ctx: &Context, start_time: Instant) -> Result<PingMetrics, BankError> {
    let response_roundtrip = start_time.elapsed().as_millis() as u64;

    let uptime = {
        let data = ctx.data.read().await;
        match data.get::<crate::BotData>() {
            Some(&bot_start_time) => format_uptime(bot_start_time.elapsed().as_secs()),
            None => "Unknown".to_string(),
        }
    };

    let auth_backend = authenticator(ctx).await?.name();
    let signed_in_sessions = session_store(ctx).await?.active_sessions().await;

    Ok(PingMetrics {
        response_roundtrip,
        uptime,
        auth_backend,
        signed_in_sessions,
    })
}

pub fn create_ping_embed(metrics: &PingMetrics) -> serenity::builder::CreateEmbed {
    serenity::builder::CreateEmbed::default()
        .title("Pong! 🏓")
        .field("Response Roundtrip", format!("{}ms", metrics.response_roundtrip), true)
        .field("Uptime", &metrics.uptime, true)
        .field("Auth", metrics.auth_backend, true)
        .field("Signed-in sessions", metrics.signed_in_sessions.to_string(), true)
        .color(0x00b0f4)
}
