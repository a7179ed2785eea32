pub mod auth_service;
pub mod session_service;
pub mod card_service;
pub mod transfer_service;
pub mod history_service;
pub mod stats_service;
pub mod ping_service;

use std::sync::Arc;
use serenity::prelude::Context;

use crate::config::Config;
use crate::state::SessionStore;
use crate::utils::BankError;
use auth_service::Authenticator;

/// Session store from the client data
pub async fn session_store(ctx: &Context) -> Result<Arc<SessionStore>, BankError> {
    let data = ctx.data.read().await;
    data.get::<crate::Sessions>()
        .cloned()
        .ok_or_else(|| BankError::Internal("Session store not initialized".to_string()))
}

pub async fn authenticator(ctx: &Context) -> Result<Arc<dyn Authenticator>, BankError> {
    let data = ctx.data.read().await;
    data.get::<crate::AuthBackend>()
        .cloned()
        .ok_or_else(|| BankError::Internal("Authenticator not initialized".to_string()))
}

pub async fn settings(ctx: &Context) -> Result<Arc<Config>, BankError> {
    let data = ctx.data.read().await;
    data.get::<crate::Settings>()
        .cloned()
        .ok_or_else(|| BankError::Internal("Configuration not loaded".to_string()))
}
