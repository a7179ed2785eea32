use serenity::builder::CreateEmbed;
use serenity::prelude::Context;
use tracing::info;

use crate::models::SessionUser;
use crate::services::auth_service::AuthRequest;
use crate::services::{authenticator, session_store};
use crate::state::SessionView;
use crate::utils::{notice, BankError};

/// Submit the login or registration form for `user_id`.
///
/// The form must match the session's current view. The session lock is
/// released while the authenticator runs.
pub async fn submit(ctx: &Context, user_id: u64, request: AuthRequest) -> Result<SessionUser, BankError> {
    let expected = match request {
        AuthRequest::Login { .. } => SessionView::Login,
        AuthRequest::Register { .. } => SessionView::Register,
    };

    let store = session_store(ctx).await?;
    store.with_session(user_id, |s| s.require_view(expected)).await?;

    let auth = authenticator(ctx).await?;
    let user = auth.authenticate(&request).await?;

    store
        .with_session(user_id, |s| {
            // Another command may have signed this user in while we waited.
            s.require_view(expected)?;
            s.sign_in(user.clone());
            Ok::<_, BankError>(())
        })
        .await?;

    info!("User {} signed in as {} ({:?})", user_id, user.username, user.role);
    Ok(user)
}

pub async fn switch_view(ctx: &Context, user_id: u64, target: SessionView) -> Result<(), BankError> {
    let store = session_store(ctx).await?;
    store.with_session(user_id, |s| s.switch_view(target)).await
}

pub async fn sign_out(ctx: &Context, user_id: u64) -> Result<SessionUser, BankError> {
    let store = session_store(ctx).await?;
    let user = store.with_session(user_id, |s| s.sign_out()).await?;
    info!("User {} ({}) signed out", user_id, user.username);
    Ok(user)
}

pub async fn current_user(ctx: &Context, user_id: u64) -> Result<SessionUser, BankError> {
    let store = session_store(ctx).await?;
    store
        .with_session(user_id, |s| s.dashboard().map(|d| d.user.clone()))
        .await
}

pub fn create_welcome_embed(user: &SessionUser, registered: bool) -> CreateEmbed {
    let (title, description) = match (registered, user.is_admin()) {
        (true, _) => ("🎉 Registration complete!", "Your account has been created.".to_string()),
        (false, true) => ("👑 Welcome, Administrator!", "You are signed in with administrator rights.".to_string()),
        (false, false) => ("👋 Welcome!", format!("You are signed in as **{}**.", user.display_name)),
    };

    notice::success(title, description)
        .field("Next", "`$stats` overview · `$cards` your cards · `$transfer` send money · `$history`", false)
}

pub fn create_view_embed(view: SessionView) -> CreateEmbed {
    let (title, usage) = match view {
        SessionView::Register => (
            "📝 Create an account",
            "`$register <username> <email> <password> <full name>`\nAlready have an account? `$view login`",
        ),
        _ => (
            "🔑 Sign in",
            "`$login <username or email> <password>`\nNo account? `$view register`",
        ),
    };

    CreateEmbed::default()
        .title(title)
        .description(usage)
        .color(0xa855f7)
}

pub fn create_profile_embed(user: &SessionUser) -> CreateEmbed {
    let role = if user.is_admin() { "👑 Administrator" } else { "Standard" };
    let mut embed = CreateEmbed::default()
        .title("👤 Profile")
        .field("Name", &user.display_name, true)
        .field("Username", &user.username, true)
        .field("Role", role, true)
        .color(0x00b0f4);

    if let Some(id) = user.id {
        embed = embed.field("Account ID", id.to_string(), true);
    }
    embed
}
