use serenity::async_trait;
use tracing::{debug, info, warn};

use crate::api::auth::{AuthApiClient, AuthApiError, RemoteUser};
use crate::models::{Role, SessionUser};
use crate::utils::BankError;

/// Username and password that open an administrator session in mock mode.
pub const MOCK_ADMIN_USERNAME: &str = "XeX";
pub const MOCK_ADMIN_PASSWORD: &str = "18181818";

/// A submitted login or registration form.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
        full_name: String,
    },
}

impl AuthRequest {
    pub fn username(&self) -> &str {
        match self {
            AuthRequest::Login { username, .. } | AuthRequest::Register { username, .. } => username,
        }
    }
}

/// Turns credentials into a signed-in user.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &AuthRequest) -> Result<SessionUser, BankError>;

    /// Short name shown by `$ping`
    fn name(&self) -> &'static str;
}

/// Local authenticator: no network, one hardcoded administrator.
#[derive(Debug, Default, Clone)]
pub struct MockAuthenticator;

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<SessionUser, BankError> {
        match request {
            AuthRequest::Login { username, password } => {
                if username.is_empty() || password.is_empty() {
                    return Err(BankError::Auth("Username and password are required".to_string()));
                }

                let role = if username == MOCK_ADMIN_USERNAME && password == MOCK_ADMIN_PASSWORD {
                    info!("Administrator login for {}", username);
                    Role::Administrator
                } else {
                    Role::Standard
                };

                Ok(SessionUser {
                    id: None,
                    username: username.clone(),
                    display_name: username.clone(),
                    role,
                })
            }
            AuthRequest::Register { username, full_name, .. } => {
                debug!("Mock registration for {}", username);
                let display_name = if full_name.trim().is_empty() {
                    username.clone()
                } else {
                    full_name.trim().to_string()
                };

                Ok(SessionUser {
                    id: None,
                    username: username.clone(),
                    display_name,
                    role: Role::Standard,
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Authenticator backed by the remote login/registration endpoint.
pub struct RemoteAuthenticator {
    client: AuthApiClient,
}

impl RemoteAuthenticator {
    pub fn new(client: AuthApiClient) -> Self {
        Self { client }
    }
}

impl From<AuthApiError> for BankError {
    fn from(err: AuthApiError) -> Self {
        match err {
            AuthApiError::Rejected { .. } | AuthApiError::Unsuccessful(_) => BankError::Auth(err.to_string()),
            AuthApiError::ServerError(..)
            | AuthApiError::RequestError(_)
            | AuthApiError::DeserializationError(_) => BankError::Network(err.to_string()),
        }
    }
}

fn to_session_user(user: RemoteUser) -> SessionUser {
    let display_name = user
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(user.username.as_str())
        .to_string();

    SessionUser {
        id: Some(user.id),
        display_name,
        role: if user.is_admin { Role::Administrator } else { Role::Standard },
        username: user.username,
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<SessionUser, BankError> {
        let result = match request {
            AuthRequest::Login { username, password } => self.client.login(username, password).await,
            AuthRequest::Register {
                username,
                email,
                password,
                full_name,
            } => self.client.register(username, email, password, full_name).await,
        };

        match result {
            Ok(user) => {
                info!("Remote authentication succeeded for {} (id {})", user.username, user.id);
                Ok(to_session_user(user))
            }
            Err(e) => {
                warn!("Remote authentication failed for {}: {}", request.username(), e);
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
