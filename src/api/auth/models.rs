use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every POST to the authentication endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthApiRequest {
    pub action: AuthAction,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    Login,
    Register,
}

/// User object returned on success
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body, used for both success and error statuses
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthApiResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<RemoteUser>,
    pub error: Option<String>,
}

/// Errors from talking to the authentication endpoint
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthApiError {
    /// 4xx: the server rejected the credentials or the form
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// 2xx with `success: false` or no user object
    #[error("{0}")]
    Unsuccessful(String),
    /// 5xx
    #[error("Authentication server error ({0}): {1}")]
    ServerError(u16, String),
    /// Connection refused, DNS failure, reset...
    #[error("Could not reach the authentication server: {0}")]
    RequestError(String),
    #[error("Unexpected response from the authentication server: {0}")]
    DeserializationError(String),
}
