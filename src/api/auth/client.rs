use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::models::{AuthAction, AuthApiError, AuthApiRequest, AuthApiResponse, RemoteUser};
use crate::utils::extract_clean_error;

/// Client for the remote login/registration endpoint.
///
/// One POST per call. No retries and no timeout: a hung server hangs the
/// command that triggered it.
pub struct AuthApiClient {
    http_client: HttpClient,
    url: String,
}

impl AuthApiClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            url: url.into(),
        }
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Turn a status code and raw body into the user object or an error.
    pub(crate) fn interpret_response(status: StatusCode, body: &str) -> Result<RemoteUser, AuthApiError> {
        let status_code = status.as_u16();
        let parsed = serde_json::from_str::<AuthApiResponse>(body);

        match status_code {
            200..=299 => {
                let response = parsed
                    .map_err(|e| AuthApiError::DeserializationError(e.to_string()))?;
                match (response.success, response.user) {
                    (true, Some(user)) => Ok(user),
                    _ => Err(AuthApiError::Unsuccessful(
                        response.error.unwrap_or_else(|| "Authentication failed".to_string()),
                    )),
                }
            }
            400..=499 => {
                let message = parsed
                    .ok()
                    .and_then(|r| r.error)
                    .unwrap_or_else(|| match status_code {
                        401 => "Invalid credentials".to_string(),
                        _ => body.trim().to_string(),
                    });
                Err(AuthApiError::Rejected { status: status_code, message })
            }
            500..=599 => {
                warn!("Auth server error {}: {}", status_code, body);
                let message = parsed.ok().and_then(|r| r.error).unwrap_or_else(|| body.to_string());
                Err(AuthApiError::ServerError(status_code, message))
            }
            _ => Err(AuthApiError::DeserializationError(format!(
                "unexpected status {}",
                status_code
            ))),
        }
    }

    async fn post(&self, request: &AuthApiRequest) -> Result<RemoteUser, AuthApiError> {
        debug!("POST {} action={:?} user={}", self.url, request.action, request.username);

        let response = self
            .http_client
            .post(&self.url)
            .headers(Self::create_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| AuthApiError::RequestError(extract_clean_error(&e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthApiError::RequestError(format!("Failed to read response: {}", e)))?;

        Self::interpret_response(status, &body)
    }

    /// `{"action": "login", username, password}`
    pub async fn login(&self, username: &str, password: &str) -> Result<RemoteUser, AuthApiError> {
        self.post(&AuthApiRequest {
            action: AuthAction::Login,
            username: username.to_string(),
            password: password.to_string(),
            email: None,
            full_name: None,
        })
        .await
    }

    /// `{"action": "register", username, password, email, full_name}`
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<RemoteUser, AuthApiError> {
        self.post(&AuthApiRequest {
            action: AuthAction::Register,
            username: username.to_string(),
            password: password.to_string(),
            email: Some(email.to_string()),
            full_name: Some(full_name.to_string()),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let request = AuthApiRequest {
            action: AuthAction::Login,
            username: "bob".into(),
            password: "pw".into(),
            email: None,
            full_name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"action": "login", "username": "bob", "password": "pw"}));
    }

    #[test]
    fn test_register_request_includes_optional_fields() {
        let request = AuthApiRequest {
            action: AuthAction::Register,
            username: "bob".into(),
            password: "pw".into(),
            email: Some("bob@example.com".into()),
            full_name: Some("Bob Smith".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "register");
        assert_eq!(json["email"], "bob@example.com");
        assert_eq!(json["full_name"], "Bob Smith");
    }

    #[test]
    fn test_success_response() {
        let body = r#"{"success": true, "user": {"id": 7, "username": "bob", "email": "b@x.io", "full_name": null, "is_admin": true}}"#;
        let user = AuthApiClient::interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_admin);
        assert_eq!(user.full_name, None);
    }

    #[test]
    fn test_rejected_credentials() {
        let err = AuthApiClient::interpret_response(StatusCode::UNAUTHORIZED, r#"{"error": "Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err, AuthApiError::Rejected { status: 401, message: "Invalid credentials".into() });

        let err = AuthApiClient::interpret_response(StatusCode::BAD_REQUEST, r#"{"error": "User already exists"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists");

        let err = AuthApiClient::interpret_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_unsuccessful_and_garbage_bodies() {
        let err = AuthApiClient::interpret_response(StatusCode::OK, r#"{"success": false, "error": "nope"}"#)
            .unwrap_err();
        assert_eq!(err, AuthApiError::Unsuccessful("nope".into()));

        let err = AuthApiClient::interpret_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, AuthApiError::DeserializationError(_)));

        let err = AuthApiClient::interpret_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "Database not configured"}"#)
            .unwrap_err();
        assert_eq!(err, AuthApiError::ServerError(500, "Database not configured".into()));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = AuthApiClient::new("http://127.0.0.1:1/auth");
        let err = client.login("bob", "pw").await.unwrap_err();
        assert!(matches!(err, AuthApiError::RequestError(_)), "{:?}", err);
    }
}
