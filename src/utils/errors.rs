use thiserror::Error;

/// Every failure a banking command can surface to the user.
///
/// All variants are caught by the command dispatcher and rendered as a
/// notification embed, so the `Display` text is what the user reads.
#[derive(Debug, Error)]
pub enum BankError {
    /// A form field was missing or malformed. Raised before any state change.
    #[error("{0}")]
    Validation(String),
    /// Credentials were rejected by the authenticator.
    #[error("{0}")]
    Auth(String),
    /// The authentication endpoint could not be reached or answered garbage.
    #[error("{0}")]
    Network(String),
    #[error("You are not signed in. Use `$login <username> <password>` first.")]
    NotSignedIn,
    /// The command is not available from the session's current view.
    #[error("{0}")]
    InvalidView(String),
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
    #[error("{0}")]
    Internal(String),
}

impl BankError {
    /// Title of the notification embed shown for this error.
    pub fn title(&self) -> &'static str {
        match self {
            BankError::Validation(_) => "⚠️ Check the form",
            BankError::Auth(_) => "🔒 Sign-in failed",
            BankError::Network(_) => "📡 Network Error",
            BankError::NotSignedIn => "🔒 Not Signed In",
            BankError::InvalidView(_) => "↩️ Wrong Screen",
            BankError::Discord(_) | BankError::Internal(_) => "Command Error",
        }
    }
}

/// Strip reqwest's verbose prefixes so only the meaningful reason reaches the user.
///
/// "error sending request for url (http://x/): error trying to connect: tcp connect error: Connection refused"
/// becomes "Connection refused".
pub fn extract_clean_error(error_msg: &str) -> String {
    match error_msg.rfind(": ") {
        Some(last_colon) if error_msg.contains("error sending request") => {
            error_msg[last_colon + 2..].trim().to_string()
        }
        _ => error_msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_error_strips_request_prefix() {
        let raw = "error sending request for url (http://127.0.0.1:1/): error trying to connect: Connection refused";
        assert_eq!(extract_clean_error(raw), "Connection refused");
    }

    #[test]
    fn test_clean_error_keeps_plain_messages() {
        assert_eq!(extract_clean_error("Invalid credentials"), "Invalid credentials");
        assert_eq!(extract_clean_error("a: b"), "a: b");
    }

    #[test]
    fn test_titles_differ_by_kind() {
        assert_ne!(
            BankError::Validation("x".into()).title(),
            BankError::Auth("x".into()).title()
        );
        assert_eq!(BankError::Network("x".into()).title(), "📡 Network Error");
    }
}
