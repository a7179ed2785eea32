//! Runtime configuration read from the environment (after `.env` is loaded).

use thiserror::Error;

pub const DEFAULT_CURRENCY: &str = "₽";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid NEOBANK_AUTH_MODE '{0}' (expected 'mock' or 'remote')")]
    InvalidAuthMode(String),
}

/// Which authenticator backs `$login` and `$register`.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// Hardcoded admin credential, everything else accepted locally.
    Mock,
    /// POST credentials to an external authentication endpoint.
    Remote { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub auth_mode: AuthMode,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = non_empty("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let auth_mode = match non_empty("NEOBANK_AUTH_MODE")
            .map(|m| m.trim().to_lowercase())
            .as_deref()
        {
            None | Some("mock") => AuthMode::Mock,
            Some("remote") => AuthMode::Remote {
                url: non_empty("NEOBANK_AUTH_URL").ok_or(ConfigError::Missing("NEOBANK_AUTH_URL"))?,
            },
            Some(other) => return Err(ConfigError::InvalidAuthMode(other.to_string())),
        };

        let currency = non_empty("NEOBANK_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Config {
            discord_token,
            auth_mode,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_mock_mode() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();
        assert_eq!(config.auth_mode, AuthMode::Mock);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_remote_mode_requires_url() {
        let err = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("NEOBANK_AUTH_MODE", "remote"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("NEOBANK_AUTH_URL"));

        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("NEOBANK_AUTH_MODE", "Remote"),
            ("NEOBANK_AUTH_URL", "https://auth.example.com/"),
        ]))
        .unwrap();
        assert_eq!(
            config.auth_mode,
            AuthMode::Remote { url: "https://auth.example.com/".to_string() }
        );
    }

    #[test]
    fn test_missing_token_and_bad_mode() {
        assert_eq!(
            Config::from_lookup(lookup(&[])).unwrap_err(),
            ConfigError::Missing("DISCORD_TOKEN")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("NEOBANK_AUTH_MODE", "ldap")]))
                .unwrap_err(),
            ConfigError::InvalidAuthMode("ldap".to_string())
        );
    }

    #[test]
    fn test_custom_currency() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("NEOBANK_CURRENCY", "USD"),
        ]))
        .unwrap();
        assert_eq!(config.currency, "USD");
    }
}
