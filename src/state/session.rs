use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{SessionUser, Transaction};
use crate::state::Ledger;
use crate::utils::{BankError, Money};

/// Which screen a session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    Login,
    Register,
    Dashboard,
}

impl SessionView {
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "login" | "signin" => Some(SessionView::Login),
            "register" | "signup" => Some(SessionView::Register),
            "dashboard" => Some(SessionView::Dashboard),
            _ => None,
        }
    }
}

/// State behind the dashboard view.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: SessionUser,
    pub ledger: Ledger,
    /// Card the transfer form debits
    pub selected_card: String,
}

impl Dashboard {
    pub fn select_card(&mut self, card_id: &str) -> Result<(), BankError> {
        if self.ledger.card(card_id).is_none() {
            return Err(BankError::Validation(format!("You have no card with id `{}`", card_id)));
        }
        self.selected_card = card_id.to_string();
        Ok(())
    }

    /// Transfer an already parsed amount from the currently selected card.
    pub fn transfer(&mut self, recipient: &str, amount: Money) -> Result<Transaction, BankError> {
        let card_id = self.selected_card.clone();
        self.ledger.record_debit(&card_id, recipient, amount)
    }
}

/// One chat user's session. The ledger only exists while signed in.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Login,
    Register,
    Dashboard(Box<Dashboard>),
}

impl Session {
    pub fn view(&self) -> SessionView {
        match self {
            Session::Login => SessionView::Login,
            Session::Register => SessionView::Register,
            Session::Dashboard(_) => SessionView::Dashboard,
        }
    }

    /// Toggle between the login and registration forms.
    pub fn switch_view(&mut self, target: SessionView) -> Result<(), BankError> {
        match (self.view(), target) {
            (SessionView::Dashboard, _) => Err(BankError::InvalidView(
                "You are already signed in. Use `$logout` first.".to_string(),
            )),
            (_, SessionView::Dashboard) => Err(BankError::InvalidView(
                "Sign in or register to open the dashboard.".to_string(),
            )),
            (_, SessionView::Login) => {
                *self = Session::Login;
                Ok(())
            }
            (_, SessionView::Register) => {
                *self = Session::Register;
                Ok(())
            }
        }
    }

    /// Fail unless the session is on `expected`; used before submitting a form.
    pub fn require_view(&self, expected: SessionView) -> Result<(), BankError> {
        let current = self.view();
        if current == expected {
            return Ok(());
        }

        let hint = match current {
            SessionView::Dashboard => "You are already signed in. Use `$logout` first.",
            SessionView::Login => "You are on the login screen. Use `$view register` to create an account.",
            SessionView::Register => "You are on the registration screen. Use `$view login` to sign in.",
        };
        Err(BankError::InvalidView(hint.to_string()))
    }

    /// Open the dashboard for `user` with a fresh demo ledger.
    pub fn sign_in(&mut self, user: SessionUser) {
        let ledger = Ledger::seeded(user.display_name.clone());
        let selected_card = ledger
            .cards()
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_default();

        *self = Session::Dashboard(Box::new(Dashboard {
            user,
            ledger,
            selected_card,
        }));
    }

    /// Drop the ledger and go back to the login form.
    pub fn sign_out(&mut self) -> Result<SessionUser, BankError> {
        match std::mem::take(self) {
            Session::Dashboard(dashboard) => Ok(dashboard.user),
            other => {
                *self = other;
                Err(BankError::NotSignedIn)
            }
        }
    }

    pub fn dashboard(&self) -> Result<&Dashboard, BankError> {
        match self {
            Session::Dashboard(dashboard) => Ok(&**dashboard),
            _ => Err(BankError::NotSignedIn),
        }
    }

    pub fn dashboard_mut(&mut self) -> Result<&mut Dashboard, BankError> {
        match self {
            Session::Dashboard(dashboard) => Ok(&mut **dashboard),
            _ => Err(BankError::NotSignedIn),
        }
    }
}

/// Sessions keyed by chat user id.
///
/// The lock is only ever held for synchronous work inside `with_session`, so
/// an in-flight authentication call never blocks other users.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<u64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the user's session, creating a fresh one on first use.
    pub async fn with_session<R>(&self, user_id: u64, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(user_id).or_insert_with(|| {
            debug!("Opening new session for user {}", user_id);
            Session::default()
        });
        f(session)
    }

    pub async fn view_of(&self, user_id: u64) -> SessionView {
        self.with_session(user_id, |s| s.view()).await
    }

    pub async fn active_sessions(&self) -> usize {
        let sessions = self.sessions.lock().await;
        let signed_in = sessions
            .values()
            .filter(|s| s.view() == SessionView::Dashboard)
            .count();
        info!("{} session(s), {} signed in", sessions.len(), signed_in);
        signed_in
    }
}
