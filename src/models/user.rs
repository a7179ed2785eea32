//! Authenticated user models

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Standard,
}

/// The user object an authenticator returns on successful login or registration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    /// Id assigned by the remote endpoint; the mock authenticator has none
    pub id: Option<i64>,
    pub username: String,
    /// Name printed on cards and in the dashboard header
    pub display_name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}
