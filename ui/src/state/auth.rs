//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! session-dependent rendering. The token itself lives in `localStorage`
//! (see `util::session`); this state mirrors it reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state: the session token and whether it has been read yet.
///
/// `loading` starts `true` so server rendering and the first client frame do
/// not trigger a login redirect before storage has been consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    /// State after the stored token has been read.
    pub fn resolved(token: Option<String>) -> Self {
        Self { token, loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// `true` once loading finished without a session.
    pub fn needs_login(&self) -> bool {
        !self.loading && self.token.is_none()
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.loading = false;
    }
}
