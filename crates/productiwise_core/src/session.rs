//! Login gate and top-level navigation.
//!
//! # Responsibility
//! - Track whether the demo user is signed in and which screen is active.
//!
//! # Invariants
//! - Credentials are checked against one hardcoded demo account; this is a
//!   presentation gate, not authentication.
//! - Logging out always returns navigation to `View::Dashboard`.
//! - Navigation is rejected while signed out.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEMO_EMAIL: &str = "alex.johnson@example.com";
pub const DEMO_PASSWORD: &str = "productiwise";

/// Top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Habits,
    Community,
    Calendar,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The demo account accepted by `Session::login`.
    pub fn demo() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidCredentials,
    NotLoggedIn,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::NotLoggedIn => write!(f, "not logged in"),
        }
    }
}

impl Error for SessionError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    current_view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Signs in when the credentials match the demo account.
    ///
    /// Email comparison ignores case and surrounding whitespace.
    pub fn login(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        let email_ok = credentials.email.trim().eq_ignore_ascii_case(DEMO_EMAIL);
        if !email_ok || credentials.password != DEMO_PASSWORD {
            warn!("event=login module=session status=error reason=invalid_credentials");
            return Err(SessionError::InvalidCredentials);
        }
        self.logged_in = true;
        info!("event=login module=session status=ok");
        Ok(())
    }

    /// Signs out and resets navigation to the dashboard.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.current_view = View::Dashboard;
        info!("event=logout module=session status=ok");
    }

    /// Switches the visible page.
    ///
    /// # Contract
    /// - Fails with `NotLoggedIn` before a successful login.
    pub fn navigate(&mut self, view: View) -> Result<(), SessionError> {
        if !self.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        self.current_view = view;
        Ok(())
    }
}
