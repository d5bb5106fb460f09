//! Session
//!
//! The signed-in user is an explicit value created once at the root and
//! handed to whatever needs a backend. Signing out consumes it.

use postapi_client::{ClientConfig, Gateway, GatewayResult};
use postapi_core::{Theme, UserId};

/// The signed-in user and their resolved theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
    theme: Theme,
}

impl Session {
    /// Start a session for `user_id`
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            theme: Theme::default(),
        }
    }

    /// Set the resolved theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Build a gateway that identifies as this user
    pub fn gateway(&self, config: &ClientConfig) -> GatewayResult<Gateway> {
        Gateway::new(config, self.user_id.clone())
    }

    /// End the session
    pub fn sign_out(self) {
        tracing::info!(user_id = %self.user_id, "signed out");
    }
}
