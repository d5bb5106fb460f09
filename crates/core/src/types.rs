//! Core types used throughout PostAPI Studio
//!
//! Identifiers issued by the backend are opaque strings; this layer never
//! parses or generates them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Type alias for project identifiers
pub type ProjectId = String;

/// Type alias for resource identifiers
pub type ResourceId = String;

/// Type alias for the opaque user identifier sent to the backend
pub type UserId = String;

// ============================================================================
// Theme
// ============================================================================

/// Theme preference as stored in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the system preference
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ThemePreference {
    /// Resolve the preference into a concrete theme
    ///
    /// `system_prefers_dark` is only consulted for [`ThemePreference::System`].
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if system_prefers_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "auto" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!(
                "unknown theme '{}' (expected system, light or dark)",
                other
            )),
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::System => write!(f, "system"),
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
        }
    }
}

/// A resolved theme, decided once at startup and passed down explicitly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

// ============================================================================
// Tests
// ============================================================================
