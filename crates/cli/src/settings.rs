//! Layered settings
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config` or `$POSTAPI_CONFIG`)
//! 3. `.env` and the process environment (`POSTAPI_*`)
//! 4. command-line flags

use crate::cli::GlobalArgs;
use postapi_app::Session;
use postapi_client::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use postapi_core::{PostApiError, PostApiResult, Theme, ThemePreference};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const ENV_CONFIG: &str = "POSTAPI_CONFIG";
pub const ENV_API_BASE_URL: &str = "POSTAPI_API_BASE_URL";
pub const ENV_USER_ID: &str = "POSTAPI_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "POSTAPI_TIMEOUT_SECS";
pub const ENV_THEME: &str = "POSTAPI_THEME";

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub user_id: Option<String>,
    pub timeout_secs: u64,
    pub theme: ThemePreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: ThemePreference::System,
        }
    }
}

impl Settings {
    /// Resolve settings from every source
    pub fn load(args: &GlobalArgs) -> PostApiResult<Self> {
        dotenvy::dotenv().ok();

        let mut settings = Settings::default();

        let file = args
            .config
            .clone()
            .or_else(|| env::var_os(ENV_CONFIG).map(Into::into));
        if let Some(path) = file {
            settings = Settings::from_file(&path)?;
            tracing::debug!(path = %path.display(), "loaded settings file");
        }

        settings.apply_env(|key| env::var(key).ok())?;
        settings.apply_args(args);
        Ok(settings)
    }

    /// Read a TOML settings file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> PostApiResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PostApiError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| PostApiError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> PostApiResult<Self> {
        toml::from_str(content).map_err(|e| PostApiError::InvalidConfig(e.to_string()))
    }

    /// Overlay values from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> PostApiResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(user) = lookup(ENV_USER_ID).filter(|v| !v.trim().is_empty()) {
            self.user_id = Some(user);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                PostApiError::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_THEME) {
            self.theme = raw
                .parse()
                .map_err(|e: String| PostApiError::InvalidConfig(format!("{}: {}", ENV_THEME, e)))?;
        }
        Ok(())
    }

    /// Overlay command-line flags
    pub fn apply_args(&mut self, args: &GlobalArgs) {
        if let Some(url) = &args.api_url {
            self.api_base_url = url.clone();
        }
        if let Some(user) = &args.user {
            self.user_id = Some(user.clone());
        }
    }

    /// API base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base()).with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Resolve the theme against the terminal's background
    pub fn resolved_theme(&self) -> Theme {
        let colorfgbg = env::var("COLORFGBG").ok();
        self.theme
            .resolve(terminal_prefers_dark(colorfgbg.as_deref()))
    }

    /// Start a session for the configured user
    pub fn session(&self) -> PostApiResult<Session> {
        let user_id = self.user_id.clone().ok_or_else(|| {
            PostApiError::MissingConfig(format!(
                "user id (pass --user or set {})",
                ENV_USER_ID
            ))
        })?;
        Ok(Session::new(user_id).with_theme(self.resolved_theme()))
    }
}

/// Read the background colour from a `COLORFGBG` value (`fg;bg` or `fg;x;bg`)
///
/// ANSI backgrounds 0-6 and 8 are dark. Unknown values count as light.
pub fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base(), "http://localhost:8080");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.theme, ThemePreference::System);
        assert!(settings.session().is_err());
    }

    #[test]
    fn test_toml_partial() {
        let settings = Settings::from_toml(
            r#"
            api_base_url = "https://api.example.dev/"
            theme = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api_base(), "https://api.example.dev");
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_layering_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postapi.toml");
        std::fs::write(&path, "api_base_url = \"http://file\"\nuser_id = \"file-user\"\n").unwrap();

        let mut settings = Settings::from_file(&path).unwrap();
        settings
            .apply_env(lookup(&[
                (ENV_USER_ID, "env-user"),
                (ENV_TIMEOUT_SECS, "5"),
            ]))
            .unwrap();
        assert_eq!(settings.api_base_url, "http://file");
        assert_eq!(settings.user_id.as_deref(), Some("env-user"));
        assert_eq!(settings.timeout_secs, 5);

        settings.apply_args(&GlobalArgs {
            api_url: Some("http://flag".to_string()),
            ..GlobalArgs::default()
        });
        assert_eq!(settings.api_base_url, "http://flag");
        assert_eq!(settings.user_id.as_deref(), Some("env-user"));
        assert_eq!(settings.client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_env_values() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(lookup(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));

        let err = settings
            .apply_env(lookup(&[(ENV_THEME, "sepia")]))
            .unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file(PathBuf::from("/definitely/not/here.toml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_terminal_background() {
        assert!(terminal_prefers_dark(Some("15;0")));
        assert!(terminal_prefers_dark(Some("15;default;0")));
        assert!(!terminal_prefers_dark(Some("0;15")));
        assert!(!terminal_prefers_dark(Some("garbage")));
        assert!(!terminal_prefers_dark(None));
    }

    #[test]
    fn test_session_from_settings() {
        let settings = Settings {
            user_id: Some("user_1".to_string()),
            theme: ThemePreference::Dark,
            ..Settings::default()
        };
        let session = settings.session().unwrap();
        assert_eq!(session.user_id(), "user_1");
        assert!(session.theme().is_dark());
    }
}
