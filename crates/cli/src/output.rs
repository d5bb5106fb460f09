//! Terminal output
//!
//! Colours follow the resolved theme: brighter accents on dark terminals.

use colored::{ColoredString, Colorize};
use postapi_app::{Notifications, StatusLevel};
use postapi_core::Theme;
use postapi_ir::{RouteEntry, UsageLevel};

/// Theme-aware printer for command output
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    theme: Theme,
}

impl Printer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn accent(&self, text: &str) -> ColoredString {
        if self.theme.is_dark() {
            text.bright_cyan()
        } else {
            text.blue()
        }
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn heading(&self, text: &str) {
        println!("{}", self.accent(text).bold());
    }

    pub fn field(&self, label: &str, value: impl std::fmt::Display) {
        println!("  {:<14} {}", self.muted(label), value);
    }

    pub fn success(&self, text: &str) {
        println!("{} {}", "✓".green().bold(), text);
    }

    pub fn warning(&self, text: &str) {
        eprintln!("{} {}", "!".yellow().bold(), text);
    }

    pub fn error(&self, text: &str) {
        eprintln!("{} {}", "✗".red().bold(), text);
    }

    /// Print and clear page notifications
    pub fn notifications(&self, notifications: &mut Notifications) {
        for message in notifications.drain() {
            match message.level {
                StatusLevel::Success => self.success(&message.text),
                StatusLevel::Info => println!("{}", self.muted(&message.text)),
                StatusLevel::Warning => self.warning(&message.text),
                StatusLevel::Error => self.error(&message.text),
            }
        }
    }

    /// HTTP verb coloured like the dashboard badges
    pub fn verb(&self, verb: &str) -> ColoredString {
        let padded = format!("{:<6}", verb);
        let padded = padded.as_str();
        match verb {
            "GET" => padded.green(),
            "POST" => padded.blue(),
            "PUT" => padded.yellow(),
            "DELETE" => padded.red(),
            _ => padded.normal(),
        }
    }

    pub fn route(&self, route: &RouteEntry) {
        println!("  {} {}", self.verb(route.http_method), route.path);
    }

    pub fn usage_level(&self, level: UsageLevel, text: &str) -> ColoredString {
        match level {
            UsageLevel::Normal => text.green(),
            UsageLevel::Warning => text.yellow(),
            UsageLevel::High => text.red(),
        }
    }
}
