//! Slug derivation and the edit-wins slug field
//!
//! Slugs are derived from a human name: lowercase, whitespace runs collapsed
//! to a single `-`, and everything outside `[a-z0-9-]` stripped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// Derive a URL slug from a human name
///
/// Pure, total and idempotent; the output always matches `^[a-z0-9-]*$`.
///
/// ```rust
/// use postapi_ir::derive_slug;
///
/// assert_eq!(derive_slug("My Products"), "my-products");
/// assert_eq!(derive_slug("Café & Bar!"), "caf--bar");
/// ```
pub fn derive_slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lower, "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// Check whether a string is already a well-formed slug
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !NON_SLUG_CHARS.is_match(slug)
}

// ============================================================================
// SlugField
// ============================================================================

/// Whether a slug field still follows its source field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlugMode {
    /// Re-derived every time the source field changes
    #[default]
    Auto,
    /// Edited directly by the user; frozen for the rest of the session
    Manual,
}

/// A slug input bound to a source name field
///
/// Starts in [`SlugMode::Auto`] and switches to [`SlugMode::Manual`] on the
/// first direct edit. There is no way back to `Auto` short of building a new
/// field, which matches a fresh editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugField {
    value: String,
    mode: SlugMode,
}

impl SlugField {
    /// Create an empty field in auto mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field seeded from an existing value, already frozen
    ///
    /// Used when editing a record whose slug was stored by the backend.
    pub fn manual(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mode: SlugMode::Manual,
        }
    }

    /// Notify the field that its source changed
    ///
    /// Returns `true` if the value was re-derived.
    pub fn source_changed(&mut self, source: &str) -> bool {
        match self.mode {
            SlugMode::Auto => {
                self.value = derive_slug(source);
                true
            }
            SlugMode::Manual => false,
        }
    }

    /// Apply a direct user edit; the field stops tracking its source
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.mode = SlugMode::Manual;
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current mode
    pub fn mode(&self) -> SlugMode {
        self.mode
    }

    /// Check if the field was overridden by the user
    pub fn is_manual(&self) -> bool {
        self.mode == SlugMode::Manual
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derive_slug_basic() {
        assert_eq!(derive_slug("Products"), "products");
        assert_eq!(derive_slug("Blog Posts"), "blog-posts");
        assert_eq!(derive_slug("  Spaced   Out  "), "-spaced-out-");
        assert_eq!(derive_slug("Tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(derive_slug("user_profiles (v2)"), "userprofiles-v2");
        assert_eq!(derive_slug(""), "");
    }

    #[test]
    fn test_derive_slug_keeps_existing_hyphens() {
        assert_eq!(derive_slug("already-a-slug"), "already-a-slug");
        assert_eq!(derive_slug("Order - Items"), "order---items");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("products"));
        assert!(is_valid_slug("blog-posts-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Blog Posts"));
        assert!(!is_valid_slug("a/b"));
    }

    #[test]
    fn test_slug_field_tracks_source_in_auto_mode() {
        let mut field = SlugField::new();
        assert_eq!(field.mode(), SlugMode::Auto);

        assert!(field.source_changed("Prod"));
        assert_eq!(field.value(), "prod");
        assert!(field.source_changed("Products"));
        assert_eq!(field.value(), "products");
    }

    #[test]
    fn test_slug_field_edit_wins() {
        let mut field = SlugField::new();
        field.source_changed("Products");
        field.edit("items");
        assert!(field.is_manual());

        assert!(!field.source_changed("Product Catalogue"));
        assert_eq!(field.value(), "items");
    }

    #[test]
    fn test_slug_field_manual_constructor() {
        let mut field = SlugField::manual("legacy-slug");
        assert!(!field.source_changed("New Name"));
        assert_eq!(field.value(), "legacy-slug");
    }

    proptest! {
        #[test]
        fn prop_derive_slug_is_idempotent(name in "\\PC*") {
            let once = derive_slug(&name);
            prop_assert_eq!(derive_slug(&once), once.clone());
        }

        #[test]
        fn prop_derive_slug_charset(name in "\\PC*") {
            let slug = derive_slug(&name);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
