//! Method tags and route derivation
//!
//! A resource enables a subset of five method tags. Each tag maps to a fixed
//! route shape under the resource slug:
//!
//! | Tag         | Verb     | Route           |
//! |-------------|----------|-----------------|
//! | `GET`       | `GET`    | `/{slug}`       |
//! | `POST`      | `POST`   | `/{slug}`       |
//! | `GET_BY_ID` | `GET`    | `/{slug}/{id}`  |
//! | `PUT`       | `PUT`    | `/{slug}/{id}`  |
//! | `DELETE`    | `DELETE` | `/{slug}/{id}`  |
//!
//! Routes are never stored; they are recomputed from `(slug, tag)` wherever
//! they are shown.

use postapi_core::PostApiError;
use serde::{Deserialize, Serialize};

/// Placeholder used for the item identifier in single-item routes
pub const ID_PLACEHOLDER: &str = "{id}";

// ============================================================================
// MethodTag
// ============================================================================

/// One of the enabled-method tags a resource can carry
///
/// The declaration order is the canonical display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MethodTag {
    /// List all items
    Get,
    /// Create an item
    Post,
    /// Read one item
    GetById,
    /// Update one item
    Put,
    /// Delete one item
    Delete,
}

impl MethodTag {
    /// All tags in canonical order
    pub fn all() -> &'static [MethodTag] {
        &[
            MethodTag::Get,
            MethodTag::Post,
            MethodTag::GetById,
            MethodTag::Put,
            MethodTag::Delete,
        ]
    }

    /// Wire name of the tag (`GET_BY_ID`, …)
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodTag::Get => "GET",
            MethodTag::Post => "POST",
            MethodTag::GetById => "GET_BY_ID",
            MethodTag::Put => "PUT",
            MethodTag::Delete => "DELETE",
        }
    }

    /// HTTP verb the generated endpoint answers to
    pub fn http_method(&self) -> &'static str {
        match self {
            MethodTag::Get | MethodTag::GetById => "GET",
            MethodTag::Post => "POST",
            MethodTag::Put => "PUT",
            MethodTag::Delete => "DELETE",
        }
    }

    /// Check if this tag addresses a single item
    pub fn is_single(&self) -> bool {
        matches!(self, MethodTag::GetById | MethodTag::Put | MethodTag::Delete)
    }

    /// Route for this tag under `slug`
    pub fn route(&self, slug: &str) -> String {
        if self.is_single() {
            format!("/{}/{}", slug, ID_PLACEHOLDER)
        } else {
            format!("/{}", slug)
        }
    }

    /// Short summary used in documentation listings
    pub fn summary(&self, resource_name: &str) -> String {
        match self {
            MethodTag::Get => format!("List {}", resource_name),
            MethodTag::Post => format!("Create {}", resource_name),
            MethodTag::GetById => format!("Get {} by id", resource_name),
            MethodTag::Put => format!("Update {}", resource_name),
            MethodTag::Delete => format!("Delete {}", resource_name),
        }
    }

    /// Default, user-editable description proposed while creating a resource
    pub fn default_description(&self, resource_name: &str) -> String {
        let singular = resource_name
            .strip_suffix('s')
            .unwrap_or(resource_name)
            .to_string();
        let plural = if resource_name.ends_with('s') {
            resource_name.to_string()
        } else {
            format!("{}s", resource_name)
        };

        match self {
            MethodTag::Get => format!("Get all {}", plural),
            MethodTag::Post => format!("Add a new {}", singular),
            MethodTag::GetById => format!("Get a particular {}", singular),
            MethodTag::Put => format!("Edit {}", singular),
            MethodTag::Delete => format!("Delete {}", singular),
        }
    }
}

impl std::fmt::Display for MethodTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MethodTag {
    type Err = PostApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        MethodTag::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| PostApiError::UnknownMethod(s.trim().to_string()))
    }
}

/// Derive the route for `(slug, tag)`
pub fn derive_route(slug: &str, tag: MethodTag) -> String {
    tag.route(slug)
}

/// Parse a comma-separated method list such as `GET,POST,GET_BY_ID`
///
/// Duplicates are dropped and the result is sorted into canonical order.
pub fn parse_method_list(list: &str) -> Result<Vec<MethodTag>, PostApiError> {
    let mut tags = list
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<MethodTag>, _>>()?;
    tags.sort();
    tags.dedup();
    Ok(tags)
}

// ============================================================================
// RouteEntry
// ============================================================================

/// A derived `(tag, verb, path)` row for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub tag: MethodTag,
    pub http_method: &'static str,
    pub path: String,
}

impl RouteEntry {
    /// Build the entry for `tag` under `slug`
    pub fn new(slug: &str, tag: MethodTag) -> Self {
        Self {
            tag,
            http_method: tag.http_method(),
            path: tag.route(slug),
        }
    }
}

/// Derive the route rows for the enabled tags, in canonical order
pub fn routes_for(slug: &str, enabled: &[MethodTag]) -> Vec<RouteEntry> {
    MethodTag::all()
        .iter()
        .filter(|tag| enabled.contains(tag))
        .map(|tag| RouteEntry::new(slug, *tag))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
