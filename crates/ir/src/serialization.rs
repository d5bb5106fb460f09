//! Resource definition files
//!
//! A definition file describes one resource as JSON so it can be validated
//! and submitted without the interactive form:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "name": "Products",
//!   "methods": ["GET", "POST"],
//!   "primaryKey": "sku",
//!   "mockData": [{ "sku": "A1", "price": 9.99 }]
//! }
//! ```

use crate::method::MethodTag;
use crate::resource::ResourceDraft;
use postapi_core::{PostApiError, PostApiResult, ResultExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

// ============================================================================
// Constants
// ============================================================================

/// Current schema version of definition files
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// ResourceFile
// ============================================================================

/// On-disk resource definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFile {
    /// Schema version; files newer than this build are rejected
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub name: String,

    /// Explicit slug; derived from the name when absent
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    pub methods: Vec<MethodTag>,

    #[serde(default)]
    pub primary_key: Option<String>,

    pub mock_data: Value,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl ResourceFile {
    /// Check whether this build can read the file
    pub fn check_version(&self) -> PostApiResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(PostApiError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(())
    }

    /// Build the equivalent form state
    ///
    /// Runs the same checks the form does when a primary key is picked, so a
    /// file naming a key that is not in its mock data is rejected here.
    pub fn into_draft(self) -> PostApiResult<ResourceDraft> {
        let mut draft = ResourceDraft::new();
        draft.set_name(self.name);
        if let Some(slug) = self.slug {
            draft.set_slug(slug);
        }
        if let Some(description) = self.description {
            draft.set_description(description);
        }
        draft.set_methods(&self.methods);
        draft.set_mock_text(serde_json::to_string_pretty(&self.mock_data).with_context("mockData")?);
        if let Some(key) = self.primary_key {
            draft.set_primary_key(key)?;
        }
        Ok(draft)
    }
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a resource definition from a file
pub fn load_resource_file(path: impl AsRef<Path>) -> PostApiResult<ResourceFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PostApiError::FileNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| PostApiError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_resource_file_from_string(&json).map_err(|e| match e {
        PostApiError::JsonSerialization(je) => PostApiError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid resource file format: {}", je),
        },
        other => other,
    })
}

/// Load a resource definition from a JSON string
pub fn load_resource_file_from_string(json: &str) -> PostApiResult<ResourceFile> {
    let file: ResourceFile = serde_json::from_str(json)?;
    file.check_version()?;
    Ok(file)
}

/// Load a definition file straight into a draft
pub fn load_resource_draft(path: impl AsRef<Path>) -> PostApiResult<ResourceDraft> {
    load_resource_file(path)?.into_draft()
}

// ============================================================================
// Tests
// ============================================================================
