//! Resource definitions for PostAPI Studio
//!
//! A resource is a named mock-data collection served under a slug with a
//! subset of enabled methods. [`ResourceDraft`] is the editable form state
//! that turns into a [`CreateResource`] payload.

use crate::method::{MethodTag, RouteEntry, routes_for};
use crate::mock_data::{MockDataError, validate_mock_data};
use crate::slug::SlugField;
use crate::validation::validate_resource_draft;
use chrono::{DateTime, Utc};
use postapi_core::{Named, PostApiError, PostApiResult, ProjectId, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};

/// Mock data a new resource form starts with
pub const DEFAULT_MOCK_DATA: &str = r#"[
  {
    "id": 1,
    "name": "Sample Product",
    "price": 99.99,
    "description": "A sample product"
  },
  {
    "id": 2,
    "name": "Another Product",
    "price": 49.0,
    "description": "Another sample"
  }
]"#;

// ============================================================================
// Resource
// ============================================================================

/// A resource as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,

    #[serde(default)]
    pub project_id: Option<ProjectId>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub slug: String,

    #[serde(default)]
    pub enabled_methods: Vec<MethodTag>,

    #[serde(default)]
    pub mock_data: Option<Value>,

    #[serde(default)]
    pub primary_key: Option<String>,

    #[serde(default, with = "crate::timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "crate::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource {
    /// Create a resource value with the given methods (mostly useful in tests)
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        methods: &[MethodTag],
    ) -> Self {
        Self {
            id: id.into(),
            project_id: None,
            name: name.into(),
            description: None,
            slug: slug.into(),
            enabled_methods: methods.to_vec(),
            mock_data: None,
            primary_key: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Attach mock data
    pub fn with_mock_data(mut self, data: Value) -> Self {
        self.mock_data = Some(data);
        self
    }

    /// Check if a method is enabled
    pub fn is_enabled(&self, tag: MethodTag) -> bool {
        self.enabled_methods.contains(&tag)
    }

    /// Derived endpoint rows, in canonical method order
    pub fn endpoints(&self) -> Vec<RouteEntry> {
        routes_for(&self.slug, &self.enabled_methods)
    }

    /// Number of enabled endpoints
    pub fn endpoint_count(&self) -> usize {
        self.endpoints().len()
    }

    /// Mock items, empty when the backend returned no array
    pub fn mock_items(&self) -> &[Value] {
        match &self.mock_data {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Example payload for documentation: the first mock item or `{"id": 1}`
    pub fn example_item(&self) -> Value {
        self.mock_items()
            .first()
            .cloned()
            .unwrap_or_else(|| json!({ "id": 1 }))
    }
}

impl Named for Resource {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Total endpoints across resources
pub fn total_endpoints(resources: &[Resource]) -> usize {
    resources.iter().map(Resource::endpoint_count).sum()
}

// ============================================================================
// CreateResource
// ============================================================================

/// Wire payload for `POST /api/projects/{id}/resources`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub mock_data: Value,
    pub primary_key: String,
    pub enabled_methods: Vec<MethodTag>,
}

/// Outcome of preparing a draft for submission
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedResource {
    /// Everything is in place; post this payload
    Ready(CreateResource),
    /// Submission is interrupted until one of these keys is chosen
    NeedsPrimaryKey(Vec<String>),
}

// ============================================================================
// ResourceDraft
// ============================================================================

/// Editable new-resource form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    name: String,
    description: String,
    slug: SlugField,
    methods: BTreeSet<MethodTag>,
    method_descriptions: BTreeMap<MethodTag, String>,
    mock_text: String,
    primary_key: Option<String>,
}

impl Default for ResourceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            slug: SlugField::new(),
            methods: BTreeSet::new(),
            method_descriptions: BTreeMap::new(),
            mock_text: DEFAULT_MOCK_DATA.to_string(),
            primary_key: None,
        }
    }
}

impl ResourceDraft {
    /// Create a draft with the default sample mock data and no methods
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Name / slug / description
    // ------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Update the name; the slug and method descriptions follow it
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug.source_changed(&self.name);
        if !self.name.is_empty() {
            self.method_descriptions = MethodTag::all()
                .iter()
                .map(|tag| (*tag, tag.default_description(&self.name)))
                .collect();
        }
    }

    pub fn slug(&self) -> &SlugField {
        &self.slug
    }

    /// Edit the slug directly; it stops following the name
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug.edit(slug);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // ------------------------------------------------------------------------
    // Methods
    // ------------------------------------------------------------------------

    /// Enabled methods in canonical order
    pub fn methods(&self) -> Vec<MethodTag> {
        self.methods.iter().copied().collect()
    }

    /// Flip a method toggle; returns whether it is now enabled
    pub fn toggle_method(&mut self, tag: MethodTag) -> bool {
        if self.methods.remove(&tag) {
            false
        } else {
            self.methods.insert(tag);
            true
        }
    }

    pub fn enable_method(&mut self, tag: MethodTag) {
        self.methods.insert(tag);
    }

    /// Replace the enabled set
    pub fn set_methods(&mut self, tags: &[MethodTag]) {
        self.methods = tags.iter().copied().collect();
    }

    /// Per-method description, empty until a name is entered
    pub fn method_description(&self, tag: MethodTag) -> &str {
        self.method_descriptions
            .get(&tag)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Override a method description (regenerated on the next name change)
    pub fn set_method_description(&mut self, tag: MethodTag, description: impl Into<String>) {
        self.method_descriptions.insert(tag, description.into());
    }

    /// Derived route rows for the enabled methods
    pub fn routes(&self) -> Vec<RouteEntry> {
        routes_for(self.slug.value(), &self.methods())
    }

    // ------------------------------------------------------------------------
    // Mock data / primary key
    // ------------------------------------------------------------------------

    pub fn mock_text(&self) -> &str {
        &self.mock_text
    }

    /// Replace the mock-data text
    ///
    /// A previously chosen primary key is dropped once it is no longer a key
    /// of the first object.
    pub fn set_mock_text(&mut self, text: impl Into<String>) {
        self.mock_text = text.into();
        if let Some(key) = &self.primary_key {
            let still_valid = validate_mock_data(&self.mock_text)
                .map(|data| data.has_key(key))
                .unwrap_or(false);
            if !still_valid {
                tracing::debug!(key = %key, "primary key no longer in mock data, clearing");
                self.primary_key = None;
            }
        }
    }

    /// Real-time check of the current mock text
    pub fn mock_error(&self) -> Option<MockDataError> {
        validate_mock_data(&self.mock_text).err()
    }

    /// Primary-key candidates of the current mock text (empty when invalid)
    pub fn candidate_keys(&self) -> Vec<String> {
        validate_mock_data(&self.mock_text)
            .map(|data| data.candidate_keys())
            .unwrap_or_default()
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Choose the primary key; it must be one of the candidate keys
    pub fn set_primary_key(&mut self, key: impl Into<String>) -> PostApiResult<()> {
        let key = key.into();
        let data = validate_mock_data(&self.mock_text)?;
        if !data.has_key(&key) {
            return Err(PostApiError::UnknownPrimaryKey {
                key,
                candidates: data.candidate_keys().join(", "),
            });
        }
        self.primary_key = Some(key);
        Ok(())
    }

    pub fn clear_primary_key(&mut self) {
        self.primary_key = None;
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Validate the draft and build the payload for `project_id`
    ///
    /// Validation failures are returned as errors and never reach the
    /// backend. A valid draft without a primary key yields
    /// [`PreparedResource::NeedsPrimaryKey`] with the candidate keys.
    pub fn prepare(&self, project_id: &str) -> PostApiResult<PreparedResource> {
        let report = validate_resource_draft(self);
        if let Some(first) = report.errors.into_iter().next() {
            return Err(first.into_error(self.name.trim()));
        }

        let data = validate_mock_data(&self.mock_text)?;
        let Some(primary_key) = self.primary_key.clone() else {
            return Ok(PreparedResource::NeedsPrimaryKey(data.candidate_keys()));
        };

        Ok(PreparedResource::Ready(CreateResource {
            project_id: project_id.to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            slug: self.slug.value().trim().to_string(),
            mock_data: data.into_value(),
            primary_key,
            enabled_methods: self.methods(),
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn products_draft() -> ResourceDraft {
        let mut draft = ResourceDraft::new();
        draft.set_name("Products");
        draft.set_methods(&[MethodTag::Get, MethodTag::Post]);
        draft.set_mock_text(r#"[{"sku":"A1","price":9.99}]"#);
        draft
    }

    #[test]
    fn test_deserialize_backend_resource() {
        let json = r#"{
            "id": "r1",
            "projectId": "p1",
            "name": "Products",
            "slug": "products",
            "enabledMethods": ["GET", "GET_BY_ID"],
            "mockData": [{"sku": "A1"}],
            "primaryKey": "sku",
            "createdAt": "2024-05-01T10:00:00.5"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.enabled_methods, vec![MethodTag::Get, MethodTag::GetById]);
        assert_eq!(resource.endpoint_count(), 2);
        assert_eq!(resource.example_item(), json!({"sku": "A1"}));
        assert!(resource.updated_at.is_none());
    }

    #[test]
    fn test_example_item_fallback() {
        let resource = Resource::new("r1", "Things", "things", &[MethodTag::Get]);
        assert_eq!(resource.example_item(), json!({"id": 1}));

        let resource = resource.with_mock_data(json!({"not": "an array"}));
        assert_eq!(resource.example_item(), json!({"id": 1}));
    }

    #[test]
    fn test_endpoints_follow_canonical_order() {
        let resource = Resource::new(
            "r1",
            "Widgets",
            "widgets",
            &[MethodTag::Delete, MethodTag::Get],
        );
        let paths: Vec<String> = resource.endpoints().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/widgets", "/widgets/{id}"]);
    }

    #[test]
    fn test_total_endpoints() {
        let resources = vec![
            Resource::new("a", "A", "a", &[MethodTag::Get, MethodTag::Post]),
            Resource::new("b", "B", "b", MethodTag::all()),
        ];
        assert_eq!(total_endpoints(&resources), 7);
    }

    #[test]
    fn test_draft_name_drives_slug_and_descriptions() {
        let mut draft = ResourceDraft::new();
        assert_eq!(draft.method_description(MethodTag::Get), "");

        draft.set_name("Blog Posts");
        assert_eq!(draft.slug().value(), "blog-posts");
        assert_eq!(draft.method_description(MethodTag::Get), "Get all Blog Posts");
        assert_eq!(draft.method_description(MethodTag::Post), "Add a new Blog Post");

        draft.set_slug("posts");
        draft.set_name("Blog Entries");
        assert_eq!(draft.slug().value(), "posts");
    }

    #[test]
    fn test_toggle_method() {
        let mut draft = ResourceDraft::new();
        assert!(draft.toggle_method(MethodTag::Put));
        assert!(draft.toggle_method(MethodTag::Get));
        assert_eq!(draft.methods(), vec![MethodTag::Get, MethodTag::Put]);
        assert!(!draft.toggle_method(MethodTag::Put));
        assert_eq!(draft.methods(), vec![MethodTag::Get]);
    }

    #[test]
    fn test_prepare_asks_for_primary_key() {
        let draft = products_draft();
        assert_eq!(draft.slug().value(), "products");
        assert_eq!(
            draft.prepare("p1").unwrap(),
            PreparedResource::NeedsPrimaryKey(vec!["sku".to_string(), "price".to_string()])
        );
    }

    #[test]
    fn test_prepare_ready_payload() {
        let mut draft = products_draft();
        draft.set_description("  Catalogue  ");
        draft.set_primary_key("sku").unwrap();

        let PreparedResource::Ready(payload) = draft.prepare("p1").unwrap() else {
            panic!("expected a ready payload");
        };
        assert_eq!(payload.project_id, "p1");
        assert_eq!(payload.description, "Catalogue");
        assert_eq!(payload.primary_key, "sku");
        assert_eq!(payload.enabled_methods, vec![MethodTag::Get, MethodTag::Post]);

        let wire = serde_json::to_value(&payload).unwrap();
        assert_eq!(wire["enabledMethods"], json!(["GET", "POST"]));
        assert_eq!(wire["mockData"], json!([{"sku": "A1", "price": 9.99}]));
        assert_eq!(wire["primaryKey"], json!("sku"));
        assert_eq!(wire["projectId"], json!("p1"));
    }

    #[test]
    fn test_prepare_rejects_invalid_json() {
        let mut draft = products_draft();
        draft.set_mock_text("not json");
        assert!(draft.mock_error().is_some());

        let err = draft.prepare("p1").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_prepare_requires_a_method() {
        let mut draft = products_draft();
        draft.set_methods(&[]);
        let err = draft.prepare("p1").unwrap_err();
        assert!(err.to_string().contains("at least one method"));
    }

    #[test]
    fn test_set_primary_key_must_be_candidate() {
        let mut draft = products_draft();
        let err = draft.set_primary_key("id").unwrap_err();
        assert!(matches!(err, PostApiError::UnknownPrimaryKey { .. }));
        assert!(draft.primary_key().is_none());
    }

    #[test]
    fn test_mock_edit_drops_stale_primary_key() {
        let mut draft = products_draft();
        draft.set_primary_key("price").unwrap();

        draft.set_mock_text(r#"[{"sku":"B2","price":1.5,"stock":3}]"#);
        assert_eq!(draft.primary_key(), Some("price"));

        draft.set_mock_text(r#"[{"code":"C3"}]"#);
        assert_eq!(draft.primary_key(), None);
    }

    #[test]
    fn test_default_mock_data_is_valid() {
        let draft = ResourceDraft::new();
        assert!(draft.mock_error().is_none());
        assert_eq!(draft.candidate_keys(), vec!["id", "name", "price", "description"]);
    }
}
