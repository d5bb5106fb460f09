//! Mock-data validation and primary-key candidates
//!
//! A resource's mock data must be a non-empty JSON array whose first element
//! is an object. The same [`validate_mock_data`] call backs both the
//! real-time check on every edit and the authoritative gate before
//! submission, so the two can never disagree.

use postapi_core::PostApiError;
use serde_json::{Map, Value};
use thiserror::Error;

// ============================================================================
// MockDataError
// ============================================================================

/// Why a mock-data text was rejected
///
/// Rules are checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockDataError {
    /// Empty or whitespace-only input
    #[error("JSON data is required")]
    Empty,

    /// Not parseable as JSON; carries the parser's message
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    /// Parsed, but the top-level value is not an array
    #[error("JSON must be an array of objects")]
    NotAnArray,

    /// An empty array
    #[error("Array must contain at least one object")]
    EmptyArray,

    /// The first element is a primitive, null or a nested array
    ///
    /// A nested array such as `[[1]]` is refused here even though a plain
    /// `typeof === 'object'` check would let it through: it has no keys, so
    /// no primary key could ever be chosen for it.
    #[error("Array must contain objects, not primitives")]
    NotObjects,
}

impl From<MockDataError> for PostApiError {
    fn from(err: MockDataError) -> Self {
        PostApiError::MockData(err.to_string())
    }
}

// ============================================================================
// MockData
// ============================================================================

/// Mock data that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    items: Vec<Value>,
    /// Keys of the first object, captured at validation time
    keys: Vec<String>,
}

impl MockData {
    /// All items
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for validated data; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Primary-key candidates: the first object's own keys in insertion order
    pub fn candidate_keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// Check whether `key` is one of the candidate keys
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Serialize with two-space indentation
    pub fn to_pretty_string(&self) -> String {
        // serializing a Value into a String cannot fail
        serde_json::to_string_pretty(&self.items).unwrap_or_default()
    }

    /// Convert into a JSON array value (the `mockData` wire payload)
    pub fn into_value(self) -> Value {
        Value::Array(self.items)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Validate raw mock-data text against the array-of-objects contract
pub fn validate_mock_data(text: &str) -> Result<MockData, MockDataError> {
    if text.trim().is_empty() {
        return Err(MockDataError::Empty);
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| MockDataError::Syntax(e.to_string()))?;

    validate_mock_value(parsed)
}

/// Validate an already-parsed JSON value against the array-of-objects contract
pub fn validate_mock_value(value: Value) -> Result<MockData, MockDataError> {
    let Value::Array(items) = value else {
        return Err(MockDataError::NotAnArray);
    };

    let keys = match items.first() {
        None => return Err(MockDataError::EmptyArray),
        Some(Value::Object(first)) => candidate_keys(first),
        Some(_) => return Err(MockDataError::NotObjects),
    };

    Ok(MockData { items, keys })
}

/// Enumerate an object's own keys in insertion order
pub fn candidate_keys(first_object: &Map<String, Value>) -> Vec<String> {
    first_object.keys().cloned().collect()
}

/// Re-serialize any JSON text with stable two-space indentation
///
/// Formatting only requires the text to parse; the array-of-objects contract
/// is checked separately so a user can format a draft before it is complete.
pub fn format_mock_data(text: &str) -> Result<String, MockDataError> {
    let parsed: Value =
        serde_json::from_str(text).map_err(|e| MockDataError::Syntax(e.to_string()))?;
    Ok(serde_json::to_string_pretty(&parsed).unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================
