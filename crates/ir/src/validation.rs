//! Validation rules and utilities for resource drafts
//!
//! The new-resource form shows every problem at once, so rules collect into
//! a [`ValidationResult`] instead of stopping at the first failure. The
//! submission path turns the first error back into a [`PostApiError`].

use crate::mock_data::validate_mock_data;
use crate::resource::ResourceDraft;
use crate::slug::is_valid_slug;
use postapi_core::PostApiError;

// ============================================================================
// ValidationResult
// ============================================================================

/// Outcome of checking a resource draft
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// True when no rule reported an error
    pub valid: bool,

    /// Problems that block submission
    pub errors: Vec<ValidationError>,

    /// Problems worth showing that do not block submission
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Nothing to report
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A result holding a single error
    pub fn error(error: ValidationError) -> Self {
        Self {
            valid: false,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// Record a blocking problem
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Record a non-blocking problem
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Fold another rule's findings into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// True if any rule failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if any rule warned
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Which check failed
    pub code: ValidationErrorCode,

    /// Message shown next to the field
    pub message: String,

    /// Form field the error belongs to (e.g. "mockData")
    pub field: Option<String>,
}

impl ValidationError {
    /// Build an error not yet tied to a field
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the form field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Convert into the shared error type for the named resource
    pub fn into_error(self, resource: &str) -> PostApiError {
        match self.code {
            ValidationErrorCode::InvalidMockData => PostApiError::MockData(self.message),
            ValidationErrorCode::EmptyName => PostApiError::validation(self.message),
            _ => PostApiError::resource_validation(resource, self.message),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}", field, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Kinds of blocking draft problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyName,
    EmptySlug,
    InvalidSlug,
    NoMethods,
    InvalidMockData,
    UnknownPrimaryKey,
}

// ============================================================================
// ValidationWarning
// ============================================================================

/// A draft problem that does not block submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: ValidationWarningCode,
    pub message: String,
    pub field: Option<String>,
}

impl ValidationWarning {
    /// Create a new warning
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the form field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] Warning: {}", field, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    NoDescription,
    SlugEdgeHyphen,
    InconsistentItems,
}

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// Trait for draft validation rules
pub trait ValidationRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// One-line summary for listings
    fn description(&self) -> &'static str;

    /// Validate a draft and return the result
    fn validate(&self, draft: &ResourceDraft) -> ValidationResult;
}

// ============================================================================
// Validator
// ============================================================================

/// Draft validator that runs multiple validation rules in order
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// A validator with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with the default rules
    ///
    /// Order matters: the first error is the one reported on submission.
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(NameRule));
        validator.add_rule(Box::new(SlugRule));
        validator.add_rule(Box::new(MethodsRule));
        validator.add_rule(Box::new(MockDataRule));
        validator.add_rule(Box::new(PrimaryKeyRule));
        validator
    }

    /// Add a validation rule
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Validate a draft with all rules
    pub fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for rule in &self.rules {
            result.merge(rule.validate(draft));
        }
        result
    }
}

/// Validate a resource draft with the default rules
pub fn validate_resource_draft(draft: &ResourceDraft) -> ValidationResult {
    Validator::with_default_rules().validate(draft)
}

// ============================================================================
// Built-in Validation Rules
// ============================================================================

/// Rule: a resource needs a name
pub struct NameRule;

impl ValidationRule for NameRule {
    fn name(&self) -> &'static str {
        "name"
    }

    fn description(&self) -> &'static str {
        "Validates that the resource has a name"
    }

    fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if draft.name().trim().is_empty() {
            result.add_error(
                ValidationError::new(ValidationErrorCode::EmptyName, "Resource name is required")
                    .with_field("name"),
            );
        }
        if draft.description().trim().is_empty() {
            result.add_warning(
                ValidationWarning::new(ValidationWarningCode::NoDescription, "No description")
                    .with_field("description"),
            );
        }
        result
    }
}

/// Rule: the slug must be non-empty and URL-safe
pub struct SlugRule;

impl ValidationRule for SlugRule {
    fn name(&self) -> &'static str {
        "slug"
    }

    fn description(&self) -> &'static str {
        "Validates that the resource slug is URL-safe"
    }

    fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        let slug = draft.slug().value().trim();
        if slug.is_empty() {
            return ValidationResult::error(
                ValidationError::new(ValidationErrorCode::EmptySlug, "Resource slug is required")
                    .with_field("slug"),
            );
        }
        if !is_valid_slug(slug) {
            return ValidationResult::error(
                ValidationError::new(
                    ValidationErrorCode::InvalidSlug,
                    format!("Slug '{}' may only contain a-z, 0-9 and '-'", slug),
                )
                .with_field("slug"),
            );
        }

        let mut result = ValidationResult::ok();
        if slug.starts_with('-') || slug.ends_with('-') {
            result.add_warning(
                ValidationWarning::new(
                    ValidationWarningCode::SlugEdgeHyphen,
                    format!("Slug '{}' starts or ends with '-'", slug),
                )
                .with_field("slug"),
            );
        }
        result
    }
}

/// Rule: at least one method must be enabled
pub struct MethodsRule;

impl ValidationRule for MethodsRule {
    fn name(&self) -> &'static str {
        "methods"
    }

    fn description(&self) -> &'static str {
        "Validates that at least one method is enabled"
    }

    fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        if draft.methods().is_empty() {
            ValidationResult::error(
                ValidationError::new(
                    ValidationErrorCode::NoMethods,
                    "Please select at least one method",
                )
                .with_field("methods"),
            )
        } else {
            ValidationResult::ok()
        }
    }
}

/// Rule: mock data must be a non-empty array of objects
pub struct MockDataRule;

impl ValidationRule for MockDataRule {
    fn name(&self) -> &'static str {
        "mock_data"
    }

    fn description(&self) -> &'static str {
        "Validates mock data as a non-empty array of objects"
    }

    fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        match validate_mock_data(draft.mock_text()) {
            Err(err) => ValidationResult::error(
                ValidationError::new(ValidationErrorCode::InvalidMockData, err.to_string())
                    .with_field("mockData"),
            ),
            Ok(data) => {
                let mut result = ValidationResult::ok();
                let uneven = data.items().iter().skip(1).any(|item| !item.is_object());
                if uneven {
                    result.add_warning(
                        ValidationWarning::new(
                            ValidationWarningCode::InconsistentItems,
                            "Only the first item is an object; other items are served as-is",
                        )
                        .with_field("mockData"),
                    );
                }
                result
            }
        }
    }
}

/// Rule: a chosen primary key must be a key of the first object
pub struct PrimaryKeyRule;

impl ValidationRule for PrimaryKeyRule {
    fn name(&self) -> &'static str {
        "primary_key"
    }

    fn description(&self) -> &'static str {
        "Validates the chosen primary key against the mock data"
    }

    fn validate(&self, draft: &ResourceDraft) -> ValidationResult {
        let (Some(key), Ok(data)) = (draft.primary_key(), validate_mock_data(draft.mock_text()))
        else {
            return ValidationResult::ok();
        };
        if data.has_key(key) {
            return ValidationResult::ok();
        }
        ValidationResult::error(
            ValidationError::new(
                ValidationErrorCode::UnknownPrimaryKey,
                format!(
                    "'{}' is not a field of the mock data (expected one of: {})",
                    key,
                    data.candidate_keys().join(", ")
                ),
            )
            .with_field("primaryKey"),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
