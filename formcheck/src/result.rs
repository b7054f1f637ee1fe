use crate::field::{Field, FieldKind};

/// Which rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Checkbox,
    Radio,
    Select,
    Input,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required text-like field is empty.
    MissingValue,
    /// A required select has no option chosen.
    MissingSelection,
    /// A required checkbox is unchecked, or no radio of a group is checked.
    MissingChoice,
    /// An email field holds something that is not shaped like an address.
    MalformedEmail,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// None for optional fields, which are never validated.
    pub category: Option<Category>,
    pub failure: Option<FailureKind>,
    /// Error message. Empty when valid.
    pub message: String,
}

impl ValidationResult {
    /// Result for a field no rule applies to.
    pub fn unvalidated() -> Self {
        Self {
            category: None,
            failure: None,
            message: String::new(),
        }
    }

    pub fn passed(category: Category) -> Self {
        Self {
            category: Some(category),
            failure: None,
            message: String::new(),
        }
    }

    pub fn failed(category: Category, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            category: Some(category),
            failure: Some(kind),
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// A failed result, tied to the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub field_id: String,
    pub field_kind: FieldKind,
    pub category: Category,
    pub failure: FailureKind,
    pub message: String,
}

impl FailureRecord {
    /// Build a record from a field and its result. None if the result is valid.
    pub fn from_result(field: &Field, result: ValidationResult) -> Option<Self> {
        let failure = result.failure?;
        let category = result.category?;
        Some(Self {
            field_id: field.id.clone(),
            field_kind: field.kind,
            category,
            failure,
            message: result.message,
        })
    }
}
