//! Pass/fail rules, one per category of field.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Messages;
use crate::field::{Field, FieldKind};
use crate::host::HostDocument;
use crate::result::{Category, FailureKind, ValidationResult};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
    Regex::new(pattern).expect("Invalid regex pattern")
});

/// Check that `value` is shaped like `local@domain.tld`.
///
/// Deliberately permissive: any run of characters other than whitespace and
/// `@` is accepted for each part.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// A validation rule for one category of required field.
pub trait FieldRule: Sync {
    fn category(&self) -> Category;

    /// Evaluate `field`. `doc` is consulted for rules that depend on other
    /// fields (radio groups).
    fn evaluate(
        &self,
        field: &Field,
        doc: &dyn HostDocument,
        messages: &Messages,
    ) -> ValidationResult;
}

/// A required checkbox must be checked.
pub struct CheckboxRule;

impl FieldRule for CheckboxRule {
    fn category(&self) -> Category {
        Category::Checkbox
    }

    fn evaluate(
        &self,
        field: &Field,
        _doc: &dyn HostDocument,
        messages: &Messages,
    ) -> ValidationResult {
        if field.checked {
            ValidationResult::passed(self.category())
        } else {
            ValidationResult::failed(
                self.category(),
                FailureKind::MissingChoice,
                &messages.checkbox_required,
            )
        }
    }
}

/// A required radio passes when any radio of its group is checked.
pub struct RadioRule;

impl FieldRule for RadioRule {
    fn category(&self) -> Category {
        Category::Radio
    }

    fn evaluate(
        &self,
        field: &Field,
        doc: &dyn HostDocument,
        messages: &Messages,
    ) -> ValidationResult {
        let any_checked = match &field.group {
            Some(group) => {
                let members = doc.group_members(group);
                members.iter().any(|member| member.checked)
            }
            None => field.checked,
        };

        if any_checked {
            ValidationResult::passed(self.category())
        } else {
            ValidationResult::failed(
                self.category(),
                FailureKind::MissingChoice,
                &messages.option_required,
            )
        }
    }
}

/// A required select (single or multiple) needs a non-blank value.
pub struct SelectRule;

impl FieldRule for SelectRule {
    fn category(&self) -> Category {
        Category::Select
    }

    fn evaluate(
        &self,
        field: &Field,
        _doc: &dyn HostDocument,
        messages: &Messages,
    ) -> ValidationResult {
        if field.value.trim().is_empty() {
            ValidationResult::failed(
                self.category(),
                FailureKind::MissingSelection,
                &messages.option_required,
            )
        } else {
            ValidationResult::passed(self.category())
        }
    }
}

/// Every other required input needs a non-blank value; email inputs must
/// also hold a well-formed address. Emptiness is reported first.
pub struct TextRule;

impl FieldRule for TextRule {
    fn category(&self) -> Category {
        Category::Input
    }

    fn evaluate(
        &self,
        field: &Field,
        _doc: &dyn HostDocument,
        messages: &Messages,
    ) -> ValidationResult {
        if field.value.trim().is_empty() {
            ValidationResult::failed(
                self.category(),
                FailureKind::MissingValue,
                &messages.value_required,
            )
        } else if field.kind == FieldKind::Email && !is_valid_email(&field.value) {
            ValidationResult::failed(
                self.category(),
                FailureKind::MalformedEmail,
                &messages.invalid_email,
            )
        } else {
            ValidationResult::passed(self.category())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email(""));
    }
}
