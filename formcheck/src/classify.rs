//! Picks the rule for a field and runs it.

use crate::config::Messages;
use crate::field::{Field, FieldKind};
use crate::host::HostDocument;
use crate::result::ValidationResult;
use crate::rules::{CheckboxRule, FieldRule, RadioRule, SelectRule, TextRule};

/// The rule that applies to `field`, or None if the field is optional.
pub fn classify(field: &Field) -> Option<&'static dyn FieldRule> {
    if !field.required {
        return None;
    }

    let rule: &'static dyn FieldRule = match field.kind {
        FieldKind::Checkbox => &CheckboxRule,
        FieldKind::Radio => &RadioRule,
        FieldKind::SelectOne | FieldKind::SelectMultiple => &SelectRule,
        FieldKind::Text | FieldKind::Email => &TextRule,
    };
    Some(rule)
}

/// Validate one field. Optional fields always pass.
pub fn validate_field(
    field: &Field,
    doc: &dyn HostDocument,
    messages: &Messages,
) -> ValidationResult {
    match classify(field) {
        Some(rule) => rule.evaluate(field, doc, messages),
        None => ValidationResult::unvalidated(),
    }
}
