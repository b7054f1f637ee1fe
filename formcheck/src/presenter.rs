//! Inline error display next to each field.

use crate::host::HostDocument;
use crate::result::ValidationResult;

/// Shows and hides the inline error element of a field.
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    prefix: String,
}

impl ErrorPresenter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// ID of the inline error element for `field_id`.
    pub fn error_id(&self, field_id: &str) -> String {
        format!("{}{}", self.prefix, field_id)
    }

    /// Reflect `result` on the field's inline error element and its
    /// `aria-invalid` marker.
    ///
    /// Returns false, touching nothing, when the field has no inline error
    /// element.
    pub fn present(
        &self,
        doc: &mut dyn HostDocument,
        field_id: &str,
        result: &ValidationResult,
    ) -> bool {
        let error_id = self.error_id(field_id);
        if !doc.contains(&error_id) {
            log::debug!(
                "No inline error element '{}' for field '{}'",
                error_id,
                field_id
            );
            return false;
        }

        let invalid = !result.is_valid();
        let text: &str = if invalid { &result.message } else { "" };
        doc.set_visible(&error_id, invalid);
        doc.set_text(&error_id, text);
        doc.set_invalid(field_id, invalid);
        true
    }
}
