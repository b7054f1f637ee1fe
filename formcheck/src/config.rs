//! Engine configuration: element IDs, fixed texts and error messages.

use serde::Deserialize;

/// Messages shown for each kind of failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Required checkbox left unchecked.
    pub checkbox_required: String,
    /// Required radio group or select without a choice.
    pub option_required: String,
    /// Required text-like field left empty.
    pub value_required: String,
    /// Email field with a malformed address.
    pub invalid_email: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            checkbox_required: "this field is required.".to_string(),
            option_required: "please select an option.".to_string(),
            value_required: "please fill out this field.".to_string(),
            invalid_email: "please enter a valid e-mail address.".to_string(),
        }
    }
}

/// Configuration for one bound form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// The inline error element of field `x` has the ID `<prefix>x`.
    pub error_id_prefix: String,

    /// ID of the summary container inserted at the top of the form.
    pub summary_id: String,
    /// ID of the summary heading (receives focus when errors are shown).
    pub heading_id: String,
    /// ID of the summary's entry list.
    pub list_id: String,
    pub heading_text: String,

    /// Summary label for a field without a label.
    pub label_placeholder: String,
    /// Summary label for a checkbox or radio that has no caption or label.
    pub choice_placeholder: String,

    pub messages: Messages,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            error_id_prefix: "error-".to_string(),
            summary_id: "error-summary".to_string(),
            heading_id: "error-summary-heading".to_string(),
            list_id: "error-summary-list".to_string(),
            heading_text: "There are errors in the form".to_string(),
            label_placeholder: "field".to_string(),
            choice_placeholder: "option".to_string(),
            messages: Messages::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix used to find inline error elements.
    pub fn error_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_id_prefix = prefix.into();
        self
    }

    /// Set the summary container, heading and list IDs.
    pub fn summary_ids(
        mut self,
        container: impl Into<String>,
        heading: impl Into<String>,
        list: impl Into<String>,
    ) -> Self {
        self.summary_id = container.into();
        self.heading_id = heading.into();
        self.list_id = list.into();
        self
    }

    pub fn heading_text(mut self, text: impl Into<String>) -> Self {
        self.heading_text = text.into();
        self
    }

    pub fn placeholders(mut self, label: impl Into<String>, choice: impl Into<String>) -> Self {
        self.label_placeholder = label.into();
        self.choice_placeholder = choice.into();
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
