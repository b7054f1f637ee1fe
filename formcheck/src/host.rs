//! The capability the engine uses to read and update the host document.

use crate::field::Field;

/// Element IDs of the error summary's parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLayout {
    pub container_id: String,
    pub heading_id: String,
    pub heading_text: String,
    pub list_id: String,
}

/// One rendered line of the error summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Field the entry points at.
    pub field_id: String,
    /// Visible text, `"<label>: <message>"`.
    pub text: String,
    /// Anchor target, `"#<field_id>"`.
    pub href: String,
}

/// Document access required by the validation engine.
///
/// Every mutating method returns `false` when its target element does not
/// exist; the engine never treats that as fatal.
pub trait HostDocument {
    /// The validable fields (input and select controls) inside the form
    /// `form_id`, in document order. None if there is no such form.
    fn form_fields(&self, form_id: &str) -> Option<Vec<Field>>;

    /// The current state of the field `id`.
    fn field(&self, id: &str) -> Option<Field>;

    /// Every field in the document whose group name is `group`.
    fn group_members(&self, group: &str) -> Vec<Field>;

    /// Text of the label attached to the field, if any.
    fn label_text(&self, field_id: &str) -> Option<String>;

    /// ID of the nearest grouping container (fieldset) enclosing the field.
    fn grouping_container(&self, field_id: &str) -> Option<String>;

    /// Caption (legend) text of a grouping container, if it has one.
    fn caption(&self, container_id: &str) -> Option<String>;

    fn contains(&self, id: &str) -> bool;

    /// Create the summary container described by `layout` as the first child
    /// of the form.
    fn insert_summary(&mut self, form_id: &str, layout: &SummaryLayout) -> bool;

    /// Replace the summary list's content with `entries`.
    fn set_summary_entries(&mut self, list_id: &str, entries: &[SummaryEntry]) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Set the accessibility-invalid marker (`aria-invalid`) of an element.
    fn set_invalid(&mut self, id: &str, invalid: bool) -> bool;

    fn focus(&mut self, id: &str) -> bool;
}
