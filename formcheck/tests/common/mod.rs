//! A hand-written `HostDocument` that records every change made to it.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use formcheck::{Field, HostDocument, SummaryEntry, SummaryLayout};

pub const FORM: &str = "form";

#[derive(Debug, Default)]
pub struct FakeDocument {
    pub form_id: String,
    pub fields: Vec<Field>,
    pub labels: HashMap<String, String>,
    /// field id -> grouping container id
    pub containers: HashMap<String, String>,
    /// container id -> caption
    pub captions: HashMap<String, String>,
    /// Plain elements that exist in the document (inline error targets, ...).
    pub elements: HashSet<String>,
    pub visible: HashMap<String, bool>,
    pub texts: HashMap<String, String>,
    pub invalid: HashMap<String, bool>,
    pub focused: Option<String>,
    pub summary: Option<SummaryLayout>,
    pub entries: Vec<SummaryEntry>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            form_id: FORM.to_string(),
            ..Default::default()
        }
    }

    /// Add a field together with its inline error element `error-<id>`.
    pub fn with_field(mut self, field: Field) -> Self {
        self.elements.insert(format!("error-{}", field.id));
        self.fields.push(field);
        self
    }

    /// Add a field without an inline error element.
    pub fn with_bare_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_label(mut self, field_id: &str, text: &str) -> Self {
        self.labels.insert(field_id.to_string(), text.to_string());
        self
    }

    pub fn with_container(mut self, field_id: &str, container_id: &str) -> Self {
        self.containers
            .insert(field_id.to_string(), container_id.to_string());
        self.elements.insert(container_id.to_string());
        self
    }

    pub fn with_caption(mut self, container_id: &str, caption: &str) -> Self {
        self.captions
            .insert(container_id.to_string(), caption.to_string());
        self
    }

    pub fn field_mut(&mut self, id: &str) -> &mut Field {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .expect("unknown field")
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    pub fn text_of(&self, id: &str) -> &str {
        self.texts.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn is_invalid(&self, id: &str) -> Option<bool> {
        self.invalid.get(id).copied()
    }
}

impl HostDocument for FakeDocument {
    fn form_fields(&self, form_id: &str) -> Option<Vec<Field>> {
        (form_id == self.form_id).then(|| self.fields.clone())
    }

    fn field(&self, id: &str) -> Option<Field> {
        self.fields.iter().find(|f| f.id == id).cloned()
    }

    fn group_members(&self, group: &str) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|f| f.group.as_deref() == Some(group))
            .cloned()
            .collect()
    }

    fn label_text(&self, field_id: &str) -> Option<String> {
        self.labels.get(field_id).cloned()
    }

    fn grouping_container(&self, field_id: &str) -> Option<String> {
        self.containers.get(field_id).cloned()
    }

    fn caption(&self, container_id: &str) -> Option<String> {
        self.captions.get(container_id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        id == self.form_id || self.elements.contains(id) || self.fields.iter().any(|f| f.id == id)
    }

    fn insert_summary(&mut self, form_id: &str, layout: &SummaryLayout) -> bool {
        if form_id != self.form_id {
            return false;
        }
        self.elements.insert(layout.container_id.clone());
        self.elements.insert(layout.heading_id.clone());
        self.elements.insert(layout.list_id.clone());
        self.summary = Some(layout.clone());
        true
    }

    fn set_summary_entries(&mut self, list_id: &str, entries: &[SummaryEntry]) -> bool {
        if !self.elements.contains(list_id) {
            return false;
        }
        self.entries = entries.to_vec();
        true
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.visible.insert(id.to_string(), visible);
        true
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.texts.insert(id.to_string(), text.to_string());
        true
    }

    fn set_invalid(&mut self, id: &str, invalid: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.invalid.insert(id.to_string(), invalid);
        true
    }

    fn focus(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }
}
