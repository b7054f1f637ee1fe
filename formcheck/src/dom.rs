//! `HostDocument` for the in-memory `formdom` document.

use formdom::element::collect;
use formdom::{Document, Element, InputType, Tag};

use crate::field::{Field, FieldKind};
use crate::host::{HostDocument, SummaryEntry, SummaryLayout};

const ARIA_INVALID: &str = "aria-invalid";

/// Read a control element as a field. None for non-controls.
pub fn to_field(el: &Element) -> Option<Field> {
    let kind = match &el.tag {
        Tag::Input { input_type, .. } => match input_type {
            InputType::Email => FieldKind::Email,
            InputType::Checkbox => FieldKind::Checkbox,
            InputType::Radio => FieldKind::Radio,
            _ => FieldKind::Text,
        },
        Tag::Select { multiple, .. } if *multiple => FieldKind::SelectMultiple,
        Tag::Select { .. } => FieldKind::SelectOne,
        _ => return None,
    };

    Some(Field {
        id: el.id.clone(),
        kind,
        required: el.tag.required(),
        value: el.tag.value().unwrap_or_default(),
        checked: el.tag.checked(),
        group: el.tag.name().map(str::to_string),
    })
}

impl HostDocument for Document {
    fn form_fields(&self, form_id: &str) -> Option<Vec<Field>> {
        let controls = self.controls_in(form_id)?;
        Some(controls.into_iter().filter_map(to_field).collect())
    }

    fn field(&self, id: &str) -> Option<Field> {
        self.get(id).and_then(to_field)
    }

    fn group_members(&self, group: &str) -> Vec<Field> {
        self.elements_by_name(group)
            .into_iter()
            .filter_map(to_field)
            .collect()
    }

    fn label_text(&self, field_id: &str) -> Option<String> {
        self.label_for(field_id).map(Element::text_content)
    }

    fn grouping_container(&self, field_id: &str) -> Option<String> {
        self.closest(field_id, |el| el.tag == Tag::Fieldset)
            .map(|fieldset| fieldset.id.clone())
    }

    fn caption(&self, container_id: &str) -> Option<String> {
        let container = self.get(container_id)?;
        collect(container, &|el: &Element| el.tag == Tag::Legend)
            .first()
            .map(|legend| legend.text_content())
    }

    fn contains(&self, id: &str) -> bool {
        Document::contains(self, id)
    }

    fn insert_summary(&mut self, form_id: &str, layout: &SummaryLayout) -> bool {
        let summary = Element::div()
            .id(&layout.container_id)
            .child(
                Element::heading(&layout.heading_text)
                    .id(&layout.heading_id)
                    .focusable(true),
            )
            .child(Element::list().id(&layout.list_id));
        self.insert_first_child(form_id, summary)
    }

    fn set_summary_entries(&mut self, list_id: &str, entries: &[SummaryEntry]) -> bool {
        let items = entries
            .iter()
            .map(|entry| {
                let link = Element::link(&entry.href, &entry.text);
                Element::list_item().child(link)
            })
            .collect();
        self.replace_children(list_id, items)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        self.set_hidden(id, !visible)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        Document::set_text(self, id, text)
    }

    fn set_invalid(&mut self, id: &str, invalid: bool) -> bool {
        self.set_attr(id, ARIA_INVALID, invalid.to_string())
    }

    fn focus(&mut self, id: &str) -> bool {
        Document::focus(self, id)
    }
}
