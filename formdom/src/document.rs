//! A mutable document built around one root element.

use serde::Deserialize;

use crate::element::{
    Content, Element, InputType, Tag, collect, find_element, find_element_mut, find_path, walk_mut,
};
use crate::focus::FocusState;

/// An element tree plus the document-level state that goes with it (focus).
///
/// Lookups mirror what a browser document offers: by ID, by `name`, the
/// `<label for=..>` of a control and the nearest matching ancestor.
#[derive(Debug, Default)]
pub struct Document {
    root: Element,
    focus: FocusState,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All input and select controls inside the element `container_id`, in
    /// document order. None if the container does not exist.
    pub fn controls_in(&self, container_id: &str) -> Option<Vec<&Element>> {
        let container = self.get(container_id)?;
        Some(collect(container, &|el: &Element| el.tag.is_control()))
    }

    /// All controls in the document whose `name` is `name`.
    pub fn elements_by_name(&self, name: &str) -> Vec<&Element> {
        collect(&self.root, &|el: &Element| el.tag.name() == Some(name))
    }

    /// The first `<label>` whose `for` points at `id`.
    ///
    /// Only labels inside the form enclosing `id` are considered; a control
    /// outside any form is matched against the whole document.
    pub fn label_for(&self, id: &str) -> Option<&Element> {
        let form = self.closest(id, |el| el.tag == Tag::Form);
        let scope = form.unwrap_or(&self.root);
        let is_label = |el: &Element| matches!(&el.tag, Tag::Label { for_id } if for_id == id);
        collect(scope, &is_label).into_iter().next()
    }

    /// The element itself or its nearest ancestor matching `pred`.
    pub fn closest(&self, id: &str, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        let path = find_path(&self.root, id)?;
        path.into_iter().rev().find(|el| pred(el))
    }

    /// Insert `child` as the first child of `parent_id`.
    /// Returns false if the parent does not exist.
    pub fn insert_first_child(&mut self, parent_id: &str, child: Element) -> bool {
        let Some(parent) = self.get_mut(parent_id) else {
            log::debug!("insert_first_child: no parent '{}'", parent_id);
            return false;
        };
        match &mut parent.content {
            Content::Children(children) => children.insert(0, child),
            _ => parent.content = Content::Children(vec![child]),
        }
        true
    }

    /// Replace the children of `parent_id`.
    pub fn replace_children(&mut self, parent_id: &str, children: Vec<Element>) -> bool {
        match self.get_mut(parent_id) {
            Some(parent) => {
                parent.content = Content::Children(children);
                true
            }
            None => false,
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Replace the content of `id` with plain text (`textContent = ..`).
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                let text = text.into();
                el.content = if text.is_empty() {
                    Content::None
                } else {
                    Content::Text(text)
                };
                true
            }
            None => false,
        }
    }

    pub fn set_attr(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.attrs.insert(key.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    // Focus

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to `id`. Only controls and elements marked focusable accept
    /// focus; anything else leaves focus where it was.
    pub fn focus(&mut self, id: &str) -> bool {
        let accepts = self
            .get(id)
            .is_some_and(|el| el.focusable || el.tag.is_control());
        if !accepts {
            log::debug!("focus: '{}' is missing or not focusable", id);
            return false;
        }
        self.focus.focus(id);
        true
    }

    /// Drop focus, returning the element that lost it.
    pub fn blur(&mut self) -> Option<String> {
        self.focus.blur()
    }

    // User edits

    /// Type a value into an input control.
    pub fn set_value(&mut self, id: &str, new_value: impl Into<String>) -> bool {
        match self.get_mut(id).map(|el| &mut el.tag) {
            Some(Tag::Input { value, .. }) => {
                *value = new_value.into();
                true
            }
            _ => false,
        }
    }

    /// Check or uncheck a checkbox or radio. Checking a radio unchecks the
    /// other radios sharing its name.
    pub fn set_checked(&mut self, id: &str, is_checked: bool) -> bool {
        let group = match self.get(id).map(|el| &el.tag) {
            Some(Tag::Input {
                input_type: InputType::Radio,
                name,
                ..
            }) if is_checked => name.clone(),
            Some(Tag::Input { .. }) => None,
            _ => return false,
        };

        if let Some(group) = group {
            walk_mut(&mut self.root, &mut |el: &mut Element| {
                if let Tag::Input {
                    input_type: InputType::Radio,
                    name: Some(name),
                    checked,
                    ..
                } = &mut el.tag
                {
                    if *name == group {
                        *checked = false;
                    }
                }
            });
        }

        if let Some(Tag::Input { checked, .. }) = self.get_mut(id).map(|el| &mut el.tag) {
            *checked = is_checked;
        }
        true
    }

    /// Select the options whose values are in `values`, deselecting the rest.
    /// A single select keeps only the first match.
    pub fn select_options(&mut self, id: &str, values: &[&str]) -> bool {
        match self.get_mut(id).map(|el| &mut el.tag) {
            Some(Tag::Select {
                multiple, options, ..
            }) => {
                let mut picked = false;
                for option in options.iter_mut() {
                    let wanted = values.contains(&option.value.as_str());
                    option.selected = wanted && (*multiple || !picked);
                    picked |= option.selected;
                }
                true
            }
            _ => false,
        }
    }

    /// Apply one user edit.
    pub fn apply(&mut self, edit: &Edit) -> bool {
        match edit {
            Edit::Value { id, value } => self.set_value(id, value.as_str()),
            Edit::Check { id, checked } => self.set_checked(id, *checked),
            Edit::Select { id, values } => {
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                self.select_options(id, &values)
            }
        }
    }
}

/// A user interaction that changes the state of a control.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Edit {
    Value { id: String, value: String },
    Check { id: String, checked: bool },
    Select { id: String, values: Vec<String> },
}
