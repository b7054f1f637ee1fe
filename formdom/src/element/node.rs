use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

use super::{Content, InputType, SelectOption, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Element {
    // Identity
    pub id: String,

    // Kind and kind-specific state
    #[serde(flatten)]
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation
    pub hidden: bool,
    /// Whether the element can receive programmatic focus (`tabindex="-1"`).
    pub focusable: bool,

    // Free-form attributes (`aria-invalid`, ...)
    pub attrs: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            hidden: false,
            focusable: false,
            attrs: BTreeMap::new(),
        }
    }
}

impl Element {
    fn tagged(prefix: &str, tag: Tag) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::tagged("div", Tag::Div)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::tagged("span", Tag::Span).text(text)
    }

    pub fn form() -> Self {
        Self::tagged("form", Tag::Form)
    }

    pub fn fieldset() -> Self {
        Self::tagged("fieldset", Tag::Fieldset)
    }

    pub fn legend(text: impl Into<String>) -> Self {
        Self::tagged("legend", Tag::Legend).text(text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::tagged("heading", Tag::Heading).text(text)
    }

    pub fn list() -> Self {
        Self::tagged("list", Tag::List)
    }

    pub fn list_item() -> Self {
        Self::tagged("li", Tag::ListItem)
    }

    /// Create a label pointing at the control with id `for_id`.
    pub fn label(for_id: impl Into<String>, text: impl Into<String>) -> Self {
        let tag = Tag::Label {
            for_id: for_id.into(),
        };
        Self::tagged("label", tag).text(text)
    }

    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        let tag = Tag::Link { href: href.into() };
        Self::tagged("link", tag).text(text)
    }

    /// Create an input control of the given type.
    pub fn input(input_type: InputType) -> Self {
        let tag = Tag::Input {
            input_type,
            name: None,
            value: String::new(),
            checked: false,
            required: false,
        };
        Self::tagged("input", tag)
    }

    pub fn text_input() -> Self {
        Self::input(InputType::Text)
    }

    pub fn email_input() -> Self {
        Self::input(InputType::Email)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::input(InputType::Checkbox).name(name)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Radio).name(name).value(value)
    }

    pub fn select(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let tag = Tag::Select {
            multiple: false,
            name: None,
            required: false,
            options: options.into_iter().collect(),
        };
        Self::tagged("select", tag)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Control state
    pub fn name(mut self, new_name: impl Into<String>) -> Self {
        if let Tag::Input { name, .. } | Tag::Select { name, .. } = &mut self.tag {
            *name = Some(new_name.into());
        }
        self
    }

    pub fn required(mut self, is_required: bool) -> Self {
        if let Tag::Input { required, .. } | Tag::Select { required, .. } = &mut self.tag {
            *required = is_required;
        }
        self
    }

    pub fn value(mut self, new_value: impl Into<String>) -> Self {
        if let Tag::Input { value, .. } = &mut self.tag {
            *value = new_value.into();
        }
        self
    }

    pub fn checked(mut self, is_checked: bool) -> Self {
        if let Tag::Input { checked, .. } = &mut self.tag {
            *checked = is_checked;
        }
        self
    }

    pub fn multiple(mut self, is_multiple: bool) -> Self {
        if let Tag::Select { multiple, .. } = &mut self.tag {
            *multiple = is_multiple;
        }
        self
    }

    // Presentation
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
