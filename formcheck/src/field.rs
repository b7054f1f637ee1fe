//! The engine's view of one form control.

/// What kind of control a field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any text-like input (text, password, tel, number, ...).
    Text,
    Email,
    Checkbox,
    Radio,
    SelectOne,
    SelectMultiple,
}

impl FieldKind {
    /// Checkboxes and radios: fields that can belong to a named group.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

/// A snapshot of a form control's state, as read from the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Current raw value. Empty for unchecked choices without a value.
    pub value: String,
    /// Checked state of a checkbox or radio.
    pub checked: bool,
    /// The control's `name`, shared by the members of a radio set.
    pub group: Option<String>,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            required: false,
            value: String::new(),
            checked: false,
            group: None,
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text)
    }

    pub fn email(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Email)
    }

    pub fn checkbox(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Checkbox).group(group)
    }

    pub fn radio(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Radio).group(group)
    }

    pub fn select(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::SelectOne)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// The group this field is deduplicated under during a submission pass.
    /// Only named checkboxes and radios have one. Unnamed choices are never
    /// grouped, so each one reports its own failure instead of collapsing
    /// into a single entry.
    pub fn dedup_group(&self) -> Option<&str> {
        if self.kind.is_choice() {
            self.group.as_deref()
        } else {
            None
        }
    }
}
