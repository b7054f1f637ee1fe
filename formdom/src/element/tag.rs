use serde::Deserialize;

/// The `type` of an input control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
    Tel,
    Url,
    Number,
    Date,
    Checkbox,
    Radio,
    Hidden,
    Submit,
    /// Any type the document model does not distinguish.
    #[serde(other)]
    Other,
}

/// One `<option>` of a select control.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// What kind of node an element is, with the state specific to that kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Tag {
    #[default]
    Div,
    Span,
    Form,
    Fieldset,
    Legend,
    Heading,
    List,
    ListItem,
    Label {
        #[serde(rename = "for")]
        for_id: String,
    },
    Link {
        href: String,
    },
    Input {
        #[serde(rename = "type", default)]
        input_type: InputType,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        value: String,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        required: bool,
    },
    Select {
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        options: Vec<SelectOption>,
    },
}

impl Tag {
    /// Input and select elements are the form controls.
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Select { .. })
    }

    /// The `name` attribute of a control.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Input { name, .. } | Self::Select { name, .. } => name.as_deref(),
            _ => None,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Self::Input { required, .. } | Self::Select { required, .. } => *required,
            _ => false,
        }
    }

    /// The current value of a control.
    ///
    /// A select reports its first selected option. A single select with
    /// nothing explicitly selected falls back to its first option, the way
    /// browsers display it.
    pub fn value(&self) -> Option<String> {
        match self {
            Self::Input { value, .. } => Some(value.clone()),
            Self::Select {
                multiple, options, ..
            } => {
                let selected = options.iter().find(|o| o.selected);
                let shown = match selected {
                    Some(option) => Some(option),
                    None if !*multiple => options.first(),
                    None => None,
                };
                Some(shown.map(|o| o.value.clone()).unwrap_or_default())
            }
            _ => None,
        }
    }

    pub fn checked(&self) -> bool {
        matches!(self, Self::Input { checked: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(multiple: bool, options: Vec<SelectOption>) -> Tag {
        Tag::Select {
            multiple,
            name: None,
            required: true,
            options,
        }
    }

    #[test]
    fn test_single_select_defaults_to_first_option() {
        let options = vec![
            SelectOption::new("", "Choose"),
            SelectOption::new("pt", "Portugal"),
        ];
        let tag = select(false, options);
        assert_eq!(tag.value().as_deref(), Some(""));
    }

    #[test]
    fn test_select_reports_selected_option() {
        let options = vec![
            SelectOption::new("", "Choose"),
            SelectOption::new("pt", "Portugal").selected(true),
        ];
        let tag = select(false, options);
        assert_eq!(tag.value().as_deref(), Some("pt"));
    }

    #[test]
    fn test_multiple_select_without_selection_is_empty() {
        let options = vec![SelectOption::new("a", "A"), SelectOption::new("b", "B")];
        let tag = select(true, options);
        assert_eq!(tag.value().as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_input_type_deserializes_as_other() {
        let kind: InputType = serde_json::from_str("\"color\"").unwrap();
        assert_eq!(kind, InputType::Other);
    }
}
