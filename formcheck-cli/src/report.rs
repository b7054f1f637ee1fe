//! Plain-text rendering of what the engine left in the document.

use formcheck::{FormValidator, SubmitOutcome, ValidationResult};
use formdom::{Document, Tag};

pub fn blur_line(field_id: &str, result: Option<&ValidationResult>) -> String {
    match result {
        None => format!("blur {field_id}: not a field of this form"),
        Some(result) if result.is_valid() => format!("blur {field_id}: ok"),
        Some(result) => format!("blur {field_id}: {}", result.message),
    }
}

/// The submission verdict followed by the rendered summary entries.
pub fn submit_lines(validator: &FormValidator<Document>, outcome: &SubmitOutcome) -> Vec<String> {
    if outcome.is_allowed() {
        return vec!["submission allowed".to_string()];
    }

    let count = outcome.failures().len();
    let mut lines = vec![format!("submission blocked: {count} error(s)")];

    let doc = validator.document();
    let config = validator.config();
    if let Some(heading) = doc.get(&config.heading_id) {
        lines.push(heading.text_content());
    }
    if let Some(list) = doc.get(&config.list_id) {
        for item in list.content.children() {
            for link in item.content.children() {
                if let Tag::Link { href } = &link.tag {
                    let text = link.text_content();
                    lines.push(format!("  - {text} ({href})"));
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use formcheck::{Category, FailureKind, ValidatorConfig};
    use formdom::Element;

    use super::*;

    fn signup() -> FormValidator<Document> {
        let form = Element::form()
            .id("signup")
            .child(Element::label("name", "Name"))
            .child(Element::text_input().id("name").required(true))
            .child(Element::span("").id("error-name"));
        let doc = Document::new(form);
        let config = ValidatorConfig::default();
        FormValidator::bind(doc, "signup", config).unwrap()
    }

    #[test]
    fn test_blur_lines() {
        assert_eq!(blur_line("x", None), "blur x: not a field of this form");

        let passed = ValidationResult::passed(Category::Input);
        assert_eq!(blur_line("x", Some(&passed)), "blur x: ok");

        let failed = ValidationResult::failed(
            Category::Select,
            FailureKind::MissingSelection,
            "pick one",
        );
        assert_eq!(blur_line("x", Some(&failed)), "blur x: pick one");
    }

    #[test]
    fn test_submit_lines_blocked() {
        let mut validator = signup();
        let outcome = validator.on_submit();
        assert_eq!(
            submit_lines(&validator, &outcome),
            vec![
                "submission blocked: 1 error(s)",
                "There are errors in the form",
                "  - Name: please fill out this field. (#name)",
            ]
        );
    }

    #[test]
    fn test_submit_lines_allowed() {
        let mut validator = signup();
        validator.document_mut().set_value("name", "Ana");
        let outcome = validator.on_submit();
        assert_eq!(
            submit_lines(&validator, &outcome),
            vec!["submission allowed"]
        );
    }
}
