mod common;

use common::{FORM, FakeDocument};
use formcheck::{
    BindError, Category, ErrorSummary, FailureKind, FailureRecord, FieldKind, ValidatorConfig,
    resolve_label,
};

fn record(field_id: &str, kind: FieldKind, message: &str) -> FailureRecord {
    FailureRecord {
        field_id: field_id.to_string(),
        field_kind: kind,
        category: Category::Input,
        failure: FailureKind::MissingValue,
        message: message.to_string(),
    }
}

// ============================================================================
// Label resolution
// ============================================================================

#[test]
fn test_text_field_uses_label() {
    let doc = FakeDocument::new().with_label("name", "  Full name: ");
    let config = ValidatorConfig::default();
    assert_eq!(
        resolve_label(&doc, "name", FieldKind::Text, &config),
        "Full name"
    );
}

#[test]
fn test_text_field_without_label_uses_placeholder() {
    let doc = FakeDocument::new();
    let config = ValidatorConfig::default();
    assert_eq!(
        resolve_label(&doc, "name", FieldKind::Text, &config),
        "field"
    );
}

#[test]
fn test_choice_uses_container_caption() {
    let doc = FakeDocument::new()
        .with_container("red", "colors")
        .with_caption("colors", "Favourite colour?")
        .with_label("red", "Red");
    let config = ValidatorConfig::default();
    assert_eq!(
        resolve_label(&doc, "red", FieldKind::Radio, &config),
        "Favourite colour"
    );
}

#[test]
fn test_choice_in_captionless_container_uses_placeholder() {
    let doc = FakeDocument::new()
        .with_container("red", "colors")
        .with_label("red", "Red");
    let config = ValidatorConfig::default();
    assert_eq!(
        resolve_label(&doc, "red", FieldKind::Radio, &config),
        "option"
    );
}

#[test]
fn test_choice_outside_container_falls_back_to_label() {
    let doc = FakeDocument::new().with_label("terms", "I agree.");
    let config = ValidatorConfig::default();
    assert_eq!(
        resolve_label(&doc, "terms", FieldKind::Checkbox, &config),
        "I agree"
    );
    assert_eq!(
        resolve_label(&doc, "other", FieldKind::Checkbox, &config),
        "option"
    );
}

#[test]
fn test_placeholders_are_configurable() {
    let doc = FakeDocument::new();
    let config = ValidatorConfig::default().placeholders("Campo", "Opção");
    assert_eq!(resolve_label(&doc, "x", FieldKind::Email, &config), "Campo");
    assert_eq!(resolve_label(&doc, "x", FieldKind::Radio, &config), "Opção");
}

// ============================================================================
// Summary lifecycle
// ============================================================================

#[test]
fn test_create_inserts_hidden_summary() {
    let mut doc = FakeDocument::new();
    let config = ValidatorConfig::default();
    let summary = ErrorSummary::create(&mut doc, FORM, &config).unwrap();

    let layout = doc.summary.clone().unwrap();
    assert_eq!(&layout, summary.layout());
    assert_eq!(layout.heading_text, "There are errors in the form");
    assert!(!doc.is_visible(&layout.container_id));
}

#[test]
fn test_create_fails_without_form() {
    let mut doc = FakeDocument::new();
    let config = ValidatorConfig::default();
    let result = ErrorSummary::create(&mut doc, "missing", &config);
    assert!(matches!(result, Err(BindError::SummaryInsertFailed { .. })));
}

#[test]
fn test_rebuild_renders_entries_in_order() {
    let mut doc = FakeDocument::new()
        .with_label("name", "Name")
        .with_label("mail", "E-mail");
    let config = ValidatorConfig::default();
    let summary = ErrorSummary::create(&mut doc, FORM, &config).unwrap();

    let failures = vec![
        record("name", FieldKind::Text, "please fill out this field."),
        record("mail", FieldKind::Email, "invalid e-mail."),
    ];
    let entries = summary.rebuild(&mut doc, &failures, &config);

    assert_eq!(entries, doc.entries);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Name: please fill out this field.");
    assert_eq!(entries[0].href, "#name");
    assert_eq!(entries[1].text, "Email: invalid e-mail.");
    assert_eq!(entries[1].href, "#mail");

    assert!(doc.is_visible(&config.summary_id));
    assert_eq!(doc.focused.as_deref(), Some(config.heading_id.as_str()));
}

#[test]
fn test_rebuild_replaces_previous_entries() {
    let mut doc = FakeDocument::new();
    let config = ValidatorConfig::default();
    let summary = ErrorSummary::create(&mut doc, FORM, &config).unwrap();

    let first = [
        record("a", FieldKind::Text, "m"),
        record("b", FieldKind::Text, "m"),
    ];
    summary.rebuild(&mut doc, &first, &config);
    let second = [record("b", FieldKind::Text, "m")];
    summary.rebuild(&mut doc, &second, &config);

    assert_eq!(doc.entries.len(), 1);
    assert_eq!(doc.entries[0].field_id, "b");
}

#[test]
fn test_rebuild_with_no_failures_hides() {
    let mut doc = FakeDocument::new();
    let config = ValidatorConfig::default();
    let summary = ErrorSummary::create(&mut doc, FORM, &config).unwrap();

    let failures = [record("a", FieldKind::Text, "m")];
    summary.rebuild(&mut doc, &failures, &config);
    doc.focused = None;
    let entries = summary.rebuild(&mut doc, &[], &config);

    assert!(entries.is_empty());
    assert!(doc.entries.is_empty());
    assert!(!doc.is_visible(&config.summary_id));
    assert_eq!(doc.focused, None);
}
