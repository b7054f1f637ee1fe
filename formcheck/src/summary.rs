//! The aggregated, navigable list of errors at the top of the form.

use crate::config::ValidatorConfig;
use crate::error::BindError;
use crate::field::FieldKind;
use crate::host::{HostDocument, SummaryEntry, SummaryLayout};
use crate::normalize::normalize;
use crate::result::FailureRecord;

/// Handle to the summary container inserted into the form.
#[derive(Debug, Clone)]
pub struct ErrorSummary {
    layout: SummaryLayout,
}

impl ErrorSummary {
    /// Insert a hidden, empty summary as the first child of `form_id`.
    pub fn create(
        doc: &mut dyn HostDocument,
        form_id: &str,
        config: &ValidatorConfig,
    ) -> Result<Self, BindError> {
        let layout = SummaryLayout {
            container_id: config.summary_id.clone(),
            heading_id: config.heading_id.clone(),
            heading_text: config.heading_text.clone(),
            list_id: config.list_id.clone(),
        };

        if !doc.insert_summary(form_id, &layout) {
            return Err(BindError::SummaryInsertFailed {
                form_id: form_id.to_string(),
                summary_id: layout.container_id,
            });
        }
        doc.set_visible(&layout.container_id, false);

        Ok(Self { layout })
    }

    pub fn layout(&self) -> &SummaryLayout {
        &self.layout
    }

    /// Replace the summary's entries with one per failure, in order.
    ///
    /// The summary is shown and its heading focused when there are failures,
    /// and hidden otherwise. Returns the rendered entries.
    pub fn rebuild(
        &self,
        doc: &mut dyn HostDocument,
        failures: &[FailureRecord],
        config: &ValidatorConfig,
    ) -> Vec<SummaryEntry> {
        let entries: Vec<SummaryEntry> = failures
            .iter()
            .map(|failure| {
                let label = resolve_label(&*doc, &failure.field_id, failure.field_kind, config);
                SummaryEntry {
                    field_id: failure.field_id.clone(),
                    text: format!("{}: {}", label, failure.message),
                    href: format!("#{}", failure.field_id),
                }
            })
            .collect();

        doc.set_summary_entries(&self.layout.list_id, &entries);

        if entries.is_empty() {
            self.hide(doc);
        } else {
            doc.set_visible(&self.layout.container_id, true);
            if !doc.focus(&self.layout.heading_id) {
                log::debug!(
                    "Could not focus summary heading '{}'",
                    self.layout.heading_id
                );
            }
        }

        entries
    }

    pub fn hide(&self, doc: &mut dyn HostDocument) {
        doc.set_visible(&self.layout.container_id, false);
    }
}

/// The text a summary entry uses to name a field.
///
/// Checkboxes and radios are named by the caption of their grouping
/// container, falling back to their own label and then to the choice
/// placeholder; a container without a caption yields the placeholder
/// directly. Every other field is named by its label or the label
/// placeholder.
pub fn resolve_label(
    doc: &dyn HostDocument,
    field_id: &str,
    kind: FieldKind,
    config: &ValidatorConfig,
) -> String {
    let text = if kind.is_choice() {
        let name = match doc.grouping_container(field_id) {
            Some(container) => doc.caption(&container),
            None => doc.label_text(field_id),
        };
        name.unwrap_or_else(|| config.choice_placeholder.clone())
    } else {
        doc.label_text(field_id)
            .unwrap_or_else(|| config.label_placeholder.clone())
    };
    normalize(&text)
}
