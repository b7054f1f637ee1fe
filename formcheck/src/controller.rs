//! Submission and blur handling for one bound form.

use std::collections::HashSet;

use crate::classify::validate_field;
use crate::config::ValidatorConfig;
use crate::error::BindError;
use crate::host::HostDocument;
use crate::presenter::ErrorPresenter;
use crate::result::{FailureRecord, ValidationResult};
use crate::summary::ErrorSummary;

/// Where the controller is in handling a submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No attempt has been handled yet.
    #[default]
    Idle,
    /// A validation pass is running.
    Validating,
    /// The last attempt failed; submission was prevented and the summary shown.
    Blocked,
    /// The last attempt passed; submission proceeds.
    Allowed,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the default submit action should run.
    Allowed,
    /// At least one field failed; the default submit action must be cancelled.
    Blocked(Vec<FailureRecord>),
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Whether the host must cancel the default submit action.
    pub fn prevents_default(&self) -> bool {
        !self.is_allowed()
    }

    pub fn failures(&self) -> &[FailureRecord] {
        match self {
            Self::Allowed => &[],
            Self::Blocked(failures) => failures,
        }
    }
}

/// Group names that already produced a failure during one submission pass.
#[derive(Debug, Default)]
struct ProcessedGroups(HashSet<String>);

impl ProcessedGroups {
    fn contains(&self, group: &str) -> bool {
        self.0.contains(group)
    }

    fn insert(&mut self, group: &str) {
        self.0.insert(group.to_string());
    }
}

/// Validation engine bound to one form of a host document.
///
/// # Example
///
/// ```ignore
/// let mut validator = FormValidator::bind(document, "signup", ValidatorConfig::default())?;
///
/// // On blur of a field
/// validator.on_blur("email");
///
/// // On submit
/// if validator.on_submit().prevents_default() {
///     // Keep the user on the form; the summary is shown and focused.
/// }
/// ```
pub struct FormValidator<D: HostDocument> {
    document: D,
    form_id: String,
    /// Field IDs discovered at bind time, in document order.
    fields: Vec<String>,
    config: ValidatorConfig,
    presenter: ErrorPresenter,
    summary: ErrorSummary,
    state: SubmissionState,
}

impl<D: HostDocument> FormValidator<D> {
    /// Attach to the form `form_id` of `document`.
    ///
    /// Snapshots the form's fields and inserts the (hidden) error summary.
    /// Fields added to the form afterwards are not validated.
    pub fn bind(
        mut document: D,
        form_id: impl Into<String>,
        config: ValidatorConfig,
    ) -> Result<Self, BindError> {
        let form_id = form_id.into();
        let fields: Vec<String> = document
            .form_fields(&form_id)
            .ok_or_else(|| BindError::FormNotFound(form_id.clone()))?
            .into_iter()
            .map(|field| field.id)
            .collect();

        let summary = ErrorSummary::create(&mut document, &form_id, &config)?;
        let presenter = ErrorPresenter::new(config.error_id_prefix.clone());

        log::debug!("Bound form '{}' with {} fields", form_id, fields.len());

        Ok(Self {
            document,
            form_id,
            fields,
            config,
            presenter,
            summary,
            state: SubmissionState::Idle,
        })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the document, for applying user edits between events.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn field_ids(&self) -> &[String] {
        &self.fields
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn summary(&self) -> &ErrorSummary {
        &self.summary
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Handle a submission attempt.
    ///
    /// Validates every field, updating inline errors as it goes. Each
    /// checkbox or radio group contributes at most one failure. On failure the
    /// summary is rebuilt, shown and focused; otherwise it is hidden.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.state = SubmissionState::Validating;
        log::debug!("Validating form '{}'", self.form_id);

        let failures = self.collect_failures(ProcessedGroups::default());

        if failures.is_empty() {
            self.state = SubmissionState::Allowed;
            self.summary.hide(&mut self.document);
            log::info!("Form '{}' is valid, submission allowed", self.form_id);
            SubmitOutcome::Allowed
        } else {
            self.state = SubmissionState::Blocked;
            self.summary
                .rebuild(&mut self.document, &failures, &self.config);
            log::info!(
                "Form '{}' has {} errors, submission blocked",
                self.form_id,
                failures.len()
            );
            SubmitOutcome::Blocked(failures)
        }
    }

    /// Handle a field losing focus: validate that field alone and update its
    /// inline error. The summary is left untouched.
    ///
    /// Returns None for fields that were not part of the form at bind time.
    pub fn on_blur(&mut self, field_id: &str) -> Option<ValidationResult> {
        if !self.fields.iter().any(|id| id == field_id) {
            log::debug!("Ignoring blur on untracked field '{}'", field_id);
            return None;
        }

        let field = self.document.field(field_id)?;
        let result = validate_field(&field, &self.document, &self.config.messages);
        self.presenter
            .present(&mut self.document, field_id, &result);
        Some(result)
    }

    fn collect_failures(&mut self, mut processed: ProcessedGroups) -> Vec<FailureRecord> {
        let mut failures = Vec::new();

        for id in &self.fields {
            let Some(field) = self.document.field(id) else {
                log::warn!("Field '{}' is no longer in the document", id);
                continue;
            };

            let group = field.dedup_group();
            if group.is_some_and(|group| processed.contains(group)) {
                continue;
            }

            let result = validate_field(&field, &self.document, &self.config.messages);
            self.presenter.present(&mut self.document, id, &result);

            if let Some(record) = FailureRecord::from_result(&field, result) {
                if let Some(group) = group {
                    processed.insert(group);
                }
                failures.push(record);
            }
        }

        failures
    }
}
