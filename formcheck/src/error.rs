//! Errors raised while attaching the engine to a document.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("form '{0}' not found in document")]
    FormNotFound(String),

    #[error("could not insert error summary '{summary_id}' into form '{form_id}'")]
    SummaryInsertFailed { form_id: String, summary_id: String },
}
