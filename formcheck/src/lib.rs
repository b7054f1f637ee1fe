//! Required-field and format validation for HTML-like forms.
//!
//! The engine binds to one form of a host document, validates fields on blur
//! and on submit, shows an inline error next to each failing field and an
//! aggregated, navigable error summary at the top of the form.
//!
//! The host document is reached only through the [`HostDocument`] trait;
//! [`formdom::Document`] implements it.
//!
//! # Example
//!
//! ```ignore
//! use formcheck::{FormValidator, ValidatorConfig};
//!
//! let mut validator = FormValidator::bind(document, "signup", ValidatorConfig::default())?;
//!
//! let outcome = validator.on_submit();
//! if outcome.prevents_default() {
//!     for failure in outcome.failures() {
//!         println!("{}: {}", failure.field_id, failure.message);
//!     }
//! }
//! ```

pub mod classify;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod field;
pub mod host;
pub mod normalize;
pub mod presenter;
pub mod result;
pub mod rules;
pub mod summary;

pub use classify::{classify, validate_field};
pub use config::{Messages, ValidatorConfig};
pub use controller::{FormValidator, SubmissionState, SubmitOutcome};
pub use error::BindError;
pub use field::{Field, FieldKind};
pub use host::{HostDocument, SummaryEntry, SummaryLayout};
pub use normalize::normalize;
pub use presenter::ErrorPresenter;
pub use result::{Category, FailureKind, FailureRecord, ValidationResult};
pub use rules::{FieldRule, is_valid_email};
pub use summary::{ErrorSummary, resolve_label};
