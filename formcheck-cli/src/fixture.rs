//! Form fixtures: a document tree, engine config and scripted user edits.

use std::fs;
use std::path::{Path, PathBuf};

use formcheck::{BindError, ValidatorConfig};
use formdom::{Edit, Element};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bind(#[from] BindError),
}

#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// ID of the form to bind to.
    pub form: String,
    /// Root of the document tree.
    pub document: Element,
    #[serde(default)]
    pub config: ValidatorConfig,
    /// Edits applied, in order, after binding and before any event.
    #[serde(default)]
    pub edits: Vec<Edit>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }
}
