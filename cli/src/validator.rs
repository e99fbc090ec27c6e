//! JSON Schema validation of config documents.
//!
//! Implements the `Validate(schemaPath, configPath)` collaborator consumed
//! by the guarded `validate` command: load both documents, compile the
//! schema, and report every violation with its instance path.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading or validating the document pair.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A document could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document is not well-formed JSON.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The schema document is not a usable JSON Schema.
    #[error("invalid schema: {0}")]
    Schema(String),

    /// The config violates the schema; carries one line per violation.
    #[error("config does not conform to schema:\n{0}")]
    Violations(String),
}

/// Validates the config document at `config_path` against the JSON Schema
/// at `schema_path`.
///
/// All violations are collected, not just the first, each reported with the
/// instance path it occurred at.
pub fn validate_files(schema_path: &Path, config_path: &Path) -> Result<(), ValidateError> {
    let schema = load_json(schema_path)?;
    let config = load_json(config_path)?;

    let validator =
        jsonschema::validator_for(&schema).map_err(|err| ValidateError::Schema(err.to_string()))?;

    let violations: Vec<String> = validator
        .iter_errors(&config)
        .map(|err| format!("- {} (at instance path '{}')", err, err.instance_path))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::Violations(violations.join("\n")))
    }
}

fn load_json(path: &Path) -> Result<serde_json::Value, ValidateError> {
    let raw = fs::read_to_string(path).map_err(|source| ValidateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ValidateError::Json {
        path: path.to_path_buf(),
        source,
    })
}
