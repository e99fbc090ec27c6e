//! Guarded dispatch to an external validator.
//!
//! Composes the two guard checks and hands the resolved schema/config path
//! pair to a validation collaborator. The flow is linear: required-flag
//! check, then per-flag argument checks, then the collaborator. Any failure
//! is terminal for the invocation and nothing is retried; guard failures
//! abort before the collaborator touches the filesystem.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FlagSet, FlagSpec, GuardError, check_flag_has_arg, check_required_flags};

/// The resolved input pair for one validation run.
///
/// Produced only after all guard checks pass and consumed immediately by the
/// validator; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Path to the JSON Schema document.
    pub schema_path: String,
    /// Path to the instance/config document to validate.
    pub config_path: String,
}

/// Error from a guarded dispatch.
///
/// `E` is the external validator's own error type; it is wrapped unmodified
/// so the caller sees exactly what the validator reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError<E>
where
    E: std::error::Error,
{
    /// A guard check failed before the validator ran.
    #[error(transparent)]
    Guard(#[from] GuardError),
    /// The external validator rejected the documents.
    #[error(transparent)]
    Validation(E),
}

/// Resolves the schema/config path pair from a guarded flag set.
///
/// Runs [`check_required_flags`] over the whole set, then
/// [`check_flag_has_arg`] for the two named flags (schema first), and builds
/// the [`ValidationRequest`] from their values. Passing a flag name the set
/// never declared is a caller bug and fails with [`GuardError::UnknownFlag`].
///
/// # Examples
///
/// ```
/// use schema_check_core::*;
///
/// let mut flags = FlagSet::new();
/// flags.declare(FlagSpec::new("schema").required().supplied("/tmp/s.json")).unwrap();
/// flags.declare(FlagSpec::new("config").required().supplied("/tmp/c.json")).unwrap();
///
/// let request = resolve_request(&flags, "schema", "config").unwrap();
/// assert_eq!(request.schema_path, "/tmp/s.json");
/// assert_eq!(request.config_path, "/tmp/c.json");
/// ```
pub fn resolve_request(
    flags: &FlagSet,
    schema_flag: &str,
    config_flag: &str,
) -> Result<ValidationRequest, GuardError> {
    check_required_flags(flags)?;

    let schema = lookup(flags, schema_flag)?;
    check_flag_has_arg(&schema.name, &schema.value)?;

    let config = lookup(flags, config_flag)?;
    check_flag_has_arg(&config.name, &config.value)?;

    Ok(ValidationRequest {
        schema_path: schema.value.clone(),
        config_path: config.value.clone(),
    })
}

/// Runs the guard checks and, on success, the external validator.
///
/// The validator is any `FnOnce(&ValidationRequest) -> Result<(), E>`; its
/// error comes back unchanged inside [`DispatchError::Validation`].
///
/// # Examples
///
/// ```
/// use schema_check_core::*;
///
/// let mut flags = FlagSet::new();
/// flags.declare(FlagSpec::new("schema").required().supplied("/tmp/s.json")).unwrap();
/// flags.declare(FlagSpec::new("config").required().supplied("/tmp/c.json")).unwrap();
///
/// let result = dispatch(&flags, "schema", "config", |_request| {
///     Ok::<(), std::io::Error>(())
/// });
/// assert!(result.is_ok());
/// ```
pub fn dispatch<V, E>(
    flags: &FlagSet,
    schema_flag: &str,
    config_flag: &str,
    validate: V,
) -> Result<(), DispatchError<E>>
where
    V: FnOnce(&ValidationRequest) -> Result<(), E>,
    E: std::error::Error,
{
    let request = resolve_request(flags, schema_flag, config_flag)?;
    validate(&request).map_err(DispatchError::Validation)
}

fn lookup<'a>(flags: &'a FlagSet, name: &str) -> Result<&'a FlagSpec, GuardError> {
    flags.get(name).ok_or_else(|| GuardError::UnknownFlag {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::FlagSpec;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("schema violation: {0}")]
    struct FakeViolation(String);

    fn guarded_set(schema: Option<&str>, config: Option<&str>) -> FlagSet {
        let mut flags = FlagSet::new();
        let schema_spec = match schema {
            Some(value) => FlagSpec::new("schema").required().supplied(value),
            None => FlagSpec::new("schema").required(),
        };
        let config_spec = match config {
            Some(value) => FlagSpec::new("config").required().supplied(value),
            None => FlagSpec::new("config").required(),
        };
        flags.declare(schema_spec).unwrap();
        flags.declare(config_spec).unwrap();
        flags
    }

    #[test]
    fn test_missing_schema_flag_aborts_before_validator() {
        // Scenario: schema never supplied, config supplied.
        let flags = guarded_set(None, Some("/tmp/c.json"));
        let mut called = false;
        let result = dispatch(&flags, "schema", "config", |_| {
            called = true;
            Ok::<(), FakeViolation>(())
        });
        assert_eq!(
            result,
            Err(DispatchError::Guard(GuardError::MissingRequiredFlag {
                name: "schema".to_string()
            }))
        );
        assert!(!called);
    }

    #[test]
    fn test_empty_config_value_fails_argument_check() {
        // Scenario: both flags supplied, config explicitly empty.
        let flags = guarded_set(Some("/tmp/s.json"), Some(""));
        let result = resolve_request(&flags, "schema", "config");
        assert_eq!(
            result,
            Err(GuardError::EmptyArgument {
                name: "config".to_string()
            })
        );
    }

    #[test]
    fn test_successful_dispatch_passes_resolved_paths() {
        let flags = guarded_set(Some("/tmp/s.json"), Some("/tmp/c.json"));
        let mut seen = None;
        let result = dispatch(&flags, "schema", "config", |request| {
            seen = Some(request.clone());
            Ok::<(), FakeViolation>(())
        });
        assert!(result.is_ok());
        assert_eq!(
            seen,
            Some(ValidationRequest {
                schema_path: "/tmp/s.json".to_string(),
                config_path: "/tmp/c.json".to_string(),
            })
        );
    }

    #[test]
    fn test_validator_error_propagates_unchanged() {
        let flags = guarded_set(Some("/tmp/s.json"), Some("/tmp/c.json"));
        let violation = FakeViolation("port must be an integer".to_string());
        let result = dispatch(&flags, "schema", "config", |_| Err(violation.clone()));
        assert_eq!(result, Err(DispatchError::Validation(violation)));
    }

    #[test]
    fn test_undeclared_flag_name_is_reported() {
        let flags = guarded_set(Some("/tmp/s.json"), Some("/tmp/c.json"));
        let result = resolve_request(&flags, "schema", "instance");
        assert_eq!(
            result,
            Err(GuardError::UnknownFlag {
                name: "instance".to_string()
            })
        );
    }
}
