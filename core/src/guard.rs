//! Required-flag and argument checks.
//!
//! Two read-only checks run before a guarded command executes:
//!
//! - [`check_required_flags`] fails when a flag marked required was never
//!   explicitly set by the caller.
//! - [`check_flag_has_arg`] fails when a flag that must carry a value was
//!   set to an empty string, which the required check alone cannot catch.
//!
//! Both are fail-fast: the first violation found aborts the invocation, so
//! at most one flag is reported per run.
//!
//! # Examples
//!
//! ```
//! use schema_check_core::*;
//!
//! let mut flags = FlagSet::new();
//! flags.declare(FlagSpec::new("schema").required()).unwrap();
//! flags.declare(FlagSpec::new("config").required().supplied("/tmp/c.json")).unwrap();
//!
//! let err = check_required_flags(&flags).unwrap_err();
//! assert_eq!(err, GuardError::MissingRequiredFlag { name: "schema".to_string() });
//! ```

use thiserror::Error;

use crate::FlagSet;

/// Errors raised while guarding a command's flags.
///
/// Each variant names the offending flag. None of these are retried; they
/// surface verbatim to the user and abort the invocation before any file
/// access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A required flag was never explicitly set by the caller.
    #[error("required flag `{name}` has not been set")]
    MissingRequiredFlag { name: String },
    /// A flag that must carry a value was set to an empty string.
    #[error("flag `{name}` requires an argument")]
    EmptyArgument { name: String },
    /// A flag name was checked that the set never declared.
    #[error("flag `{name}` is not declared")]
    UnknownFlag { name: String },
}

/// Checks that every required flag in the set was explicitly supplied.
///
/// Flags are scanned in declaration order and the first required flag with
/// `changed == false` is reported. A required flag that still holds a
/// non-empty default counts as missing: only an explicit caller-supplied
/// value satisfies the check.
///
/// This is deliberately a single-error check. When several required flags
/// are missing, only the first in declaration order is reported.
///
/// # Examples
///
/// ```
/// use schema_check_core::*;
///
/// let mut flags = FlagSet::new();
/// flags.declare(FlagSpec::new("schema").required().supplied("/tmp/s.json")).unwrap();
/// flags.declare(FlagSpec::new("config").required().supplied("/tmp/c.json")).unwrap();
/// assert!(check_required_flags(&flags).is_ok());
/// ```
pub fn check_required_flags(flags: &FlagSet) -> Result<(), GuardError> {
    for flag in flags.iter() {
        if flag.required && !flag.changed {
            return Err(GuardError::MissingRequiredFlag {
                name: flag.name.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that a flag's resolved value is non-empty.
///
/// The required-flag check only proves the caller set the flag; it says
/// nothing about the value. `--schema ""` passes [`check_required_flags`]
/// and is rejected here.
///
/// # Examples
///
/// ```
/// use schema_check_core::*;
///
/// assert!(check_flag_has_arg("schema", "/tmp/s.json").is_ok());
/// assert_eq!(
///     check_flag_has_arg("config", "").unwrap_err(),
///     GuardError::EmptyArgument { name: "config".to_string() },
/// );
/// ```
pub fn check_flag_has_arg(name: &str, value: &str) -> Result<(), GuardError> {
    if value.is_empty() {
        return Err(GuardError::EmptyArgument {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::FlagSpec;

    use super::*;

    fn set_of(specs: Vec<FlagSpec>) -> FlagSet {
        let mut flags = FlagSet::new();
        for spec in specs {
            flags.declare(spec).unwrap();
        }
        flags
    }

    #[test]
    fn test_all_required_supplied_passes() {
        let flags = set_of(vec![
            FlagSpec::new("schema").required().supplied("/tmp/s.json"),
            FlagSpec::new("config").required().supplied("/tmp/c.json"),
        ]);
        assert!(check_required_flags(&flags).is_ok());
    }

    #[test]
    fn test_missing_required_flag_reports_name() {
        let flags = set_of(vec![
            FlagSpec::new("schema").required(),
            FlagSpec::new("config").required().supplied("/tmp/c.json"),
        ]);
        assert_eq!(
            check_required_flags(&flags),
            Err(GuardError::MissingRequiredFlag {
                name: "schema".to_string()
            })
        );
    }

    #[test]
    fn test_first_missing_flag_wins_in_declaration_order() {
        let flags = set_of(vec![
            FlagSpec::new("config").required(),
            FlagSpec::new("schema").required(),
        ]);
        assert_eq!(
            check_required_flags(&flags),
            Err(GuardError::MissingRequiredFlag {
                name: "config".to_string()
            })
        );
    }

    #[test]
    fn test_unchanged_default_counts_as_missing() {
        let flags = set_of(vec![
            FlagSpec::new("schema")
                .required()
                .with_default("/etc/default.schema.json"),
        ]);
        assert_eq!(
            check_required_flags(&flags),
            Err(GuardError::MissingRequiredFlag {
                name: "schema".to_string()
            })
        );
    }

    #[test]
    fn test_optional_unchanged_flag_is_ignored() {
        let flags = set_of(vec![
            FlagSpec::new("verbose"),
            FlagSpec::new("schema").required().supplied("/tmp/s.json"),
        ]);
        assert!(check_required_flags(&flags).is_ok());
    }

    #[test]
    fn test_guard_is_idempotent() {
        let flags = set_of(vec![FlagSpec::new("schema").required()]);
        let first = check_required_flags(&flags);
        let second = check_required_flags(&flags);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_value_fails() {
        assert_eq!(
            check_flag_has_arg("config", ""),
            Err(GuardError::EmptyArgument {
                name: "config".to_string()
            })
        );
    }

    #[test]
    fn test_non_empty_value_passes() {
        assert!(check_flag_has_arg("config", "/tmp/c.json").is_ok());
        // A value that happens to contain the flag name is still valid.
        assert!(check_flag_has_arg("config", "config").is_ok());
    }
}
