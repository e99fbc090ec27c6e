//! Flag data model for guarded commands.
//!
//! This module defines the types a command hands to the guard layer: a
//! [`FlagSpec`] describing one declared option and a [`FlagSet`] holding the
//! full declaration for a command in a stable order. The set is read-only to
//! the checks in [`guard`](crate::guard); all state is captured at parse
//! time and lives for a single invocation.

use serde::{Deserialize, Serialize};

/// A single declared command-line flag.
///
/// `changed` records whether the caller explicitly supplied the flag on the
/// command line, as opposed to the flag retaining its default. The guard
/// layer treats a required flag with `changed == false` as missing even when
/// a non-empty default value is present.
///
/// # Examples
///
/// ```
/// use schema_check_core::FlagSpec;
///
/// let flag = FlagSpec::new("schema").required().supplied("/etc/app.schema.json");
/// assert!(flag.required);
/// assert!(flag.changed);
/// assert_eq!(flag.value, "/etc/app.schema.json");
///
/// // Declared but never set by the caller
/// let flag = FlagSpec::new("config").required();
/// assert!(!flag.changed);
/// assert!(flag.value.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Logical flag name without dashes (e.g., "schema").
    pub name: String,
    /// Current resolved value, default or supplied.
    pub value: String,
    /// Whether the flag must be explicitly set by the caller.
    pub required: bool,
    /// Whether the caller explicitly set the flag.
    pub changed: bool,
}

impl FlagSpec {
    /// Creates an optional flag with an empty default and `changed = false`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            required: false,
            changed: false,
        }
    }

    /// Marks the flag as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Records an explicit caller-supplied value and sets `changed`.
    #[must_use]
    pub fn supplied(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.changed = true;
        self
    }

    /// Sets a default value without marking the flag as changed.
    #[must_use]
    pub fn with_default(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

/// Error raised when a [`FlagSet`] declaration is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagSetError {
    /// Two flags in the same set share a name.
    #[error("duplicate flag declared: {0}")]
    DuplicateFlag(String),
}

/// An ordered collection of [`FlagSpec`], unique by name.
///
/// Iteration follows declaration order, which keeps guard error messages
/// deterministic across runs.
///
/// # Examples
///
/// ```
/// use schema_check_core::{FlagSet, FlagSpec};
///
/// let mut flags = FlagSet::new();
/// flags.declare(FlagSpec::new("schema").required()).unwrap();
/// flags.declare(FlagSpec::new("config").required()).unwrap();
///
/// assert_eq!(flags.len(), 2);
/// assert!(flags.get("schema").is_some());
/// assert!(flags.declare(FlagSpec::new("schema")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    flags: Vec<FlagSpec>,
}

impl FlagSet {
    /// Creates an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag to the set, rejecting duplicate names.
    pub fn declare(&mut self, spec: FlagSpec) -> Result<(), FlagSetError> {
        if self.flags.iter().any(|flag| flag.name == spec.name) {
            return Err(FlagSetError::DuplicateFlag(spec.name));
        }
        self.flags.push(spec);
        Ok(())
    }

    /// Looks up a flag by name.
    pub fn get(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Iterates flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.iter()
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True when no flags are declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
