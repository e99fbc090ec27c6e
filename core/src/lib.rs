//! Required-flag guarding and dispatch for flag-gated commands.
//!
//! This crate implements the pre-execution checks a command with required
//! flags runs before doing any real work:
//!
//! - [`FlagSpec`] / [`FlagSet`] — the declared flags of one invocation, in
//!   declaration order and unique by name.
//! - [`check_required_flags`] — fails fast on the first required flag the
//!   caller never explicitly set.
//! - [`check_flag_has_arg`] — rejects a flag that was set to an empty value.
//! - [`resolve_request`] / [`dispatch`] — compose both checks and hand the
//!   resolved [`ValidationRequest`] to an external validation collaborator.
//!
//! Everything here is pure and synchronous: one invocation is one linear
//! pass with no shared state, and both checks can be re-run on the same set
//! with identical results.
//!
//! # Example
//!
//! ```
//! use schema_check_core::*;
//!
//! let mut flags = FlagSet::new();
//! flags.declare(FlagSpec::new("schema").required().supplied("/tmp/s.json")).unwrap();
//! flags.declare(FlagSpec::new("config").required().supplied("/tmp/c.json")).unwrap();
//!
//! let outcome = dispatch(&flags, "schema", "config", |request| {
//!     assert_eq!(request.schema_path, "/tmp/s.json");
//!     Ok::<(), std::io::Error>(())
//! });
//! assert!(outcome.is_ok());
//! ```

mod dispatch;
mod flags;
mod guard;

pub use dispatch::{DispatchError, ValidationRequest, dispatch, resolve_request};
pub use flags::{FlagSet, FlagSetError, FlagSpec};
pub use guard::{GuardError, check_flag_has_arg, check_required_flags};
