//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`
//! sockets. All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod execution;
pub mod platform;
pub mod resolve;
pub mod shortcut;
pub mod validate;

pub use config::{HubConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, DispatchError, ShortcutError};
pub use execution::{DEFAULT_TIMEOUT, ErrorClass, ExecutionOutcome, ExecutionResult};
pub use platform::Platform;
pub use resolve::{ResolvedCommand, resolve, split_parameters};
pub use shortcut::{NewShortcut, ShortcutPatch};
pub use validate::{check_target, validate};

/// A request to run something: the wire request doubles as the domain input.
pub use shortcut_common::ExecuteRequest as ShortcutRequest;
