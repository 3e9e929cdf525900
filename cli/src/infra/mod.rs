//! Infrastructure layer — concrete implementations of application port traits.
//!
//! Process launching and file persistence live here.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod finalize;
pub mod launcher;
pub mod store;

pub use config::YamlConfigStore;
pub use launcher::TokioLauncher;
pub use store::JsonShortcutStore;
