pub mod kind;
pub mod types;

pub use kind::{ParseKindError, ShortcutKind};
pub use types::*;
