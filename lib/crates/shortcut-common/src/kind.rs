use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Execution strategy of a shortcut.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ShortcutKind {
    /// Open in the default handler for the URL scheme.
    Url,
    /// Same launch path as `Url`; kept distinct for display purposes.
    WebApp,
    /// Run the target directly (binary on `PATH` or a path).
    #[default]
    System,
    /// Run the target under the interpreter chosen by its extension.
    Script,
}

impl ShortcutKind {
    /// Every kind, in display order.
    pub const ALL: [ShortcutKind; 4] = [Self::Url, Self::WebApp, Self::System, Self::Script];

    /// Wire name, e.g. `"web-app"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::WebApp => "web-app",
            Self::System => "system",
            Self::Script => "script",
        }
    }

    /// `true` for kinds that open a URL instead of running a program.
    #[must_use]
    pub fn is_url(self) -> bool {
        matches!(self, Self::Url | Self::WebApp)
    }
}

impl fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string is not one of the four kind names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shortcut kind '{0}' (expected url, web-app, system or script)")]
pub struct ParseKindError(pub String);

impl FromStr for ShortcutKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
