//! Host platform families.

use std::fmt;

/// Operating-system family that decides open/run conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Platform {
    /// Windows: `cmd /c` wrapping, `start` for URLs.
    Windows,
    /// Apple desktop: `open` for URLs.
    #[value(name = "macos")]
    MacOs,
    /// Linux and other POSIX-like systems: `xdg-open` for URLs.
    Linux,
}

impl Platform {
    /// Platform family of the running binary.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
