//! Target validation — pure, no I/O.
//!
//! This is advisory filtering that narrows obviously malformed input. It is
//! not a sandbox: anything that passes (any bare command name, any absolute
//! path, any allow-listed script) is fully executable with the privileges of
//! the dispatching process.

use crate::domain::error::DispatchError;

/// URL schemes accepted for `url` / `web-app` shortcuts.
pub const URL_SCHEMES: &[&str] = &["http://", "https://", "file://"];

/// Executable and script extensions accepted regardless of location.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "exe", "bat", "cmd", "ps1", "sh", "py", "js", "mjs", "ts",
];

/// Returns the extension of the final path component, without the dot.
///
/// A single leading dot marks a hidden name, not an extension, so `.bashrc`
/// and `..` have none while `..foo` has `foo`. `archive.` has an empty one.
#[must_use]
pub fn extension(target: &str) -> Option<&str> {
    let name = target.rsplit(['/', '\\']).next().unwrap_or(target);
    if name == ".." {
        return None;
    }
    let name = name.strip_prefix('.').unwrap_or(name);
    name.rfind('.').map(|idx| &name[idx + 1..])
}

/// `true` when `target` ends with one of [`ALLOWED_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn has_allowed_extension(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

/// `true` for a bare, separator-free, extension-free name looked up on `PATH`.
#[must_use]
pub fn is_bare_command(target: &str) -> bool {
    !target.contains(['/', '\\']) && extension(target).is_none()
}

/// Textual absolute-path check covering both POSIX and Windows forms.
#[must_use]
pub fn is_absolute_path(target: &str) -> bool {
    if target.starts_with('/') || target.starts_with('\\') {
        return true;
    }
    let bytes = target.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'/' | b'\\')
}

/// `true` when `target` starts with an accepted URL scheme.
#[must_use]
pub fn is_url(target: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| target.starts_with(scheme))
}

/// Decide whether `target` is an acceptable thing to execute.
///
/// First match wins: URL scheme, allow-listed extension, bare command,
/// absolute path. Anything else is rejected. Callers must reject the empty
/// string before calling (see [`check_target`]).
#[must_use]
pub fn validate(target: &str) -> bool {
    is_url(target)
        || has_allowed_extension(target)
        || is_bare_command(target)
        || is_absolute_path(target)
}

/// Full pre-spawn check distinguishing a missing target from a malformed one.
///
/// # Errors
///
/// Returns [`DispatchError::MissingTarget`] for an empty target and
/// [`DispatchError::InvalidTarget`] when [`validate`] refuses it.
pub fn check_target(target: &str) -> Result<(), DispatchError> {
    if target.is_empty() {
        return Err(DispatchError::MissingTarget);
    }
    if !validate(target) {
        return Err(DispatchError::InvalidTarget(target.to_string()));
    }
    Ok(())
}
