//! Command resolution — maps (kind, target, parameters, platform) to a
//! concrete program and argument list.
//!
//! Pure functions only. The platform is always passed in, never detected here,
//! so every branch is testable on any host.

use std::fmt;

use shortcut_common::ShortcutKind;

use crate::domain::platform::Platform;
use crate::domain::validate::extension;

/// A program plus its ordered arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub program: String,
    pub arguments: Vec<String>,
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.arguments {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

// ── Lookup tables ─────────────────────────────────────────────────────────────

/// "Open with the default handler" command per platform: program and the
/// arguments that precede the URL.
const OPEN_COMMANDS: &[(Platform, &str, &[&str])] = &[
    (Platform::Windows, "cmd", &["/c", "start", ""]),
    (Platform::MacOs, "open", &[]),
    (Platform::Linux, "xdg-open", &[]),
];

const POWERSHELL_ARGS: &[&str] = &["-ExecutionPolicy", "Bypass", "-File"];

/// Script interpreter by extension. `None` platform matches every platform;
/// platform-specific rows must come before the wildcard row for the same
/// extension.
const SCRIPT_INTERPRETERS: &[(&str, Option<Platform>, &str, &[&str])] = &[
    ("py", None, "python", &[]),
    ("js", None, "node", &[]),
    ("mjs", None, "node", &[]),
    ("ps1", Some(Platform::Windows), "powershell", POWERSHELL_ARGS),
    ("ps1", None, "pwsh", POWERSHELL_ARGS),
    ("sh", None, "bash", &[]),
];

/// Extensions that need `cmd /c` on Windows.
const CMD_WRAPPED: &[&str] = &["bat", "cmd"];

/// How a target is turned into a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Hand the URL to the platform's default handler.
    Open,
    /// Run under an interpreter, with fixed leading arguments before the target.
    Interpreter {
        program: &'static str,
        leading: &'static [&'static str],
    },
    /// `cmd /c <target>`.
    CmdWrap,
    /// The target is the program.
    Direct,
}

fn strategy(platform: Platform, kind: ShortcutKind, ext: Option<&str>) -> Strategy {
    if kind.is_url() {
        return Strategy::Open;
    }
    match kind {
        ShortcutKind::Script => interpreter(platform, ext).unwrap_or_else(|| wrapper(platform, ext)),
        _ => wrapper(platform, ext),
    }
}

fn interpreter(platform: Platform, ext: Option<&str>) -> Option<Strategy> {
    let ext = ext?;
    SCRIPT_INTERPRETERS
        .iter()
        .find(|(e, p, _, _)| *e == ext && p.is_none_or(|p| p == platform))
        .map(|&(_, _, program, leading)| Strategy::Interpreter { program, leading })
}

fn wrapper(platform: Platform, ext: Option<&str>) -> Strategy {
    match ext {
        Some(ext) if platform == Platform::Windows && CMD_WRAPPED.contains(&ext) => {
            Strategy::CmdWrap
        }
        _ => Strategy::Direct,
    }
}

fn open_command(platform: Platform) -> (&'static str, &'static [&'static str]) {
    OPEN_COMMANDS
        .iter()
        .find(|(p, _, _)| *p == platform)
        .map_or(("xdg-open", &[] as &[&str]), |&(_, program, leading)| {
            (program, leading)
        })
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Split raw parameter text on whitespace, dropping empty tokens.
///
/// There is no quoting support: `"a b"` becomes two arguments `"a` and `b"`.
/// Stored shortcuts depend on this exact behaviour.
#[must_use]
pub fn split_parameters(parameters: &str) -> Vec<String> {
    parameters.split_whitespace().map(str::to_string).collect()
}

/// Resolve a shortcut into the command that runs it on `platform`.
///
/// For URL kinds `parameters` is appended to the URL verbatim (query strings,
/// fragments). For every other kind it is split with [`split_parameters`] and
/// appended as separate arguments.
#[must_use]
pub fn resolve(
    kind: ShortcutKind,
    target: &str,
    parameters: &str,
    platform: Platform,
) -> ResolvedCommand {
    let ext = extension(target).map(str::to_ascii_lowercase);

    let (program, mut arguments): (String, Vec<String>) =
        match strategy(platform, kind, ext.as_deref()) {
            Strategy::Open => {
                let (program, leading) = open_command(platform);
                let mut args: Vec<String> = leading.iter().map(|s| (*s).to_string()).collect();
                args.push(format!("{target}{parameters}"));
                return ResolvedCommand {
                    program: program.to_string(),
                    arguments: args,
                };
            }
            Strategy::Interpreter { program, leading } => {
                let mut args: Vec<String> = leading.iter().map(|s| (*s).to_string()).collect();
                args.push(target.to_string());
                (program.to_string(), args)
            }
            Strategy::CmdWrap => ("cmd".to_string(), vec!["/c".to_string(), target.to_string()]),
            Strategy::Direct => (target.to_string(), Vec::new()),
        };

    arguments.extend(split_parameters(parameters));
    ResolvedCommand { program, arguments }
}
