//! System clipboard access through the platform clipboard tools.
//!
//! Every failure maps to [`Error::ClipboardUnavailable`]; callers are
//! expected to fall back to manual paste.

use crate::error::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard command line: program plus arguments.
type Tool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const READ_TOOLS: &[Tool] = &[("pbpaste", &[])];
#[cfg(target_os = "macos")]
const WRITE_TOOLS: &[Tool] = &[("pbcopy", &[])];

#[cfg(windows)]
const READ_TOOLS: &[Tool] = &[("powershell", &["-NoProfile", "-Command", "Get-Clipboard -Raw"])];
#[cfg(windows)]
const WRITE_TOOLS: &[Tool] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const READ_TOOLS: &[Tool] = &[
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];
#[cfg(not(any(target_os = "macos", windows)))]
const WRITE_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Reads text from the system clipboard.
pub fn read_text() -> Result<String> {
    let mut last_error = String::from("no clipboard tool found");

    for (program, args) in READ_TOOLS {
        match Command::new(program).args(*args).stderr(Stdio::null()).output() {
            Ok(output) if output.status.success() => {
                return String::from_utf8(output.stdout).map_err(|e| {
                    Error::ClipboardUnavailable(format!("clipboard is not UTF-8 text: {e}"))
                });
            }
            Ok(output) => last_error = format!("{program} exited with {}", output.status),
            Err(e) => last_error = format!("{program}: {e}"),
        }
        tracing::debug!(program, %last_error, "clipboard read attempt failed");
    }

    Err(Error::ClipboardUnavailable(last_error))
}

/// Writes text to the system clipboard.
pub fn write_text(text: &str) -> Result<()> {
    let mut last_error = String::from("no clipboard tool found");

    for (program, args) in WRITE_TOOLS {
        match pipe_into(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = e,
        }
        tracing::debug!(program, %last_error, "clipboard write attempt failed");
    }

    Err(Error::ClipboardUnavailable(last_error))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::result::Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("{program}: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("{program}: {e}"))?;
    }

    let status = child.wait().map_err(|e| format!("{program}: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}
