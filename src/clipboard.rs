use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Result of one clipboard write attempt. Binary and per-call; no retry
/// state is kept between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Succeeded,
    Failed,
}

impl CopyOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Copy text to the system clipboard.
///
/// Tries the platform clipboard via `arboard` first. If that is unavailable
/// or refuses (headless session, missing display server, denied access),
/// falls back exactly once to piping the text into a platform copy command.
/// Never panics; both mechanisms failing maps to [`CopyOutcome::Failed`].
pub fn write(text: &str) -> CopyOutcome {
    match try_primary(text) {
        Ok(()) => {
            debug!("copied {} chars via system clipboard", text.len());
            CopyOutcome::Succeeded
        }
        Err(err) => {
            debug!("system clipboard failed ({err}), trying copy command");
            if pipe_to_copy_command(text, FALLBACK_COMMANDS) {
                CopyOutcome::Succeeded
            } else {
                CopyOutcome::Failed
            }
        }
    }
}

fn try_primary(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

const FALLBACK_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Pipe `text` into the first copy command that runs and exits successfully.
///
/// The spawned child is the only transient resource: its stdin handle is
/// dropped after the write so the command sees EOF, and the child is reaped
/// on every path, success or failure.
fn pipe_to_copy_command(text: &str, commands: &[(&str, &[&str])]) -> bool {
    for (cmd, args) in commands {
        let mut child = match Command::new(cmd)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(_) => continue,
        };

        if let Some(mut stdin) = child.stdin.take() {
            if stdin.write_all(text.as_bytes()).is_err() {
                let _ = child.wait();
                continue;
            }
        }

        if child.wait().map(|status| status.success()).unwrap_or(false) {
            debug!("copied {} chars via {cmd}", text.len());
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_outcome_succeeded() {
        assert!(CopyOutcome::Succeeded.succeeded());
        assert!(!CopyOutcome::Failed.succeeded());
    }

    #[test]
    fn test_fallback_accepts_a_working_command() {
        assert!(pipe_to_copy_command(
            "mailto:a@b.com",
            &[("sh", &["-c", "cat > /dev/null"])]
        ));
    }

    #[test]
    fn test_fallback_skips_missing_commands() {
        assert!(pipe_to_copy_command(
            "mailto:a@b.com",
            &[
                ("maillink-no-such-command", &[]),
                ("sh", &["-c", "cat > /dev/null"]),
            ]
        ));
    }

    #[test]
    fn test_fallback_fails_cleanly() {
        assert!(!pipe_to_copy_command(
            "mailto:a@b.com",
            &[("maillink-no-such-command", &[])]
        ));
        assert!(!pipe_to_copy_command(
            "mailto:a@b.com",
            &[("sh", &["-c", "exit 1"])]
        ));
    }

    #[test]
    fn test_write_does_not_panic() {
        // Headless CI has no clipboard and usually no copy command; either
        // outcome is fine as long as nothing blows up.
        let _ = write("mailto:a@b.com");
    }
}
