//! Clipboard access through a platform helper program.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::domain::SnipError;

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), SnipError>;
}

/// Clipboard that pipes text into a helper program such as `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Create a clipboard from a program and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Use the configured command, or detect one for this platform.
    pub fn from_config(command: &[String]) -> Self {
        match command.split_first() {
            Some((program, args)) => Self::new(program.clone(), args.to_vec()),
            None => Self::detect(),
        }
    }

    /// Pick the usual helper for the current platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), SnipError> {
        debug!("Copying via {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SnipError::Clipboard(format!("Failed to start {}: {}", self.program, e)))?;

        // stdin is closed at the end of this block so the helper sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if let Err(e) = written {
            return Err(SnipError::Clipboard(format!(
                "Failed to write to {}: {}",
                self.program, e
            )));
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Clipboard helper failed: {}", stderr);
            return Err(SnipError::Clipboard(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
