//! Interactive song selection
//!
//! The picker backend is injected at the composition boundary so the pipeline
//! can be driven by a fake in tests. TTY detection (fzf vs dmenu) lives in
//! `main`, never here.

use crate::error::{Result, SlamError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Interactive selection backend
pub trait Picker {
    /// Present the choices and return the user's pick, or `None` on abort
    fn pick(&self, names: &[String]) -> Result<Option<String>>;

    /// Get the name of this backend (for logging)
    fn name(&self) -> &'static str;
}

/// Picker driving an external menu program over stdin/stdout.
///
/// Choices are written one per line to the program's stdin; the selection is
/// read from its stdout. A non-zero exit or an empty selection means the user
/// dismissed the menu.
pub struct MenuCommandPicker {
    program: &'static str,
    args: Vec<&'static str>,
}

impl MenuCommandPicker {
    /// Fuzzy finder for interactive terminals
    pub fn fzf() -> Self {
        Self {
            program: "fzf",
            args: vec!["--prompt=Select song: "],
        }
    }

    /// Graphical pop-up menu for sessions without a terminal on stdin
    pub fn dmenu() -> Self {
        Self {
            program: "dmenu",
            args: vec![
                "-p",
                "Select song: ",
                "-fn",
                "sans-serif:pixelsize=17",
                "-nb",
                "black",
                "-nf",
                "white",
                "-sb",
                "white",
                "-sf",
                "black",
            ],
        }
    }

    #[cfg(test)]
    fn custom(program: &'static str, args: Vec<&'static str>) -> Self {
        Self { program, args }
    }
}

impl Picker for MenuCommandPicker {
    fn pick(&self, names: &[String]) -> Result<Option<String>> {
        let mut child = Command::new(self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| SlamError::Selector {
                name: self.program.to_string(),
                reason: format!("failed to launch: {}", e),
            })?;

        // Write the choices then close stdin so the menu can render. A menu
        // dismissed before it reads everything closes the pipe early; that is
        // an abort, not a failure.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(names.join("\n").as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(SlamError::Selector {
                        name: self.program.to_string(),
                        reason: format!("failed to write choices: {}", e),
                    });
                }
                debug!("{} closed stdin before reading all choices", self.program);
            }
        }

        let output = child.wait_with_output().map_err(|e| SlamError::Selector {
            name: self.program.to_string(),
            reason: format!("failed to read selection: {}", e),
        })?;

        if !output.status.success() {
            debug!("{} exited with {}", self.program, output.status);
            return Ok(None);
        }

        let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selection.is_empty() {
            return Ok(None);
        }

        Ok(Some(selection))
    }

    fn name(&self) -> &'static str {
        self.program
    }
}
