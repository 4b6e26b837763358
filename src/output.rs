//! Output sinks: straight to stdout, or buffered and handed to a pager.
//!
//! In paged mode every formatted line is collected until end of input and
//! then written to the pager's stdin in one go.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::GlugError;

/// Pagers tried in order when `$PAGER` is not set.
const PAGER_CANDIDATES: &[&str] = &["less", "more"];

/// An external pager command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub program: String,
    pub args: Vec<String>,
}

impl Pager {
    /// Pick a pager: `$PAGER` if set, else the first of `less`, `more` on `PATH`.
    pub fn detect() -> Option<Self> {
        if let Ok(cmd) = std::env::var("PAGER")
            && let Some(pager) = Self::from_command_line(&cmd)
        {
            return Some(pager);
        }
        PAGER_CANDIDATES
            .iter()
            .find(|name| is_on_path(name))
            .map(|name| Self::builtin(name))
    }

    /// Parse a whitespace-separated command line such as `less -S`.
    pub fn from_command_line(cmd: &str) -> Option<Self> {
        let mut words = cmd.split_whitespace();
        let program = words.next()?.to_string();
        Some(Self {
            program,
            args: words.map(str::to_string).collect(),
        })
    }

    /// A known pager with the flags it needs to show colors.
    ///
    /// `less` gets `-R` (raw control characters), `-X` (keep screen on exit)
    /// and `-F` (quit if one screen).
    pub fn builtin(name: &str) -> Self {
        let args = match name {
            "less" => vec!["-R".to_string(), "-X".to_string(), "-F".to_string()],
            _ => Vec::new(),
        };
        Self {
            program: name.to_string(),
            args,
        }
    }

    /// Run the pager with `content` on its stdin and wait for it to exit.
    pub fn run(&self, content: &[u8]) -> Result<(), GlugError> {
        tracing::debug!(program = %self.program, args = ?self.args, "starting pager");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| GlugError::Pager(format!("failed to start pager {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The user may quit the pager before reading everything.
            if let Err(e) = stdin.write_all(content)
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                return Err(GlugError::Pager(format!(
                    "failed to write to pager {}: {e}",
                    self.program
                )));
            }
        }

        let status = child
            .wait()
            .map_err(|e| GlugError::Pager(format!("pager {} failed: {e}", self.program)))?;
        if !status.success() {
            tracing::debug!(%status, "pager exited unsuccessfully");
        }
        Ok(())
    }
}

fn is_on_path(name: &str) -> bool {
    std::env::var_os("PATH")
        .is_some_and(|paths| std::env::split_paths(&paths).any(|dir| dir.join(name).is_file()))
}

/// Destination for formatted lines.
#[derive(Debug)]
pub enum Output<W: Write> {
    /// Write each line as soon as it is formatted.
    Direct(W),
    /// Collect lines for a pager; `fallback` is used when no pager exists.
    Paged { buffer: Vec<u8>, fallback: W },
}

impl<W: Write> Output<W> {
    pub fn direct(writer: W) -> Self {
        Self::Direct(writer)
    }

    pub fn paged(fallback: W) -> Self {
        Self::Paged {
            buffer: Vec::new(),
            fallback,
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_raw_line(line.as_bytes())
    }

    /// Write a line as raw bytes, which need not be valid UTF-8.
    pub fn write_raw_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Self::Direct(writer) => {
                writer.write_all(line)?;
                writer.write_all(b"\n")
            }
            Self::Paged { buffer, .. } => {
                buffer.extend_from_slice(line);
                buffer.push(b'\n');
                Ok(())
            }
        }
    }

    /// Flush direct output, or page the buffered output with the detected pager.
    pub fn finish(self) -> Result<(), GlugError> {
        match self {
            Self::Direct(_) => self.finish_with(None),
            Self::Paged { .. } => self.finish_with(Pager::detect()),
        }
    }

    /// Like [`finish`](Self::finish) with an explicit pager choice.
    ///
    /// Buffered output goes to the fallback writer when `pager` is `None`.
    pub fn finish_with(self, pager: Option<Pager>) -> Result<(), GlugError> {
        match self {
            Self::Direct(mut writer) => {
                writer.flush()?;
                Ok(())
            }
            Self::Paged {
                buffer,
                mut fallback,
            } => match pager {
                Some(pager) => pager.run(&buffer),
                None => {
                    tracing::debug!("no pager found, writing to stdout");
                    fallback.write_all(&buffer)?;
                    fallback.flush()?;
                    Ok(())
                }
            },
        }
    }
}
