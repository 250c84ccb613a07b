//! Buffered sink owning the destination stream

use super::error::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

/// The owned output stream a logger writes rendered records to.
///
/// Defaults to the process's standard output. [`LogSink::open`] produces an
/// exclusively-owned file handle; replacing a sink drops the previous
/// stream without further tracking (last stream wins).
#[derive(Debug)]
pub struct LogSink {
    target: Target,
}

#[derive(Debug)]
enum Target {
    Stdout,
    File(BufWriter<File>),
}

impl LogSink {
    /// A sink on the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Open `path` for appending, creating it if absent (mode 0644 on
    /// Unix). Fails without side effects, carrying the offending path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options
            .open(path)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))?;

        Ok(Self {
            target: Target::File(BufWriter::new(file)),
        })
    }

    /// Whether the destination is an interactive terminal right now.
    ///
    /// Re-evaluated on every call: standard output can be redirected after
    /// the sink was constructed. A file target is never interactive.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.target {
            Target::Stdout => io::stdout().is_terminal(),
            Target::File(_) => false,
        }
    }

    /// One synchronous write-and-flush of an already rendered line.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        match &mut self.target {
            Target::Stdout => {
                let mut handle = io::stdout().lock();
                handle.write_all(line.as_bytes())?;
                handle.flush()?;
            }
            Target::File(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::stdout()
    }
}
