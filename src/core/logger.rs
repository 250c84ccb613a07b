//! The shared logger contract and trait-object construction

use super::call_site::CallSite;
use super::error::Result;
use super::level::Severity;
use crate::loggers::{JsonLogger, TextLogger};
use std::path::{Path, PathBuf};

/// Capability shared by both logger variants.
///
/// Every level call is fully synchronous: filter, format, serialize,
/// write, flush, in that order, blocking the caller until the flush
/// completes. A logger instance exclusively owns its destination stream.
///
/// Level methods take `&self` and serialize writes through an internal
/// per-instance lock, so concurrent calls against one shared instance emit
/// complete, non-interleaved lines. Reconfiguration (`set_threshold`,
/// `redirect_to_file`) takes `&mut self` and therefore needs external
/// synchronization.
pub trait Logger: Send + Sync {
    /// Configure the minimum emitted severity from a raw value, 1 (TRACE)
    /// through 6 (FATAL). Out-of-range handling is variant-specific:
    /// [`TextLogger`] keeps the previous threshold, [`JsonLogger`] resets
    /// to INFO. Never an error either way.
    fn set_threshold(&mut self, level: i32);

    /// Redirect the sink to `path`, opened for append and created if
    /// absent. On failure the previous sink stays fully functional and no
    /// state changes.
    fn redirect_to_file(&mut self, path: &Path) -> Result<()>;

    /// Write one statement at `level` if the threshold permits it. A sink
    /// write failure is reported on standard error and swallowed; the call
    /// never fails.
    fn log(&self, level: Severity, message: &str, site: CallSite);

    #[track_caller]
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, CallSite::caller());
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.log(Severity::Info, message, CallSite::caller());
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message, CallSite::caller());
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.log(Severity::Error, message, CallSite::caller());
    }

    /// FATAL is a severity label only; this never terminates the process.
    #[track_caller]
    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message, CallSite::caller());
    }
}

/// Output shape selector for trait-object construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable single-line text (default)
    #[default]
    Text,

    /// Line-delimited JSON, one object per statement
    Json,
}

/// Builder for constructing a boxed [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use duolog::prelude::*;
///
/// let logger = LoggerBuilder::new()
///     .format(OutputFormat::Json)
///     .threshold(Severity::Debug)
///     .build()
///     .expect("stdout logger construction cannot fail");
/// logger.info("server started");
/// ```
pub struct LoggerBuilder {
    format: OutputFormat,
    threshold: Severity,
    color: bool,
    file: Option<PathBuf>,
}

impl LoggerBuilder {
    /// Create a new builder: text format, threshold INFO, color enabled,
    /// sink on standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Text,
            threshold: Severity::Info,
            color: true,
            file: None,
        }
    }

    /// Select the output shape.
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the minimum emitted severity.
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable the colorized level tag. Only meaningful for
    /// [`OutputFormat::Text`]; JSON output has no color concept.
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Redirect the sink to a file at build time.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Build the logger. Fails only when a configured file cannot be
    /// opened.
    pub fn build(self) -> Result<Box<dyn Logger>> {
        let mut logger: Box<dyn Logger> = match self.format {
            OutputFormat::Text => Box::new(TextLogger::with_color(self.color)),
            OutputFormat::Json => Box::new(JsonLogger::new()),
        };

        logger.set_threshold(self.threshold.value());
        if let Some(path) = self.file {
            logger.redirect_to_file(&path)?;
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
