//! Human-readable text logger

use crate::core::{CallSite, LogSink, Logger, Result, Severity};
use chrono::Local;
use colored::{Color, Colorize};
use parking_lot::Mutex;
use std::path::Path;

/// Renders level-tagged, optionally ANSI-colorized, single-line statements.
///
/// Line shape is fixed: `<timestamp> [<LEVEL>] <message>`, timestamp
/// `YYYY/MM/DD HH:MM:SS` in local time. Only the level tag is colorized
/// (magenta), and only while the sink is an interactive terminal with
/// color enabled. Redirecting to a file disables color permanently for
/// this instance, even if the sink would later point at a terminal again.
///
/// Defaults to threshold INFO on standard output.
pub struct TextLogger {
    threshold: Severity,
    color: bool,
    sink: Mutex<LogSink>,
}

impl TextLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(true)
    }

    #[must_use]
    pub fn with_color(color: bool) -> Self {
        Self {
            threshold: Severity::Info,
            color,
            sink: Mutex::new(LogSink::stdout()),
        }
    }

    fn render_tag(&self, level: Severity, interactive: bool) -> String {
        if interactive && self.color {
            level.to_str().color(Color::Magenta).to_string()
        } else {
            level.to_str().to_string()
        }
    }
}

impl Default for TextLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TextLogger {
    fn set_threshold(&mut self, level: i32) {
        // out-of-range values leave the previous threshold in place
        if let Some(threshold) = Severity::from_value(level) {
            self.threshold = threshold;
        }
    }

    fn redirect_to_file(&mut self, path: &Path) -> Result<()> {
        let sink = LogSink::open(path)?;
        *self.sink.get_mut() = sink;
        self.color = false;
        Ok(())
    }

    fn log(&self, level: Severity, message: &str, _site: CallSite) {
        if !level.permits(self.threshold) {
            return;
        }

        let mut sink = self.sink.lock();
        // interactivity is re-checked per call; stdout can be redirected
        // behind our back
        let tag = self.render_tag(level, sink.is_terminal());
        let line = format!(
            "{} [{}] {}\n",
            Local::now().format("%Y/%m/%d %H:%M:%S"),
            tag,
            message
        );
        if let Err(e) = sink.write_line(&line) {
            eprintln!("[LOGGER ERROR] failed to write log line: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn file_logger(path: &Path) -> TextLogger {
        let mut logger = TextLogger::new();
        logger.redirect_to_file(path).expect("redirect");
        logger
    }

    #[test]
    fn test_line_shape() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("shape.log");

        let logger = file_logger(&path);
        logger.info("server started on port 8080");

        let content = fs::read_to_string(&path).expect("read back");
        let line = content.strip_suffix('\n').expect("trailing newline");

        // YYYY/MM/DD HH:MM:SS [INFO] message
        let (timestamp, rest) = line.split_at(19);
        let bytes = timestamp.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'/'),
                10 => assert_eq!(*b, b' '),
                13 | 16 => assert_eq!(*b, b':'),
                _ => assert!(b.is_ascii_digit(), "timestamp byte {} in {:?}", i, timestamp),
            }
        }
        assert_eq!(rest, " [INFO] server started on port 8080");
    }

    #[test]
    fn test_file_output_has_no_ansi_escapes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("plain.log");

        let logger = file_logger(&path);
        logger.warn("disk space low");
        logger.error("write failed");

        let content = fs::read_to_string(&path).expect("read back");
        assert!(!content.contains('\u{1b}'));
        assert!(content.contains("[WARN]"));
        assert!(content.contains("[ERROR]"));
    }

    #[test]
    fn test_threshold_filters_below() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("filter.log");

        let mut logger = TextLogger::new();
        logger.redirect_to_file(&path).expect("redirect");
        logger.set_threshold(Severity::Warn.value());

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");
        logger.fatal("kept");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_out_of_range_threshold_is_ignored() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("ignored.log");

        let mut logger = TextLogger::new();
        logger.redirect_to_file(&path).expect("redirect");
        logger.set_threshold(Severity::Error.value());

        for bogus in [0, 7, -1] {
            logger.set_threshold(bogus);
        }

        logger.info("still filtered");
        logger.error("still emitted");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("still emitted"));
    }

    #[test]
    fn test_failed_redirect_keeps_previous_sink() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("kept.log");

        let mut logger = TextLogger::new();
        logger.redirect_to_file(&path).expect("redirect");

        // a directory is not an openable sink
        let err = logger.redirect_to_file(dir.path()).expect_err("must fail");
        assert!(err.to_string().contains("failed to open"));

        logger.info("reaches the original file");
        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("reaches the original file"));
    }

    #[test]
    fn test_fatal_does_not_terminate() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("fatal.log");

        let logger = file_logger(&path);
        logger.fatal("unrecoverable state");

        // still running; the statement is an ordinary line
        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("[FATAL] unrecoverable state"));
    }
}
