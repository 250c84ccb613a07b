//! Structured JSON logger

use crate::core::{CallSite, LogSink, Logger, Result, Severity, StructuredRecord};
use parking_lot::Mutex;
use std::path::Path;

/// Renders each statement as one JSON object per line (line-delimited
/// JSON), suitable for streaming ingestion. No pretty-printing.
///
/// Defaults to threshold INFO on standard output.
pub struct JsonLogger {
    threshold: Severity,
    sink: Mutex<LogSink>,
}

impl JsonLogger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Severity::Info,
            sink: Mutex::new(LogSink::stdout()),
        }
    }

    /// Write a fully built record, subject to the configured threshold.
    ///
    /// The convenience level methods never populate `error` or `context`;
    /// callers needing those fields build the [`StructuredRecord`]
    /// themselves and hand it in here.
    pub fn write_record(&self, record: &StructuredRecord) {
        if !record.level.permits(self.threshold) {
            return;
        }
        self.emit(record);
    }

    fn emit(&self, record: &StructuredRecord) {
        let mut line = match record.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("[LOGGER ERROR] failed to serialize log record: {}", e);
                return;
            }
        };
        line.push('\n');

        if let Err(e) = self.sink.lock().write_line(&line) {
            eprintln!("[LOGGER ERROR] failed to write log line: {}", e);
        }
    }
}

impl Default for JsonLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for JsonLogger {
    fn set_threshold(&mut self, level: i32) {
        // out-of-range values reset to INFO rather than being ignored
        self.threshold = Severity::from_value(level).unwrap_or(Severity::Info);
    }

    fn redirect_to_file(&mut self, path: &Path) -> Result<()> {
        let sink = LogSink::open(path)?;
        *self.sink.get_mut() = sink;
        Ok(())
    }

    fn log(&self, level: Severity, message: &str, site: CallSite) {
        if !level.permits(self.threshold) {
            return;
        }
        self.emit(&StructuredRecord::new(level, message, site));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::value::RawValue;
    use std::fs;
    use tempfile::tempdir;

    fn read_single_record(path: &Path) -> serde_json::Value {
        let content = fs::read_to_string(path).expect("read back");
        let mut lines = content.lines();
        let line = lines.next().expect("one record");
        assert_eq!(lines.next(), None, "expected exactly one record");
        serde_json::from_str(line).expect("valid JSON")
    }

    #[test]
    fn test_level_method_record_shape() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("shape.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");
        logger.info("server started");

        let record = read_single_record(&path);
        let object = record.as_object().expect("object");
        assert_eq!(object.len(), 4, "error/context must be absent: {}", record);
        assert_eq!(record["message"], "server started");
        assert_eq!(record["level"], "INFO");
        assert!(record["caller"]["file"].as_str().unwrap().ends_with("json.rs"));
        assert!(record["caller"]["line"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_write_record_with_error_and_context() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("full.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");

        let fragment = RawValue::from_string(r#"{"request_id":"abc-123"}"#.to_string())
            .expect("valid fragment");
        let record = StructuredRecord::new(Severity::Error, "request failed", CallSite::default())
            .with_error("connection refused")
            .with_context(fragment);
        logger.write_record(&record);

        let parsed = read_single_record(&path);
        assert_eq!(parsed["error"], "connection refused");
        assert_eq!(parsed["context"][0]["request_id"], "abc-123");
    }

    #[test]
    fn test_write_record_respects_threshold() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("filtered.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");

        let record = StructuredRecord::new(Severity::Debug, "below threshold", CallSite::default());
        logger.write_record(&record);

        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.is_empty());
    }

    #[test]
    fn test_out_of_range_threshold_resets_to_info() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("reset.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");
        logger.set_threshold(Severity::Fatal.value());

        logger.info("filtered at FATAL");
        logger.set_threshold(7);
        logger.info("emitted after reset");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("emitted after reset"));
    }

    #[test]
    fn test_one_object_per_line() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("lines.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");

        logger.info("first");
        logger.warn("second");
        logger.error("third");

        let content = fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            assert!(parsed["message"].is_string());
        }
    }

    #[test]
    fn test_failed_redirect_keeps_previous_sink() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("kept.jsonl");

        let mut logger = JsonLogger::new();
        logger.redirect_to_file(&path).expect("redirect");
        logger.redirect_to_file(dir.path()).expect_err("must fail");

        logger.info("reaches the original file");
        let record = read_single_record(&path);
        assert_eq!(record["message"], "reaches the original file");
    }
}
