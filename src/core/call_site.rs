//! Call-site descriptor for structured records

use serde::{Deserialize, Serialize};
use std::panic::Location;

/// Where a logging call originated. Field declaration order is the JSON
/// key order on the wire.
///
/// Two capture paths exist: the logging macros record the full site
/// (`module_path!`, `line!`, `file!`) at the invocation, while direct
/// method calls capture file and line through `#[track_caller]`. The
/// function name is not recoverable on the second path and stays empty;
/// the structure itself is always present in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub function: String,
    pub line: u32,
    pub file: String,
}

impl CallSite {
    pub fn new(function: impl Into<String>, line: u32, file: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            line,
            file: file.into(),
        }
    }

    /// Capture the location of the nearest non-`#[track_caller]` caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            function: String::new(),
            line: location.line(),
            file: location.file().to_string(),
        }
    }

    /// A descriptor with empty fields, for callers with no site to report.
    #[must_use]
    pub fn unresolved() -> Self {
        Self::default()
    }
}
