//! # Duolog
//!
//! A minimal leveled logging facility offering two interchangeable output
//! formats behind one trait: human-readable colorized text and structured
//! line-delimited JSON.
//!
//! ## Features
//!
//! - **Leveled filtering**: six severities, one cheap threshold check
//!   before any formatting work
//! - **Two renderers**: [`TextLogger`] for terminals and files,
//!   [`JsonLogger`] for streaming ingestion
//! - **Synchronous writes**: every statement is written and flushed before
//!   the call returns
//! - **Call-site capture**: structured records report the function, file
//!   and line of the logging call
//!
//! ## Example
//!
//! ```
//! use duolog::prelude::*;
//! use duolog::info;
//!
//! let mut logger = TextLogger::new();
//! logger.set_threshold(Severity::Debug.value());
//!
//! let port = 8080;
//! info!(logger, "server started on port {}", port);
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, LogSink, Logger, LoggerBuilder, LoggerError, OutputFormat, Result, Severity,
        StructuredRecord,
    };
    pub use crate::loggers::{JsonLogger, TextLogger};
}

pub use crate::core::{
    CallSite, LogSink, Logger, LoggerBuilder, LoggerError, OutputFormat, Result, Severity,
    StructuredRecord,
};
pub use crate::loggers::{JsonLogger, TextLogger};
