//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use call_site::CallSite;
pub use error::{LoggerError, Result};
pub use level::Severity;
pub use logger::{Logger, LoggerBuilder, OutputFormat};
pub use record::StructuredRecord;
pub use sink::LogSink;
