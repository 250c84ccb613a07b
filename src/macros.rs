//! Logging macros for ergonomic message formatting.
//!
//! The macros format with standard `format!` substitution and record the
//! full call site (module path, line, file) at the invocation, which is
//! what structured output reports as the caller. The [`crate::Logger`]
//! trait must be in scope at the call site.
//!
//! # Examples
//!
//! ```
//! use duolog::prelude::*;
//! use duolog::info;
//!
//! let logger = TextLogger::new();
//!
//! // Basic logging
//! info!(logger, "server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "server listening on port {}", port);
//! ```

/// Log at an explicit severity with automatic formatting.
///
/// TRACE statements are only reachable through this macro (or
/// [`crate::Logger::log`] directly); the convenience surface starts at
/// DEBUG.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let mut logger = TextLogger::new();
/// # logger.set_threshold(Severity::Trace.value());
/// use duolog::log;
/// log!(logger, Severity::Trace, "entering handler");
/// log!(logger, Severity::Error, "status code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            &format!($($arg)+),
            $crate::CallSite::new(module_path!(), line!(), file!()),
        )
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = TextLogger::new();
/// use duolog::debug;
/// debug!(logger, "cache miss for key {}", "session-42");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = TextLogger::new();
/// use duolog::info;
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warn-severity message.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = TextLogger::new();
/// use duolog::warn;
/// warn!(logger, "retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = TextLogger::new();
/// use duolog::error;
/// error!(logger, "failed to connect: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-severity message. The process keeps running; FATAL is a
/// label, not an exit.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = TextLogger::new();
/// use duolog::fatal;
/// fatal!(logger, "unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
