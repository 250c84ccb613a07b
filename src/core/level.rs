//! Severity level definitions and the filtering predicate

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the six named severities, totally ordered by urgency.
///
/// The discriminants are the public wire values: raw threshold values 1
/// through 6 map onto `Trace` through `Fatal` via [`Severity::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Default)]
#[repr(i32)]
pub enum Severity {
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Convert a raw level value into a severity. Values outside 1..=6 have
    /// no severity; how a logger treats them is variant-specific.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Severity::Trace),
            2 => Some(Severity::Debug),
            3 => Some(Severity::Info),
            4 => Some(Severity::Warn),
            5 => Some(Severity::Error),
            6 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Numeric value of this severity, 1 (TRACE) through 6 (FATAL).
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Whether a call at this severity passes the configured threshold.
    ///
    /// This is the only filtering logic in the crate and is evaluated
    /// before any formatting or allocation for the call.
    #[inline]
    pub fn permits(self, threshold: Severity) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

// Serialized as the uppercase level name so records carry "INFO" rather
// than the variant identifier.
impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
