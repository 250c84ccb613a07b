//! Logger variant implementations

pub mod json;
pub mod text;

pub use json::JsonLogger;
pub use text::TextLogger;
