//! Utility modules.

/// Timestamp serialization helpers shared by stores.
pub mod datetime;

/// Keeps large response bodies out of logs.
pub mod log_sanitizer;
