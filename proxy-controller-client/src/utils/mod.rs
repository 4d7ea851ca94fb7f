//! Utility modules.

/// Log sanitization utilities to keep large responses out of logs and banners.
pub mod log_sanitizer;
