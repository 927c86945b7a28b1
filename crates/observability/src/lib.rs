//! Tracing and logging (shared setup).

/// Initialize process-wide tracing with the given output format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat, default_level: &str) {
    tracing::init(format, default_level);
    ::tracing::debug!(%format, default_level, "tracing initialized");
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, LogFormatError};
