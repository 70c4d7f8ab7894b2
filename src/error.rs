//! Central error handling for the inspection core.
//!
//! All failures are reported to the caller as values; nothing here retries
//! or aborts the process. Unsupported resource kinds in memory accounting are
//! skipped rather than surfaced, so they have no variant.

/// Centralized error type for inspection operations.
#[derive(thiserror::Error, Debug)]
pub enum InspectError {
    /// The declared record layout does not evenly divide the buffer contents.
    #[error("layout mismatch: buffer holds {buffer_size} bytes, which is not a multiple of the {record_size}-byte record layout")]
    LayoutMismatch { buffer_size: u64, record_size: u64 },

    /// A page or decode was requested while no snapshot is resident.
    #[error("no buffer snapshot loaded")]
    NotLoaded,

    /// The GPU-to-host copy failed.
    #[error("readback error: {0}")]
    Readback(String),
}

impl InspectError {
    pub fn readback<T: ToString>(msg: T) -> Self {
        InspectError::Readback(msg.to_string())
    }
}

/// Result type alias for inspection operations.
pub type InspectResult<T> = Result<T, InspectError>;
