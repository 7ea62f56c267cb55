// src/output/types.rs
//! Record of a finished sink write.

/// A successfully delivered payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Human-readable target, e.g. a file path or "clipboard".
    pub target: String,
    pub bytes_written: usize,
    pub duration_ms: u64,
}
