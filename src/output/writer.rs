// src/output/writer.rs
//! Executes a sink write and records what happened.

use super::sink::Sink;
use super::types::Delivery;
use crate::error::AppError;
use std::time::Instant;

/// Writes `content` to `sink`, logging size and timing.
pub fn deliver(sink: &dyn Sink, content: &str) -> Result<Delivery, AppError> {
    let target = sink.describe();
    let start = Instant::now();

    log::debug!("Delivering {} bytes to {}", content.len(), target);

    match sink.write(content) {
        Ok(bytes_written) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            log::info!("Wrote {} bytes to {} in {}ms", bytes_written, target, duration_ms);
            Ok(Delivery {
                target,
                bytes_written,
                duration_ms,
            })
        }
        Err(e) => {
            log::error!("Delivery to {} failed: {}", target, e);
            Err(e)
        }
    }
}
