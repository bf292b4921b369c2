/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Size;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Queue operation result
pub type QueueResult<T> = Result<T, QueueError>;

/// Queue-related errors with serialization support
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Queue is empty")]
    #[diagnostic(
        code(queue::empty),
        help("Nothing to remove. Check len() or is_empty() before removal.")
    )]
    Empty,

    #[error("Value of {size} bytes exceeds limit of {limit}")]
    #[diagnostic(
        code(queue::value_too_large),
        help("Split the value or raise MAX_VALUE_SIZE if the workload needs larger entries.")
    )]
    ValueTooLarge { size: Size, limit: Size },

    #[error("Failed to allocate {bytes} bytes for value copy")]
    #[diagnostic(
        code(queue::allocation_failed),
        help("System may be low on memory. The queue is unchanged; retry after freeing resources.")
    )]
    AllocationFailed { bytes: Size },

    #[error("Output buffer has no room for the terminator byte")]
    #[diagnostic(
        code(queue::zero_capacity),
        help("Removal buffers must hold at least one byte for the NUL terminator.")
    )]
    ZeroCapacity,
}
