/*!
 * strqueue
 * String FIFO queue over an owned singly linked chain with in-place
 * reversal and link-rewiring merge sort
 */

pub mod core;
pub mod queue;

// Re-export public API
pub use crate::core::errors::{QueueError, QueueResult};
pub use crate::queue::{Iter, StrQueue, MAX_VALUE_SIZE};
