/*!
 * Queue Module
 * Singly linked string FIFO queue with reversal and merge sort
 */

pub mod fifo;
pub mod iter;
pub mod reverse;
pub mod sort;
pub mod types;

// Re-export public API
pub use fifo::StrQueue;
pub use iter::Iter;
pub use types::MAX_VALUE_SIZE;
