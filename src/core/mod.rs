/*!
 * Core Module
 * Shared types and centralized error handling
 */

pub mod errors;
pub mod types;

pub use errors::{QueueError, QueueResult};
pub use types::Size;
