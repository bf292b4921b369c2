/*!
 * Core Types
 * Common types used across the crate
 */

/// Size type for lengths and capacities
pub type Size = usize;
