/*!
 * Queue Types
 * Node chain representation, limits, and the bounded copy routine
 */

use crate::core::errors::{QueueError, QueueResult};

// Queue limits
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1MB

/// Owning link: each node is owned by its predecessor (or the queue head).
pub(super) type Link = Option<Box<Node>>;

/// A single chain element owning one string value.
#[derive(Debug)]
pub(super) struct Node {
    pub value: Box<str>,
    pub next: Link,
}

impl Node {
    /// Allocate a node holding a copy of `value` sized exactly to fit.
    ///
    /// The value copy is the only allocation large enough to plausibly
    /// fail, so it goes through `try_reserve_exact` and surfaces
    /// `AllocationFailed` instead of aborting. Nothing is linked on
    /// failure, so no partial allocation survives.
    pub fn alloc(value: &str) -> QueueResult<Box<Node>> {
        if value.len() > MAX_VALUE_SIZE {
            return Err(QueueError::ValueTooLarge {
                size: value.len(),
                limit: MAX_VALUE_SIZE,
            });
        }

        let mut copy = String::new();
        copy.try_reserve_exact(value.len())
            .map_err(|_| QueueError::AllocationFailed { bytes: value.len() })?;
        copy.push_str(value);

        Ok(Box::new(Node {
            // capacity == len, so no realloc happens here
            value: copy.into_boxed_str(),
            next: None,
        }))
    }
}

/// Copy `src` into `dst` truncated to `dst.len() - 1` bytes, writing a
/// NUL terminator immediately after the copied bytes and another at the
/// final buffer position regardless of source length (the two coincide
/// when the value fills the buffer). Returns the byte count copied
/// (excluding the terminators).
///
/// A one-byte destination receives only the terminator.
pub(super) fn copy_truncated(src: &[u8], dst: &mut [u8]) -> usize {
    debug_assert!(!dst.is_empty());
    let n = src.len().min(dst.len() - 1);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    dst[dst.len() - 1] = 0;
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_copies_exactly() {
        let node = Node::alloc("hello").unwrap();
        assert_eq!(&*node.value, "hello");
        assert!(node.next.is_none());
    }

    #[test]
    fn test_alloc_rejects_oversized() {
        let big = "x".repeat(MAX_VALUE_SIZE + 1);
        assert_eq!(
            Node::alloc(&big).unwrap_err(),
            QueueError::ValueTooLarge {
                size: MAX_VALUE_SIZE + 1,
                limit: MAX_VALUE_SIZE,
            }
        );
    }

    #[test]
    fn test_copy_fits() {
        let mut buf = [0xFFu8; 8];
        let n = copy_truncated(b"abc", &mut buf);
        assert_eq!(n, 3);
        assert_eq!(&buf[..4], b"abc\0");
        // untouched between the value terminator and the final one
        assert_eq!(&buf[4..7], [0xFF; 3]);
        assert_eq!(buf[7], 0);
    }

    #[test]
    fn test_copy_truncates() {
        let mut buf = [0xFFu8; 3];
        let n = copy_truncated(b"abcdef", &mut buf);
        assert_eq!(n, 2);
        assert_eq!(&buf, b"ab\0");
    }

    #[test]
    fn test_copy_terminator_only() {
        let mut buf = [0xFFu8; 1];
        let n = copy_truncated(b"x", &mut buf);
        assert_eq!(n, 0);
        assert_eq!(buf[0], 0);
    }
}
