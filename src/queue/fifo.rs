/*!
 * FIFO Queue
 * Construction, insertion, removal, and size bookkeeping
 */

use super::types::{copy_truncated, Link, Node};
use crate::core::errors::{QueueError, QueueResult};
use log::{debug, warn};
use std::ptr::NonNull;

/// String FIFO queue over an owned singly linked node chain.
///
/// The head link owns the whole chain; `tail` is a non-owning alias to
/// the last node, valid exactly when the chain is non-empty. `len` is
/// cached so size queries never traverse.
pub struct StrQueue {
    pub(super) head: Link,
    pub(super) tail: Option<NonNull<Node>>,
    pub(super) len: usize,
}

// The chain is exclusively owned and `tail` only aliases nodes inside
// it, so moving the queue across threads is sound. No interior
// mutability: concurrent callers must serialize externally.
unsafe impl Send for StrQueue {}
unsafe impl Sync for StrQueue {}

impl StrQueue {
    /// Create an empty queue. Allocates nothing.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements, O(1) from the cached count.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a copy of `value` before the current head.
    pub fn insert_head(&mut self, value: &str) -> QueueResult<()> {
        let mut node = Node::alloc(value)?;

        if self.head.is_none() {
            // sole node is both head and tail
            self.tail = Some(NonNull::from(&mut *node));
            self.head = Some(node);
        } else {
            node.next = self.head.take();
            self.head = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Insert a copy of `value` after the current tail.
    pub fn insert_tail(&mut self, value: &str) -> QueueResult<()> {
        let mut node = Node::alloc(value)?;
        let raw = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` aliases the last node of the chain we own;
            // no other reference to it exists while `&mut self` is held.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(raw);
        self.len += 1;
        Ok(())
    }

    /// Remove the head element and return its owned value.
    pub fn remove_head(&mut self) -> QueueResult<Box<str>> {
        let mut node = self.head.take().ok_or(QueueError::Empty)?;
        self.head = node.next.take();
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.value)
    }

    /// Remove the head element, copying its value into `buf` truncated
    /// to `buf.len() - 1` bytes and NUL-terminated. Returns the byte
    /// count copied (excluding the terminator).
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> QueueResult<usize> {
        if buf.is_empty() {
            return Err(QueueError::ZeroCapacity);
        }
        let value = self.remove_head()?;
        let copied = copy_truncated(value.as_bytes(), buf);
        if copied < value.len() {
            warn!(
                "truncated {} byte value into {} byte buffer",
                value.len(),
                buf.len()
            );
        }
        Ok(copied)
    }

    /// Value at the head, if any.
    pub fn peek_head(&self) -> Option<&str> {
        self.head.as_deref().map(|node| &*node.value)
    }

    /// Value at the tail, if any.
    pub fn peek_tail(&self) -> Option<&str> {
        // SAFETY: `tail` is only Some while the chain is non-empty, and
        // then aliases the last node owned by `head`.
        self.tail
            .map(|tail| unsafe { &*tail.as_ptr() })
            .map(|node| &*node.value)
    }

    /// Drop every node. Iterative so a long chain cannot overflow the
    /// stack with recursive box destructors.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = None;
        if self.len > 0 {
            debug!("cleared {} queued values", self.len);
        }
        self.len = 0;
    }

    /// Walk from head to the last node and re-point `tail` at it.
    /// Used after link rewiring (reverse, sort), which does not track
    /// the tail incrementally.
    pub(super) fn rederive_tail(&mut self) {
        let mut tail = None;
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            tail = Some(NonNull::from(&mut *node));
            cur = node.next.as_deref_mut();
        }
        self.tail = tail;
    }
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StrQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for StrQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
