/*!
 * Queue Reversal
 * In-place link rewiring, no allocation
 */

use super::fifo::StrQueue;
use super::types::Link;
use log::debug;
use std::ptr::NonNull;

impl StrQueue {
    /// Reverse the queue in place by rewiring every `next` link. The
    /// former tail becomes the head and vice versa. No node or value
    /// is allocated or dropped.
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }

        // The current head node ends up last.
        let new_tail = self.head.as_deref_mut().map(NonNull::from);

        let mut reversed: Link = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        self.tail = new_tail;

        debug!("reversed {} queued values", self.len);
    }
}
