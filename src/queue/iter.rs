/*!
 * Queue Iteration
 * Borrowing front-to-back traversal over queued values
 */

use super::fifo::StrQueue;
use super::types::Node;

/// Front-to-back iterator over queued values.
pub struct Iter<'a> {
    cur: Option<&'a Node>,
    remaining: usize,
}

impl StrQueue {
    /// Iterate the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            cur: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
