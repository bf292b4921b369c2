/*!
 * Queue Sort
 * Merge sort over the node links, ascending byte-wise order
 */

use super::fifo::StrQueue;
use super::types::{Link, Node};
use log::debug;

impl StrQueue {
    /// Sort the queue ascending by byte-wise string comparison.
    ///
    /// Merge sort over the links themselves: the chain is split at its
    /// midpoint, the halves are sorted recursively, and the sorted
    /// halves are merged smallest-first. No node is allocated or
    /// dropped; only `next` links are rewired. Stability is not part
    /// of the contract. A queue of zero or one elements is untouched.
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }

        let chain = self.head.take();
        self.head = merge_sort(chain);
        // splitting and merging do not track the last node
        self.rederive_tail();

        debug!("merge sorted {} queued values", self.len);
    }
}

fn merge_sort(chain: Link) -> Link {
    let Some(node) = chain else {
        return None;
    };
    // a sub-chain with no next link is already sorted
    if node.next.is_none() {
        return Some(node);
    }
    let (left, right) = split(node);
    merge(merge_sort(Some(left)), merge_sort(right))
}

/// Cut the chain after its midpoint, found with a slow/fast traversal:
/// the fast cursor advances two links per slow hop, so when it runs out
/// the slow position marks the end of the left half.
fn split(mut head: Box<Node>) -> (Box<Node>, Link) {
    let mut hops = 0usize;
    let mut fast: &Node = &head;
    while let Some(two_ahead) = fast.next.as_deref().and_then(|next| next.next.as_deref()) {
        fast = two_ahead;
        hops += 1;
    }

    let mut cut: &mut Node = &mut head;
    for _ in 0..hops {
        cut = match cut.next.as_deref_mut() {
            Some(next) => next,
            None => unreachable!("fast cursor bounds the slow walk"),
        };
    }
    let right = cut.next.take();
    (head, right)
}

/// Merge two sorted chains by repeatedly taking the byte-wise smaller
/// of the two current heads, then appending the unconsumed remainder
/// wholesale.
fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged: Link = None;
    let mut cursor = &mut merged;
    loop {
        match (left, right) {
            (None, rest) | (rest, None) => {
                *cursor = rest;
                break;
            }
            (Some(mut l), Some(mut r)) => {
                // compare the two different half heads
                if l.value <= r.value {
                    left = l.next.take();
                    right = Some(r);
                    cursor = &mut cursor.insert(l).next;
                } else {
                    right = r.next.take();
                    left = Some(l);
                    cursor = &mut cursor.insert(r).next;
                }
            }
        }
    }
    merged
}
