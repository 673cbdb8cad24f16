//! Classic one-pass pointer manipulations on the null-terminated
//! singly-linked list.
//!
//! Each function is a standalone exercise in rewriting the node chain
//! through its links, written against the "length unknown" premise: none
//! of them takes a pre-computed length, and each walks the chain at most
//! the minimum number of times its contract allows.

use crate::error::ListError;
use crate::singly::{seek_link, Link, Node, SinglyList};

/// Removes the `k`-th node counting from the end (1-based: `k == 1` is the
/// last node) and returns its payload, locating it in a single pass.
///
/// A lead cursor runs `k` links ahead of a lag cursor; when the lead
/// cursor falls off the end, the lag cursor holds the link to the node to
/// remove. Starting the lag cursor at the head *link* rather than the head
/// node plays the role of the helper sentinel in the classic formulation:
/// it leaves the lag cursor at the predecessor link, which is what the
/// unlink needs. A naive version would count the length first and walk
/// again; this does not.
///
/// # Errors
///
/// [`ListError::IndexOutOfRange`] if `k == 0` or `k` exceeds the length.
/// Nothing is unlinked on the error path.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*) time, one traversal.
///
/// # Examples
///
/// ```
/// use sentinel_list::singly::SinglyList;
/// use sentinel_list::singly::tricks::remove_kth_from_end;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyList::from_iter([1, 2, 3, 4, 5]);
/// assert_eq!(remove_kth_from_end(&mut list, 4), Ok(2));
/// assert_eq!(list, SinglyList::from_iter([1, 3, 4, 5]));
/// ```
pub fn remove_kth_from_end<T>(list: &mut SinglyList<T>, k: usize) -> Result<T, ListError> {
    if k == 0 {
        return Err(ListError::IndexOutOfRange {
            index: 0,
            len: list.len(),
        });
    }
    let lag: *mut Link<T> = &mut list.head;
    let mut lead: *const Link<T> = lag as *const Link<T>;
    // SAFETY: both cursors derive from the same exclusive borrow of the
    // list; `lead` stays at least one link ahead of `lag` once it has
    // advanced, so the short-lived references created below never overlap.
    unsafe {
        for walked in 0..k {
            match &*lead {
                Some(node) => lead = &node.next,
                None => {
                    // fell off after `walked` nodes, so that is the length
                    return Err(ListError::IndexOutOfRange {
                        index: k,
                        len: walked,
                    });
                }
            }
        }
        let mut lag = lag;
        while let Some(node) = &*lead {
            lead = &node.next;
            lag = match &mut *lag {
                Some(node) => &mut node.next,
                None => unreachable!("lag cursor trails the lead cursor inside the chain"),
            };
        }
        // `lag` now holds the k-th node from the end
        let mut node = match (*lag).take() {
            Some(node) => node,
            None => unreachable!("lag cursor stopped k links before the end"),
        };
        *lag = node.next.take();
        Ok(node.value)
    }
}

/// Merges two sorted lists into one sorted list in a single pass, reusing
/// every node.
///
/// The naive alternative concatenates and re-sorts in
/// *O*(*n* log *n*); a single merge walk is *O*(*n*). The merge is stable:
/// when payloads compare equal, nodes from `left` come first.
///
/// # Complexity
///
/// This operation should compute in *O*(*n* + *m*) time.
///
/// # Examples
///
/// ```
/// use sentinel_list::singly::SinglyList;
/// use sentinel_list::singly::tricks::merge_sorted;
/// use std::iter::FromIterator;
///
/// let a = SinglyList::from_iter([1, 3, 5]);
/// let b = SinglyList::from_iter([2, 4, 6]);
/// assert_eq!(merge_sorted(a, b), SinglyList::from_iter([1, 2, 3, 4, 5, 6]));
/// ```
pub fn merge_sorted<T: Ord>(mut left: SinglyList<T>, mut right: SinglyList<T>) -> SinglyList<T> {
    let mut merged = SinglyList::new();
    let mut tail = &mut merged.head;
    let mut a = left.head.take();
    let mut b = right.head.take();
    loop {
        match (a, b) {
            (Some(mut x), Some(y)) => {
                if x.value <= y.value {
                    a = x.next.take();
                    b = Some(y);
                    tail = &mut tail.insert(x).next;
                } else {
                    let mut y = y;
                    b = y.next.take();
                    a = Some(x);
                    tail = &mut tail.insert(y).next;
                }
            }
            // one side exhausted: the rest is already sorted and linked
            (rest, None) | (None, rest) => {
                *tail = rest;
                break;
            }
        }
    }
    merged
}

/// Reverses the nodes at zero-based offsets `start..=end` in place, by
/// head insertion: each node of the range is detached and relinked at the
/// front of the already-reversed span.
///
/// # Errors
///
/// [`ListError::IndexOutOfRange`] if `start > end` or `end` is past the
/// last node. The range is validated against the length before any link is
/// rewritten, so a failed call leaves the list untouched.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use sentinel_list::singly::SinglyList;
/// use sentinel_list::singly::tricks::reverse_sublist;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyList::from_iter([1, 2, 3, 4, 5, 6, 7]);
/// reverse_sublist(&mut list, 1, 4)?;
/// assert_eq!(list, SinglyList::from_iter([1, 5, 4, 3, 2, 6, 7]));
/// # Ok::<(), sentinel_list::ListError>(())
/// ```
pub fn reverse_sublist<T>(
    list: &mut SinglyList<T>,
    start: usize,
    end: usize,
) -> Result<(), ListError> {
    let len = list.len();
    if start > end || end >= len {
        return Err(ListError::IndexOutOfRange { index: end, len });
    }
    let link = match seek_link(&mut list.head, start) {
        Ok(link) => link,
        Err(_) => unreachable!("range was validated against the length"),
    };

    // Detach the whole span, reversing node by node onto `reversed`.
    let mut reversed: Link<T> = None;
    let mut rest = link.take();
    for _ in 0..=(end - start) {
        let mut node = match rest {
            Some(node) => node,
            None => unreachable!("range was validated against the length"),
        };
        rest = node.next.take();
        node.next = reversed.take();
        reversed = Some(node);
    }

    // Reattach: the reversed span goes back into `link`, and the original
    // `start` node, now the span's tail, picks up the remainder.
    *link = reversed;
    let span_tail = match seek_link(link, end - start) {
        Ok(link) => link,
        Err(_) => unreachable!("the reversed span has end - start + 1 nodes"),
    };
    match span_tail {
        Some(node) => node.next = rest,
        None => unreachable!("the reversed span has end - start + 1 nodes"),
    }
    Ok(())
}

/// Removes a node in *O*(1) without knowing its predecessor, by moving the
/// successor's payload into the node and unlinking the successor instead.
/// Returns the removed payload.
///
/// This is a workaround, not a general delete: it requires a successor to
/// take over from, so it cannot remove the tail. It is kept separate from
/// the sentinel list's [`remove`](crate::List::remove) on purpose; the two
/// have different preconditions.
///
/// # Errors
///
/// [`ListError::InvalidNode`] if `node` is the tail. The list is not
/// modified on the error path.
///
/// # Examples
///
/// ```
/// use sentinel_list::singly::SinglyList;
/// use sentinel_list::singly::tricks::fast_delete;
/// use std::iter::FromIterator;
///
/// let mut list = SinglyList::from_iter([1, 2, 3]);
/// assert_eq!(fast_delete(list.node_at_mut(1).unwrap()), Ok(2));
/// assert_eq!(list, SinglyList::from_iter([1, 3]));
/// ```
pub fn fast_delete<T>(node: &mut Node<T>) -> Result<T, ListError> {
    let successor = match node.next.take() {
        Some(successor) => successor,
        None => return Err(ListError::InvalidNode),
    };
    let Node { value, next } = *successor;
    node.next = next;
    Ok(std::mem::replace(&mut node.value, value))
}

#[cfg(test)]
mod tests {
    use super::{fast_delete, merge_sorted, remove_kth_from_end, reverse_sublist};
    use crate::error::ListError;
    use crate::singly::SinglyList;
    use std::iter::FromIterator;

    fn collect<T: Clone>(list: &SinglyList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn remove_kth_from_end_mid() {
        let mut list = SinglyList::from_iter([1, 2, 3, 4, 5]);
        assert_eq!(remove_kth_from_end(&mut list, 4), Ok(2));
        assert_eq!(collect(&list), vec![1, 3, 4, 5]);
    }

    #[test]
    fn remove_kth_from_end_boundaries() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        // k == 1 is the tail
        assert_eq!(remove_kth_from_end(&mut list, 1), Ok(3));
        assert_eq!(collect(&list), vec![1, 2]);
        // k == len is the head
        assert_eq!(remove_kth_from_end(&mut list, 2), Ok(1));
        assert_eq!(collect(&list), vec![2]);
        assert_eq!(remove_kth_from_end(&mut list, 1), Ok(2));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_kth_from_end_out_of_range() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        assert_eq!(
            remove_kth_from_end(&mut list, 0),
            Err(ListError::IndexOutOfRange { index: 0, len: 3 })
        );
        assert_eq!(
            remove_kth_from_end(&mut list, 4),
            Err(ListError::IndexOutOfRange { index: 4, len: 3 })
        );
        // failed calls must leave the list intact
        assert_eq!(collect(&list), vec![1, 2, 3]);

        let mut empty = SinglyList::<i32>::new();
        assert_eq!(
            remove_kth_from_end(&mut empty, 1),
            Err(ListError::IndexOutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn merge_sorted_interleaves() {
        let a = SinglyList::from_iter([10, 11, 121, 200, 300, 400, 909, 1001]);
        let b = SinglyList::from_iter([90, 100, 909, 1000]);
        let merged = merge_sorted(a, b);
        assert_eq!(
            collect(&merged),
            vec![10, 11, 90, 100, 121, 200, 300, 400, 909, 909, 1000, 1001]
        );
    }

    #[test]
    fn merge_sorted_empty_sides() {
        let merged = merge_sorted(SinglyList::from_iter([1, 2]), SinglyList::new());
        assert_eq!(collect(&merged), vec![1, 2]);

        let merged = merge_sorted(SinglyList::new(), SinglyList::from_iter([1, 2]));
        assert_eq!(collect(&merged), vec![1, 2]);

        let merged = merge_sorted(SinglyList::<i32>::new(), SinglyList::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_sorted_is_stable() {
        let a = SinglyList::from_iter([(1, "a"), (2, "a")]);
        let b = SinglyList::from_iter([(1, "b"), (2, "b")]);
        let merged = merge_sorted(a, b);
        assert_eq!(
            collect(&merged),
            vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]
        );
    }

    #[test]
    fn reverse_sublist_interior() {
        let mut list = SinglyList::from_iter([1, 2, 3, 4, 5, 6, 7]);
        reverse_sublist(&mut list, 1, 4).unwrap();
        assert_eq!(collect(&list), vec![1, 5, 4, 3, 2, 6, 7]);
    }

    #[test]
    fn reverse_sublist_whole_and_single() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        reverse_sublist(&mut list, 0, 2).unwrap();
        assert_eq!(collect(&list), vec![3, 2, 1]);

        reverse_sublist(&mut list, 1, 1).unwrap();
        assert_eq!(collect(&list), vec![3, 2, 1]);
    }

    #[test]
    fn reverse_sublist_bad_ranges() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        assert_eq!(
            reverse_sublist(&mut list, 2, 1),
            Err(ListError::IndexOutOfRange { index: 1, len: 3 })
        );
        assert_eq!(
            reverse_sublist(&mut list, 0, 3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(collect(&list), vec![1, 2, 3]);
    }

    #[test]
    fn fast_delete_copies_successor_in() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        assert_eq!(fast_delete(list.node_at_mut(1).unwrap()), Ok(2));
        assert_eq!(collect(&list), vec![1, 3]);
    }

    #[test]
    fn fast_delete_rejects_tail() {
        let mut list = SinglyList::from_iter([1, 2, 3]);
        assert_eq!(
            fast_delete(list.node_at_mut(2).unwrap()),
            Err(ListError::InvalidNode)
        );
        assert_eq!(collect(&list), vec![1, 2, 3]);
    }
}
