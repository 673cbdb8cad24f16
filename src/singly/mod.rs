//! A null-terminated singly-linked list.
//!
//! This is the simpler restatement of the list operations: absence of a
//! neighbour is expressed as `None` rather than as a sentinel node, so
//! boundary cases are handled by `Option` plumbing instead of uniform
//! splices. It exists as the substrate for the classic one-pass algorithms
//! in [`tricks`], which rely on direct access to the node chain.
//!
//! The sentinel-based [`List`](crate::List) is the primary structure; keep
//! using it unless an algorithm specifically needs null-terminated nodes.

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

pub mod tricks;

/// Owned link to the next node: `None` marks the end of the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A singly-linked, null-terminated list with owned nodes.
///
/// No tail pointer and no length field are kept: the length is derivable
/// by traversal, and [`append`] deliberately pays the *O*(*n*) walk that
/// the missing tail pointer costs. That contrast is the point of keeping
/// this variant next to the sentinel list, whose append is *O*(1).
///
/// [`append`]: SinglyList::append
pub struct SinglyList<T> {
    head: Link<T>,
}

/// A node of a [`SinglyList`]: one payload and an owned link to the next
/// node.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }

    /// The payload of this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload of this node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The successor node, or `None` if this is the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

/// Walk to the link holding the `n`-th node (zero-based), or report how
/// many nodes the chain actually had.
///
/// Iterative, like [`Drop`]: a frame per node would overflow the stack on
/// a long chain.
fn seek_link<T>(link: &mut Link<T>, n: usize) -> Result<&mut Link<T>, usize> {
    let mut link = link;
    for walked in 0..n {
        match link {
            Some(node) => link = &mut node.next,
            None => return Err(walked),
        }
    }
    Ok(link)
}

/// Walk to the terminating `None` link of the chain. Iterative, like
/// [`seek_link`].
fn tail_link<T>(link: &mut Link<T>) -> &mut Link<T> {
    let mut link = link;
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<T> SinglyList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes, by traversal.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: no count is
    /// maintained, matching the "length unknown" premise the one-pass
    /// tricks are built on.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Adds an element at the front of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        Some(value)
    }

    /// Adds an element at the back of the list by walking the chain to its
    /// terminating link.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: without a tail
    /// pointer there is nothing to splice against but the end of the walk.
    /// The sentinel list's `push_back` shows the *O*(1) alternative.
    pub fn append(&mut self, value: T) {
        let tail = tail_link(&mut self.head);
        *tail = Some(Node::boxed(value, None));
    }

    /// Returns the node at zero-based offset `k`, or `None` if `k` is past
    /// the end.
    pub fn node_at(&self, k: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..k {
            node = node?.next.as_deref();
        }
        node
    }

    /// Returns the node at zero-based offset `k` mutably, or `None` if `k`
    /// is past the end.
    pub fn node_at_mut(&mut self, k: usize) -> Option<&mut Node<T>> {
        let link = seek_link(&mut self.head, k).ok()?;
        link.as_deref_mut()
    }

    /// Returns the first node whose payload equals `key`, or `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn search(&self, key: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if n.value == *key {
                return Some(n);
            }
            node = n.next.as_deref();
        }
        None
    }

    /// Provides a forward iterator over the payloads.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so that dropping a long list cannot overflow the
// stack through nested `Box` drops.
impl<T> Drop for SinglyList<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

/// An iterator over the payloads of a [`SinglyList`].
pub struct Iter<'a, T: 'a> {
    node: Option<&'a Node<T>>,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the payloads of a [`SinglyList`].
pub struct IntoIter<T> {
    list: SinglyList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> FromIterator<T> for SinglyList<T> {
    /// Builds the list in sequence order with a single tail cursor, so the
    /// *O*(*n*) [`append`](SinglyList::append) is not paid per element.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = tail_link(&mut self.head);
        for value in iter {
            tail = &mut tail.insert(Node::boxed(value, None)).next;
        }
    }
}

impl<T: PartialEq> PartialEq for SinglyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
