use std::fmt::{Debug, Formatter};

use crate::error::ListError;
use crate::{Iter, IterMut};

pub mod iterator;

mod algorithms;

/// Slot index of the head sentinel. Allocated at construction, never freed.
const HEAD: u32 = 0;
/// Slot index of the tail sentinel. Allocated at construction, never freed.
const TAIL: u32 = 1;
/// Marker index for "no slot": the end of the free chain, and the unused
/// outward links of the sentinels.
const NIL: u32 = u32::MAX;

/// A doubly-linked list bounded by a pair of sentinel nodes.
///
/// The two sentinels are permanently allocated boundary markers that are
/// never part of the logical sequence. `head.next` is always the first
/// element (or the tail sentinel when the list is empty), and `tail.prev`
/// is always the last. Because every interior node therefore has a live
/// neighbour on both sides, insertion and deletion are uniform four-pointer
/// splices with no head/tail special cases.
///
/// Nodes live in a slot arena owned by the list. Mutating operations hand
/// out [`NodeRef`] handles: stable, generation-tagged indices that stay
/// valid while their node is in the list and are detected as stale after
/// the node is removed. Handle-based operations ([`insert_after`],
/// [`remove`], [`get`]) are *O*(1).
///
/// # Naming Conventions
///
/// - `prev`/`next`: the two link fields of a node; following `next` from
///   the head sentinel visits the sequence in order and ends at the tail
///   sentinel.
/// - "interior node": a node holding a payload, as opposed to a sentinel.
///
/// [`insert_after`]: List::insert_after
/// [`remove`]: List::remove
/// [`get`]: List::get
pub struct List<T> {
    slots: Vec<Slot<T>>,
    /// Head of the vacant-slot chain, threaded through `Slot::next`.
    free: u32,
    len: usize,
}

/// One arena slot: a sentinel, an interior node, or a vacant entry awaiting
/// reuse.
///
/// The payload is `None` exactly for the two sentinels and for vacant
/// slots. The generation is bumped every time a slot is vacated, so a
/// [`NodeRef`] minted for the old occupant no longer matches.
struct Slot<T> {
    next: u32,
    prev: u32,
    generation: u32,
    payload: Option<T>,
}

/// A stable handle to an interior node of a [`List`].
///
/// Handles are minted by the list ([`push_front`], [`push_back`],
/// [`insert_after`], [`find_kth`], [`search`]) and stay valid until the
/// node they name is removed. A handle kept across a removal becomes
/// *stale*: every operation given a stale handle rejects it (with
/// [`ListError::InvalidAnchor`], [`ListError::InvalidNode`] or `None`)
/// instead of touching some unrelated node.
///
/// A `NodeRef` is only meaningful for the list that minted it.
///
/// # Examples
///
/// ```
/// use sentinel_list::{List, ListError};
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let second = list.find_kth(1)?;
/// assert_eq!(list.get(second), Some(&2));
///
/// list.remove(second)?;
/// assert_eq!(list.get(second), None); // stale, not dangling
/// assert_eq!(list.remove(second), Err(ListError::InvalidNode));
/// # Ok::<(), ListError>(())
/// ```
///
/// [`push_front`]: List::push_front
/// [`push_back`]: List::push_back
/// [`insert_after`]: List::insert_after
/// [`find_kth`]: List::find_kth
/// [`search`]: List::search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

// Arena and splice primitives.
impl<T> List<T> {
    fn slot(&self, index: u32) -> &Slot<T> {
        &self.slots[index as usize]
    }

    /// First interior slot, or `TAIL` if the list is empty.
    fn first(&self) -> u32 {
        self.slot(HEAD).next
    }

    /// Last interior slot, or `HEAD` if the list is empty.
    fn last(&self) -> u32 {
        self.slot(TAIL).prev
    }

    fn payload(&self, index: u32) -> &T {
        self.slots[index as usize]
            .payload
            .as_ref()
            .expect("interior slot holds a payload")
    }

    fn payload_mut(&mut self, index: u32) -> &mut T {
        self.slots[index as usize]
            .payload
            .as_mut()
            .expect("interior slot holds a payload")
    }

    /// Translate a handle into a live interior slot index, or `None` if the
    /// handle is stale or names a sentinel.
    fn resolve(&self, node: NodeRef) -> Option<u32> {
        let slot = self.slots.get(node.index as usize)?;
        if slot.generation == node.generation && slot.payload.is_some() {
            Some(node.index)
        } else {
            None
        }
    }

    /// Mint a handle for a live interior slot.
    fn handle(&self, index: u32) -> NodeRef {
        NodeRef {
            index,
            generation: self.slot(index).generation,
        }
    }

    fn connect(&mut self, prev: u32, next: u32) {
        self.slots[prev as usize].next = next;
        self.slots[next as usize].prev = prev;
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: u32, next: u32) {
        assert_eq!(self.slot(prev).next, next);
        assert_eq!(self.slot(next).prev, prev);
    }

    /// Allocate a slot for `value` and splice it between the adjacent pair
    /// `prev` and `next`. The four-pointer update is branch-free: both
    /// neighbours always exist, possibly as sentinels.
    fn attach(&mut self, prev: u32, next: u32, value: T) -> u32 {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.allocate(value);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        node
    }

    /// Unsplice the interior slot `node`, vacate it, and return its payload.
    fn detach(&mut self, node: u32) -> T {
        debug_assert!(node != HEAD && node != TAIL, "cannot detach a sentinel");
        let (prev, next) = {
            let slot = self.slot(node);
            (slot.prev, slot.next)
        };
        self.connect(prev, next);
        self.len -= 1;
        self.release(node)
    }

    fn allocate(&mut self, value: T) -> u32 {
        if self.free != NIL {
            let index = self.free;
            let slot = &mut self.slots[index as usize];
            self.free = slot.next;
            slot.next = NIL;
            slot.prev = NIL;
            slot.payload = Some(value);
            index
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                next: NIL,
                prev: NIL,
                generation: 0,
                payload: Some(value),
            });
            index
        }
    }

    /// Vacate `node`, bump its generation so outstanding handles go stale,
    /// and thread it onto the free chain.
    fn release(&mut self, node: u32) -> T {
        let free = self.free;
        let slot = &mut self.slots[node as usize];
        let value = slot
            .payload
            .take()
            .expect("released slot holds a payload");
        slot.generation = slot.generation.wrapping_add(1);
        slot.prev = NIL;
        slot.next = free;
        self.free = node;
        value
    }

    /// Walk the whole list and assert every structural invariant:
    /// double-linkage symmetry, payload presence, sentinel boundary
    /// conditions and the maintained length.
    #[cfg(test)]
    pub(crate) fn check_linkage(&self) {
        let mut count = 0;
        let mut prev = HEAD;
        let mut node = self.first();
        while node != TAIL {
            let slot = self.slot(node);
            assert_eq!(slot.prev, prev, "n.prev.next == n must hold");
            assert!(slot.payload.is_some(), "interior node holds a payload");
            count += 1;
            prev = node;
            node = slot.next;
        }
        assert_eq!(self.slot(TAIL).prev, prev, "n.next.prev == n must hold");
        assert_eq!(count, self.len, "maintained length matches traversal");
        if count == 0 {
            assert_eq!(self.first(), TAIL);
            assert_eq!(self.last(), HEAD);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`: two sentinels pointing directly at each
    /// other, no interior nodes.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        let slots = vec![
            Slot {
                next: TAIL,
                prev: NIL,
                generation: 0,
                payload: None,
            },
            Slot {
                next: NIL,
                prev: HEAD,
                generation: 0,
                payload: None,
            },
        ];
        Self {
            slots,
            free: NIL,
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty, i.e. the sentinels point at
    /// each other.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first() == TAIL
    }

    /// Returns the number of interior nodes.
    ///
    /// The count is maintained across every mutation; it is a convenience
    /// on top of the linked structure, never an input to it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element first in the list by splicing it right after the
    /// head sentinel, and returns a handle to the new node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let first = self.first();
        let node = self.attach(HEAD, first, value);
        self.handle(node)
    }

    /// Appends an element to the back of the list and returns a handle to
    /// the new node.
    ///
    /// The tail sentinel's predecessor is always the last element, so the
    /// splice point is found without any traversal. (A walk from the head
    /// until `next` is the tail sentinel would find the same splice point
    /// in *O*(*n*); that form only has teaching value and is not provided.)
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let last = self.last();
        let node = self.attach(last, TAIL, value);
        self.handle(node)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.first();
        Some(self.detach(first))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.last();
        Some(self.detach(last))
    }

    /// Inserts `value` right after the interior node `anchor` and returns a
    /// handle to the new node.
    ///
    /// The new node is spliced between `anchor` and `anchor.next` with a
    /// four-pointer update and no branching on the anchor's position:
    /// `anchor.next` is always a valid node, possibly the tail sentinel, so
    /// inserting after the last element needs no special case.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidAnchor`] if `anchor` is stale or does not name
    /// an interior node of this list. The check precedes any link rewrite,
    /// so a failed insert leaves the list untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time; no traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let first = list.find_kth(0)?;
    /// list.insert_after(first, 10)?;
    /// assert_eq!(Vec::from_iter(list), vec![1, 10, 2, 3]);
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn insert_after(&mut self, anchor: NodeRef, value: T) -> Result<NodeRef, ListError> {
        let anchor = self.resolve(anchor).ok_or(ListError::InvalidAnchor)?;
        let next = self.slot(anchor).next;
        let node = self.attach(anchor, next, value);
        Ok(self.handle(node))
    }

    /// Removes the interior node named by `node` and returns its payload.
    ///
    /// Its neighbours are re-linked to each other; since a neighbour may be
    /// a sentinel rather than absent, removing the first or last element is
    /// the same splice as removing any other.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidNode`] if `node` is stale or does not name an
    /// interior node of this list. The check precedes any link rewrite.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time given the handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let head = list.find_kth(0)?;
    /// assert_eq!(list.remove(head), Ok(1));
    /// assert_eq!(Vec::from_iter(list), vec![2, 3]);
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn remove(&mut self, node: NodeRef) -> Result<T, ListError> {
        let index = self.resolve(node).ok_or(ListError::InvalidNode)?;
        Ok(self.detach(index))
    }

    /// Returns a handle to the node at zero-based offset `k`, walking
    /// `next` pointers from the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `k` meets or exceeds the length.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let third = list.find_kth(2)?;
    /// assert_eq!(list.get(third), Some(&3));
    /// assert!(list.find_kth(5).is_err());
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn find_kth(&self, k: usize) -> Result<NodeRef, ListError> {
        if k >= self.len {
            return Err(ListError::IndexOutOfRange {
                index: k,
                len: self.len,
            });
        }
        let mut node = self.first();
        for _ in 0..k {
            node = self.slot(node).next;
        }
        Ok(self.handle(node))
    }

    /// Returns a handle to the first node (in forward order) whose payload
    /// equals `key`, or `None` if no payload matches. An unsuccessful
    /// search is an ordinary result, not an error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(list.search(&3).is_some());
    /// assert!(list.search(&99).is_none());
    /// ```
    pub fn search(&self, key: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut node = self.first();
        while node != TAIL {
            if self.payload(node) == key {
                return Some(self.handle(node));
            }
            node = self.slot(node).next;
        }
        None
    }

    /// Provides a reference to the payload of the node named by `node`, or
    /// `None` if the handle is stale.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        let index = self.resolve(node)?;
        self.slots[index as usize].payload.as_ref()
    }

    /// Provides a mutable reference to the payload of the node named by
    /// `node`, or `None` if the handle is stale.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let index = self.resolve(node)?;
        self.slots[index as usize].payload.as_mut()
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.payload(self.first()))
        }
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            let first = self.first();
            Some(self.payload_mut(first))
        }
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.payload(self.last()))
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            let last = self.last();
            Some(self.payload_mut(last))
        }
    }

    /// Removes all interior nodes from the list. The sentinels remain and
    /// end up pointing at each other again.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.check_linkage();
        list.push_back(1);
        assert!(!list.is_empty());
        list.check_linkage();
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.check_linkage();
    }

    #[test]
    fn list_from_sequence_round_trips() {
        let values = vec![1, 2, 3, 4, 5];
        let list = List::from_iter(values.clone());
        assert_eq!(collect(&list), values);
        assert_eq!(list.len(), 5);
        list.check_linkage();

        let empty = List::<i32>::from_iter(Vec::new());
        assert!(empty.is_empty());
        empty.check_linkage();
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.check_linkage();
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(collect(&list), vec![2, 1, 3]);

        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        list.check_linkage();
    }

    #[test]
    fn delete_head_relinks_to_sentinel() {
        let mut list = List::from_iter([1, 2, 3]);
        let head = list.find_kth(0).unwrap();
        assert_eq!(list.remove(head), Ok(1));
        assert_eq!(collect(&list), vec![2, 3]);
        // the new first node's prev must be the head sentinel
        list.check_linkage();
        assert_eq!(list.front(), Some(&2));
    }

    #[test]
    fn delete_tail_relinks_to_sentinel() {
        let mut list = List::from_iter([1, 2, 3]);
        let tail = list.find_kth(2).unwrap();
        assert_eq!(list.remove(tail), Ok(3));
        assert_eq!(collect(&list), vec![1, 2]);
        list.check_linkage();
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn delete_middle() {
        let mut list = List::from_iter([1, 2, 3]);
        let mid = list.find_kth(1).unwrap();
        assert_eq!(list.remove(mid), Ok(2));
        assert_eq!(collect(&list), vec![1, 3]);
        list.check_linkage();
    }

    #[test]
    fn insert_after_splices_everywhere() {
        let mut list = List::from_iter([1, 2, 3]);

        let head = list.find_kth(0).unwrap();
        list.insert_after(head, 10).unwrap();
        assert_eq!(collect(&list), vec![1, 10, 2, 3]);
        list.check_linkage();

        let tail = list.find_kth(3).unwrap();
        list.insert_after(tail, 20).unwrap();
        assert_eq!(collect(&list), vec![1, 10, 2, 3, 20]);
        assert_eq!(list.back(), Some(&20));
        list.check_linkage();
    }

    #[test]
    fn append_links_before_tail_sentinel() {
        let mut list = List::from_iter([1, 2, 3]);
        let appended = list.push_back(10);
        assert_eq!(collect(&list), vec![1, 2, 3, 10]);
        assert_eq!(list.back(), Some(&10));
        assert_eq!(list.get(appended), Some(&10));
        list.check_linkage();
    }

    #[test]
    fn insert_then_remove_restores_structure() {
        let mut list = List::from_iter([1, 2, 3]);
        let anchor = list.find_kth(1).unwrap();

        let inserted = list.insert_after(anchor, 42).unwrap();
        assert_eq!(collect(&list), vec![1, 2, 42, 3]);
        list.check_linkage();

        assert_eq!(list.remove(inserted), Ok(42));
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        list.check_linkage();

        // the anchor handle is still live and still names the same node
        assert_eq!(list.get(anchor), Some(&2));
    }

    #[test]
    fn find_kth_bounds() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(list.get(list.find_kth(0).unwrap()), Some(&1));
        assert_eq!(list.get(list.find_kth(2).unwrap()), Some(&3));
        assert_eq!(
            list.find_kth(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.find_kth(5),
            Err(ListError::IndexOutOfRange { index: 5, len: 3 })
        );

        let empty = List::<i32>::new();
        assert_eq!(
            empty.find_kth(0),
            Err(ListError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn search_first_match_or_none() {
        let list = List::from_iter([1, 2, 3, 2]);
        let found = list.search(&2).unwrap();
        // forward order: the match is the node at offset 1, not offset 3
        assert_eq!(found, list.find_kth(1).unwrap());
        assert_eq!(list.search(&99), None);
    }

    #[test]
    fn stale_handles_are_rejected() {
        let mut list = List::from_iter([1, 2, 3]);
        let second = list.find_kth(1).unwrap();

        assert_eq!(list.remove(second), Ok(2));
        assert_eq!(list.remove(second), Err(ListError::InvalidNode));
        assert_eq!(list.insert_after(second, 9), Err(ListError::InvalidAnchor));
        assert_eq!(list.get(second), None);
        // the failed calls must not have mutated anything
        assert_eq!(collect(&list), vec![1, 3]);
        list.check_linkage();

        // a slot reused by a later insertion must not revive the old handle
        let replacement = list.push_back(4);
        assert_ne!(second, replacement);
        assert_eq!(list.get(second), None);
        assert_eq!(list.get(replacement), Some(&4));
        list.check_linkage();
    }

    #[test]
    fn handles_survive_unrelated_mutations() {
        let mut list = List::from_iter([1, 2, 3]);
        let mid = list.find_kth(1).unwrap();

        list.push_front(0);
        list.push_back(4);
        let head = list.find_kth(0).unwrap();
        list.remove(head).unwrap();

        assert_eq!(list.get(mid), Some(&2));
        *list.get_mut(mid).unwrap() = 20;
        assert_eq!(collect(&list), vec![1, 20, 3, 4]);
        list.check_linkage();
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.check_linkage();

        list.push_back(1);
        assert_eq!(collect(&list), vec![1]);
        list.check_linkage();
    }

    #[test]
    fn list_drop_releases_every_payload() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }

        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn removed_payload_dropped_exactly_once() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }

        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        let first = list.push_back(DropChecker {
            value: 1,
            dropped: &dropped,
        });
        list.push_back(DropChecker {
            value: 2,
            dropped: &dropped,
        });

        drop(list.remove(first));
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
    }
}
