use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

use crate::list::{List, Slot, HEAD, TAIL};

/// An iterator over the elements of a `List`.
///
/// It keeps a pair of slot indices `start..end` describing the unvisited
/// half-open subrange of the list, where `start` is inclusive and `end` is
/// not (initially the tail sentinel).
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    start: u32,
    end: u32,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            start: list.slot(HEAD).next,
            end: TAIL,
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and shrink the unvisited range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let list = self.list;
        let slot = list.slot(self.start);
        self.start = slot.next;
        self.len -= 1;
        Some(
            slot.payload
                .as_ref()
                .expect("interior slot holds a payload"),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Shrink the unvisited range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let list = self.list;
        self.end = list.slot(self.end).prev;
        self.len -= 1;
        Some(
            list.slot(self.end)
                .payload
                .as_ref()
                .expect("interior slot holds a payload"),
        )
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// `start..end` is the unvisited subrange of the list. The iterator keeps a
/// raw pointer into the slot arena so it can hand out `&'a mut T` across
/// calls; a phantom `&'a mut List<T>` keeps the list exclusively borrowed
/// for its whole lifetime.
///
/// # Examples
///
/// `List` is not readable while an `IterMut` is alive.
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    slots: *mut Slot<T>,
    start: u32,
    end: u32,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let start = list.slot(HEAD).next;
        let len = list.len();
        Self {
            slots: list.slots.as_mut_ptr(),
            start,
            end: TAIL,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is an interior slot of the exclusively borrowed
        // list, and the range shrinks past it immediately, so each slot is
        // yielded at most once and no two returned references alias.
        let slot = unsafe { &mut *self.slots.add(self.start as usize) };
        self.start = slot.next;
        self.len -= 1;
        Some(
            slot.payload
                .as_mut()
                .expect("interior slot holds a payload"),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: as in `next`, but shrinking from the back: `end.prev` is
        // an unvisited interior slot and is consumed by this call.
        self.end = unsafe { (*self.slots.add(self.end as usize)).prev };
        let slot = unsafe { &mut *self.slots.add(self.end as usize) };
        self.len -= 1;
        Some(
            slot.payload
                .as_mut()
                .expect("interior slot holds a payload"),
        )
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("list", &self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Builds the list by appending each value in sequence order; an empty
    /// input yields an empty list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.push_back(item);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter_forward_and_back() {
        let list = List::from_iter(0..5);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        // fused
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_rev_matches_vec() {
        let list = List::from_iter(0..10);
        let forward: Vec<i32> = list.iter().copied().collect();
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(forward, (0..10).collect::<Vec<_>>());
        assert_eq!(backward, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn iter_empty() {
        let list = List::<i32>::new();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list = List::from_iter([1, 2, 3]);
        for element in list.iter_mut() {
            *element *= 10;
        }
        assert_eq!(Vec::from_iter(&list), vec![&10, &20, &30]);
        list.check_linkage();

        let mut iter = list.iter_mut();
        assert_eq!(iter.next_back(), Some(&mut 30));
        assert_eq!(iter.next(), Some(&mut 10));
        assert_eq!(iter.next(), Some(&mut 20));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let list = List::from_iter(0..4);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut list = List::from_iter(0..3);
        list.extend(3..6);
        assert_eq!(Vec::from_iter(list), (0..6).collect::<Vec<_>>());

        let mut list = List::<i32>::new();
        list.extend([1, 2].iter());
        assert_eq!(Vec::from_iter(list), vec![1, 2]);
    }
}
