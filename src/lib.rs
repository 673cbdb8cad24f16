//! Linked lists built for studying pointer manipulation, in two flavours.
//!
//! The primary structure is [`List`], a doubly-linked list bounded by a pair
//! of *sentinel* nodes. The sentinels are permanently allocated boundary
//! markers that never carry a payload:
//!
//! ```text
//!           ┌──────┐     ┌─────┐     ┌─────┐     ┌──────┐
//!  HEAD ───►│ head │◄───►│  1  │◄───►│  2  │◄───►│ tail │◄─── TAIL
//!           └──────┘     └─────┘     └─────┘     └──────┘
//!            sentinel                              sentinel
//! ```
//!
//! `head.next` is always the first element (or the tail sentinel when the
//! list is empty) and `tail.prev` is always the last, so every interior node
//! has a live neighbour on both sides. Insertion and deletion are then
//! uniform four-pointer splices with no first/last special cases, which is
//! the property this layout exists to demonstrate.
//!
//! Positions in a [`List`] are named by [`NodeRef`] handles rather than
//! references or raw pointers. A handle stays valid while its node is in the
//! list; once the node is removed the handle goes *stale* and every
//! operation rejects it with a [`ListError`] instead of touching an
//! unrelated node:
//!
//! ```
//! use sentinel_list::{List, ListError};
//!
//! let mut list = List::new();
//! let a = list.push_back('a');
//! let c = list.push_back('c');
//! list.insert_after(a, 'b')?;
//! assert_eq!(list.iter().collect::<String>(), "abc");
//!
//! assert_eq!(list.remove(c)?, 'c');
//! assert_eq!(list.remove(c), Err(ListError::InvalidNode));
//! # Ok::<(), ListError>(())
//! ```
//!
//! The second flavour is [`singly::SinglyList`], a null-terminated
//! singly-linked list of owned nodes. It is deliberately barer: no tail
//! pointer, no stored length. It exists as the substrate for the classic
//! one-pass algorithms in [`singly::tricks`], which are exercises in
//! rewriting a node chain through its links:
//!
//! ```
//! use sentinel_list::singly::{tricks, SinglyList};
//! use std::iter::FromIterator;
//!
//! let mut list = SinglyList::from_iter([1, 2, 3, 4, 5]);
//! assert_eq!(tricks::remove_kth_from_end(&mut list, 2), Ok(4));
//! assert_eq!(list, SinglyList::from_iter([1, 2, 3, 5]));
//! ```

mod error;

pub mod list;
pub mod singly;

#[doc(inline)]
pub use crate::error::ListError;
#[doc(inline)]
pub use crate::list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use crate::list::{List, NodeRef};
