use thiserror::Error;

/// Errors reported by the list operations.
///
/// Every variant is a local precondition violation, detected *before* any
/// link is rewritten, so a failed operation never leaves a list in a
/// half-mutated state. None of them is recoverable by retry; each signals
/// caller misuse. An unsuccessful [`search`] is **not** an error and is
/// reported as `None` instead.
///
/// [`search`]: crate::List::search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// The anchor handed to [`insert_after`] does not name an interior node
    /// of this list: it is a sentinel, or it is stale (its node has been
    /// removed since the handle was obtained).
    ///
    /// [`insert_after`]: crate::List::insert_after
    #[error("anchor is not an interior node of this list")]
    InvalidAnchor,

    /// The node handed to a delete operation does not name an interior node
    /// of this list, or (for the singly-linked fast delete) is the tail,
    /// which has no successor to take over from.
    #[error("node is not a deletable interior node of this list")]
    InvalidNode,

    /// A positional operation was asked for an offset past the end of the
    /// list.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The offset that was requested.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}
