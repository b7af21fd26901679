use crate::collections::queue::storage::Node;

/// Storage cell: either a live node or a link in the vacant free list.
#[derive(Debug)]
pub(crate) enum Slot<T> {
  /// Free cell pointing at the next vacant slot.
  Vacant {
    /// Index of the next vacant slot, if any.
    next_free: Option<usize>,
  },
  /// Cell holding a live node.
  Occupied(Node<T>),
}
