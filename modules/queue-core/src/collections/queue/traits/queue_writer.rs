use crate::collections::queue::{traits::QueueBase, QueueError};

/// Trait providing write operations to the queue for mutable references.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] handing the element back when node storage cannot
  /// supply a slot; the queue is left unchanged.
  fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>>;
}
