use crate::collections::queue::{traits::QueueBase, QueueError};

/// Trait providing read operations from the queue for mutable references.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes the element at the head of the queue; `Ok(None)` signals an empty queue.
  ///
  /// # Errors
  ///
  /// Implementations backed by fallible storage may surface a [`QueueError`]; the linked queue
  /// itself never fails here.
  fn poll_mut(&mut self) -> Result<Option<E>, QueueError<E>>;

  /// Releases every remaining element.
  #[cfg(feature = "clear")]
  fn clean_up_mut(&mut self);
}
