#[cfg(feature = "get_size")]
use crate::collections::queue::QueueSize;

/// Base read-only queries shared by every queue trait.
pub trait QueueBase<E> {
  /// Returns the current size of the queue.
  #[cfg(feature = "get_size")]
  #[must_use]
  fn len(&self) -> QueueSize;

  /// Returns the queue capacity.
  #[cfg(feature = "get_size")]
  #[must_use]
  fn capacity(&self) -> QueueSize;

  /// Checks whether the queue is empty.
  #[must_use]
  fn is_empty(&self) -> bool;
}
