use core::fmt;

/// Errors that occur during queue operations.
///
/// Empty-queue conditions are not errors: `poll` and `peek` signal them with `None`, since
/// polling a queue that happens to be drained is an expected outcome of normal use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// Node storage could not supply a slot for the element. Contains the element whose enqueue
  /// was rejected, so the caller keeps ownership and may retry after freeing memory.
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Extracts the element carried by the failure, handing ownership back to the caller.
  #[must_use]
  pub fn into_item(self) -> T {
    match self {
      | Self::AllocError(item) => item,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AllocError(_) => f.write_str("node storage could not allocate a queue node"),
    }
  }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for QueueError<T> {}
