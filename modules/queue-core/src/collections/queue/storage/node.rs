use core::mem;

/// Stable index identifying a node inside the storage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

impl NodeKey {
  /// Wraps a raw slot index.
  #[must_use]
  pub const fn new(index: usize) -> Self {
    Self(index)
  }

  /// Returns the raw slot index.
  #[must_use]
  pub const fn to_usize(self) -> usize {
    self.0
  }
}

/// A single queued element: the owned payload plus the link to the next node in the chain.
#[derive(Debug)]
pub struct Node<T> {
  payload: T,
  next:    Option<NodeKey>,
}

impl<T> Node<T> {
  /// Creates an unlinked node around the payload.
  #[must_use]
  pub const fn new(payload: T) -> Self {
    Self { payload, next: None }
  }

  /// Consumes the node, handing the payload back to the caller.
  #[must_use]
  pub fn into_payload(self) -> T {
    self.payload
  }

  /// Borrows the payload.
  #[must_use]
  pub const fn payload(&self) -> &T {
    &self.payload
  }

  /// Link to the following node, if any.
  #[must_use]
  pub const fn next(&self) -> Option<NodeKey> {
    self.next
  }

  pub(crate) const fn set_next(&mut self, next: Option<NodeKey>) {
    self.next = next;
  }

  /// Structural bytes of one node plus the stated per-payload contribution.
  #[must_use]
  pub const fn footprint_in_bytes(payload_bytes: usize) -> usize {
    mem::size_of::<Self>() + payload_bytes
  }
}
