use crate::collections::queue::{
  storage::{Node, NodeKey},
  QueueSize,
};

/// Allocation provider for queue nodes.
///
/// Implementations decide where node memory lives; the queue calls `acquire` exactly once per
/// node creation and `release` exactly once per node destruction, and never holds partial
/// allocation state across calls. Keys stay valid until the node they name is released.
///
/// A storage instance must not be shared between queues: the chain a queue builds through its
/// keys assumes exclusive ownership of every live slot.
pub trait NodeStorage<T> {
  /// Stores the node and returns its key.
  ///
  /// # Errors
  ///
  /// Hands the node back unchanged when no slot can be supplied, leaving the storage exactly
  /// as it was.
  fn acquire(&mut self, node: Node<T>) -> Result<NodeKey, Node<T>>;

  /// Removes a live node, returning `None` when the key does not refer to one.
  fn release(&mut self, key: NodeKey) -> Option<Node<T>>;

  /// Borrows a live node.
  fn node(&self, key: NodeKey) -> Option<&Node<T>>;

  /// Mutably borrows a live node.
  fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node<T>>;

  /// Upper bound on the number of nodes this storage can hold.
  fn capacity(&self) -> QueueSize;

  /// Structural bytes one stored node occupies, as seen by this storage.
  ///
  /// Storages whose slots live inline in the handle report zero here; those bytes are already
  /// part of the handle footprint.
  #[cfg(feature = "get_size_in_bytes")]
  fn node_footprint_in_bytes(&self) -> usize;
}
