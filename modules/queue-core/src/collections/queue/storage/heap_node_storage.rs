#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::mem;

use crate::collections::queue::{
  storage::{Node, NodeKey, NodeStorage, Slot},
  QueueSize,
};

/// Growable slab storage backed by the global allocator.
///
/// Vacant cells form an intrusive free list, so slots released by `poll` are reused before the
/// slab grows. Growth is fallible: the slab reserves through `try_reserve`, and a refused
/// reservation surfaces as an acquire failure instead of an abort.
#[derive(Debug)]
pub struct HeapNodeStorage<T> {
  slots:     Vec<Slot<T>>,
  free_head: Option<usize>,
}

impl<T> HeapNodeStorage<T> {
  /// Creates an empty slab.
  #[must_use]
  pub const fn new() -> Self {
    Self { slots: Vec::new(), free_head: None }
  }

  /// Creates a slab with room for `capacity` nodes before the first grow.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { slots: Vec::with_capacity(capacity), free_head: None }
  }
}

impl<T> Default for HeapNodeStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> NodeStorage<T> for HeapNodeStorage<T> {
  fn acquire(&mut self, node: Node<T>) -> Result<NodeKey, Node<T>> {
    match self.free_head {
      | Some(index) => {
        let Some(slot) = self.slots.get_mut(index) else {
          return Err(node);
        };
        let next_free = match slot {
          | Slot::Vacant { next_free } => *next_free,
          | Slot::Occupied(_) => return Err(node),
        };
        *slot = Slot::Occupied(node);
        self.free_head = next_free;
        Ok(NodeKey::new(index))
      },
      | None => {
        if self.slots.try_reserve(1).is_err() {
          return Err(node);
        }
        let index = self.slots.len();
        self.slots.push(Slot::Occupied(node));
        Ok(NodeKey::new(index))
      },
    }
  }

  fn release(&mut self, key: NodeKey) -> Option<Node<T>> {
    let index = key.to_usize();
    let free_head = self.free_head;
    let slot = self.slots.get_mut(index)?;
    match mem::replace(slot, Slot::Vacant { next_free: free_head }) {
      | Slot::Occupied(node) => {
        self.free_head = Some(index);
        Some(node)
      },
      | vacant @ Slot::Vacant { .. } => {
        // Stale key: put the free-list entry back untouched.
        *slot = vacant;
        None
      },
    }
  }

  fn node(&self, key: NodeKey) -> Option<&Node<T>> {
    match self.slots.get(key.to_usize()) {
      | Some(Slot::Occupied(node)) => Some(node),
      | _ => None,
    }
  }

  fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node<T>> {
    match self.slots.get_mut(key.to_usize()) {
      | Some(Slot::Occupied(node)) => Some(node),
      | _ => None,
    }
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }

  #[cfg(feature = "get_size_in_bytes")]
  fn node_footprint_in_bytes(&self) -> usize {
    mem::size_of::<Slot<T>>()
  }
}
