
use core::mem;

use crate::collections::queue::{
  storage::{Node, NodeKey, NodeStorage, Slot},
  QueueSize,
};

/// Fixed-capacity slab storage with every slot inline in the value.
///
/// Suited to targets without an allocator: construction is `const`, so the queue can live in a
/// `static` or on the stack and no heap is ever touched. Exhaustion surfaces as an acquire
/// failure, which the queue reports as an allocation error.
///
/// Slots past the allocation watermark have never been handed out and are implicitly vacant;
/// the explicit free list only tracks slots that were released after use. This keeps the
/// initial value free of per-slot link setup.
#[derive(Debug)]
pub struct FixedNodeStorage<T, const N: usize> {
  slots:     [Slot<T>; N],
  free_head: Option<usize>,
  watermark: usize,
}

impl<T, const N: usize> FixedNodeStorage<T, N> {
  /// Creates a slab with all `N` slots vacant.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      slots:     [const { Slot::Vacant { next_free: None } }; N],
      free_head: None,
      watermark: 0,
    }
  }
}

impl<T, const N: usize> Default for FixedNodeStorage<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, const N: usize> NodeStorage<T> for FixedNodeStorage<T, N> {
  fn acquire(&mut self, node: Node<T>) -> Result<NodeKey, Node<T>> {
    if let Some(index) = self.free_head {
      let Some(slot) = self.slots.get_mut(index) else {
        return Err(node);
      };
      let next_free = match slot {
        | Slot::Vacant { next_free } => *next_free,
        | Slot::Occupied(_) => return Err(node),
      };
      *slot = Slot::Occupied(node);
      self.free_head = next_free;
      return Ok(NodeKey::new(index));
    }
    let index = self.watermark;
    let Some(slot) = self.slots.get_mut(index) else {
      return Err(node);
    };
    *slot = Slot::Occupied(node);
    self.watermark = index + 1;
    Ok(NodeKey::new(index))
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
    QueueSize::limited(N)
  }

  #[cfg(feature = "get_size_in_bytes")]
  fn node_footprint_in_bytes(&self) -> usize {
    // Slots are part of the handle value itself; counting them again would double-book.
    0
  }
}
