
use core::marker::PhantomData;
#[cfg(feature = "get_size_in_bytes")]
use core::mem;

#[cfg(feature = "alloc")]
use crate::collections::queue::storage::HeapNodeStorage;
#[cfg(feature = "get_size_in_bytes")]
use crate::collections::queue::PayloadFootprint;
#[cfg(feature = "get_size")]
use crate::collections::queue::QueueSize;
use crate::collections::{
  queue::{
    storage::{FixedNodeStorage, Node, NodeKey, NodeStorage},
    traits::{QueueBase, QueueReader, QueueWriter},
    QueueError,
  },
  Element,
};

/// Callback invoked with each remaining payload while a queue is cleared.
#[cfg(all(feature = "dependent_free", feature = "clear"))]
pub type DiscardFn<T> = fn(T);

/// Strict-FIFO queue chaining nodes through caller-supplied storage.
///
/// The queue owns its chain exclusively: every node reachable from `head` was acquired from
/// this queue's storage and is released exactly once, on `poll` or `clear`. Payload ownership
/// transfers in on `offer` and back out on `poll`.
///
/// Two queues backed by independent storages never interfere, but the queue adds no
/// synchronization of its own; a handle shared across threads must be serialized externally.
#[derive(Debug)]
pub struct LinkedQueue<T, S>
where
  S: NodeStorage<T>, {
  storage: S,
  head:    Option<NodeKey>,
  tail:    Option<NodeKey>,
  len:     usize,
  #[cfg(all(feature = "dependent_free", feature = "clear"))]
  on_discard: Option<DiscardFn<T>>,
  _pd:     PhantomData<T>,
}

impl<T, S> LinkedQueue<T, S>
where
  S: NodeStorage<T>,
{
  /// Creates an empty queue on top of the provided node storage.
  #[must_use]
  pub const fn new(storage: S) -> Self {
    Self {
      storage,
      head: None,
      tail: None,
      len: 0,
      #[cfg(all(feature = "dependent_free", feature = "clear"))]
      on_discard: None,
      _pd: PhantomData,
    }
  }

  /// Creates an empty queue whose `clear` hands every remaining payload to `on_discard`.
  #[cfg(all(feature = "dependent_free", feature = "clear"))]
  #[must_use]
  pub const fn with_discard(storage: S, on_discard: DiscardFn<T>) -> Self {
    Self { storage, head: None, tail: None, len: 0, on_discard: Some(on_discard), _pd: PhantomData }
  }

  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying the element back when the storage cannot
  /// supply a node; the queue is left exactly as it was.
  pub fn offer(&mut self, element: T) -> Result<(), QueueError<T>> {
    let key = match self.storage.acquire(Node::new(element)) {
      | Ok(key) => key,
      | Err(node) => return Err(QueueError::AllocError(node.into_payload())),
    };
    match self.tail {
      | Some(tail_key) => {
        if let Some(tail) = self.storage.node_mut(tail_key) {
          tail.set_next(Some(key));
        }
        self.tail = Some(key);
      },
      | None => {
        // No sentinel node: head and tail move in lock-step for the empty case.
        self.head = Some(key);
        self.tail = Some(key);
      },
    }
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the element at the head of the queue, or `None` when empty.
  ///
  /// Ownership of the payload transfers back to the caller; the detached node returns to
  /// storage.
  pub fn poll(&mut self) -> Option<T> {
    let key = self.head?;
    let node = self.storage.release(key)?;
    self.head = node.next();
    if self.head.is_none() {
      self.tail = None;
    }
    self.len -= 1;
    Some(node.into_payload())
  }

  /// Returns the element at the head of the queue without removing it.
  #[cfg(feature = "peek")]
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.head.and_then(|key| self.storage.node(key)).map(Node::payload)
  }

  /// Releases every node in the chain, invoking the discard callback per payload when one is
  /// configured. Clearing an already-empty queue is a successful no-op.
  #[cfg(feature = "clear")]
  pub fn clear(&mut self) {
    while let Some(key) = self.head {
      let Some(node) = self.storage.release(key) else {
        break;
      };
      self.head = node.next();
      let payload = node.into_payload();
      #[cfg(feature = "dependent_free")]
      match self.on_discard {
        | Some(discard) => discard(payload),
        | None => drop(payload),
      }
      #[cfg(not(feature = "dependent_free"))]
      drop(payload);
    }
    self.head = None;
    self.tail = None;
    self.len = 0;
  }

  /// Number of elements currently queued.
  #[cfg(feature = "get_size")]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Whether the queue currently holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Upper bound imposed by the underlying node storage.
  #[cfg(feature = "get_size")]
  #[must_use]
  pub fn capacity(&self) -> QueueSize {
    self.storage.capacity()
  }

  /// Bytes consumed by the handle plus every queued node under the stated payload accounting.
  ///
  /// Storage-internal overhead (vacant slots, allocator headers, bucket padding) is
  /// deliberately excluded; this is an accounting utility, not an allocator report.
  #[cfg(feature = "get_size_in_bytes")]
  #[must_use]
  pub fn len_in_bytes(&self, payload: PayloadFootprint) -> usize {
    let per_node = self.storage.node_footprint_in_bytes() + payload.bytes_per_payload();
    mem::size_of::<Self>() + self.len * per_node
  }

  /// Borrows the underlying node storage.
  #[must_use]
  pub const fn storage(&self) -> &S {
    &self.storage
  }
}

impl<T, S> Default for LinkedQueue<T, S>
where
  S: NodeStorage<T> + Default,
{
  fn default() -> Self {
    Self::new(S::default())
  }
}

impl<E, S> QueueBase<E> for LinkedQueue<E, S>
where
  E: Element,
  S: NodeStorage<E>,
{
  #[cfg(feature = "get_size")]
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.len)
  }

  #[cfg(feature = "get_size")]
  fn capacity(&self) -> QueueSize {
    self.storage.capacity()
  }

  fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl<E, S> QueueWriter<E> for LinkedQueue<E, S>
where
  E: Element,
  S: NodeStorage<E>,
{
  fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    self.offer(element)
  }
}

impl<E, S> QueueReader<E> for LinkedQueue<E, S>
where
  E: Element,
  S: NodeStorage<E>,
{
  fn poll_mut(&mut self) -> Result<Option<E>, QueueError<E>> {
    Ok(self.poll())
  }

  #[cfg(feature = "clear")]
  fn clean_up_mut(&mut self) {
    self.clear();
  }
}

/// Queue backed by the growable heap slab.
#[cfg(feature = "alloc")]
pub type HeapLinkedQueue<T> = LinkedQueue<T, HeapNodeStorage<T>>;

/// Queue backed by a fixed-capacity inline slab.
pub type FixedLinkedQueue<T, const N: usize> = LinkedQueue<T, FixedNodeStorage<T, N>>;
