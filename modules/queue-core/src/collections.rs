//! Collection primitives shared by allocation-pluggable components.

mod element;
/// FIFO queue built on caller-supplied node storage.
pub mod queue;

pub use element::Element;
#[cfg(all(feature = "dependent_free", feature = "clear"))]
pub use queue::DiscardFn;
#[cfg(feature = "alloc")]
pub use queue::{HeapLinkedQueue, HeapNodeStorage};
#[cfg(feature = "get_version")]
pub use queue::{library_version, LIBRARY_VERSION};
pub use queue::{
  FixedLinkedQueue, FixedNodeStorage, LinkedQueue, Node, NodeKey, NodeStorage, QueueBase, QueueError, QueueReader,
  QueueSize, QueueWriter,
};
#[cfg(feature = "get_size_in_bytes")]
pub use queue::PayloadFootprint;
