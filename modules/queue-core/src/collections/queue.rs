//! Allocation-pluggable FIFO queue engine.
//!
//! The engine is split the same way on every target: [`storage`] supplies node memory through
//! the [`NodeStorage`] trait, [`LinkedQueue`] runs the chain algorithms on top of it, and the
//! mutable trait family ([`QueueBase`], [`QueueWriter`], [`QueueReader`]) is the seam embedders
//! program against when the concrete queue type should stay out of their signatures.

mod linked_queue;
#[cfg(feature = "get_version")]
mod library_version;
#[cfg(feature = "get_size_in_bytes")]
mod payload_footprint;
mod queue_error;
mod queue_size;
/// Node storage layer: the allocation providers backing the queue.
pub mod storage;
mod traits;

#[cfg(all(feature = "dependent_free", feature = "clear"))]
pub use linked_queue::DiscardFn;
#[cfg(feature = "alloc")]
pub use linked_queue::HeapLinkedQueue;
pub use linked_queue::{FixedLinkedQueue, LinkedQueue};
#[cfg(feature = "get_version")]
pub use library_version::{library_version, LIBRARY_VERSION};
#[cfg(feature = "get_size_in_bytes")]
pub use payload_footprint::PayloadFootprint;
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
#[cfg(feature = "alloc")]
pub use storage::HeapNodeStorage;
pub use storage::{FixedNodeStorage, Node, NodeKey, NodeStorage};
pub use traits::{QueueBase, QueueReader, QueueWriter};
