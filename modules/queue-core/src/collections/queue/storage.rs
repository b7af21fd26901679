//! Node storage layer: the allocation providers behind the queue.
//!
//! Every node the queue links into its chain is acquired from and released back to a
//! [`NodeStorage`] implementation; the queue itself never allocates. Storages hand out stable
//! [`NodeKey`]s, so the chain is an arena of indices rather than raw pointers and a key can
//! never dangle into freed memory.

mod fixed_node_storage;
#[cfg(feature = "alloc")]
mod heap_node_storage;
mod node;
mod node_storage;
mod slot;

pub use fixed_node_storage::FixedNodeStorage;
#[cfg(feature = "alloc")]
pub use heap_node_storage::HeapNodeStorage;
pub use node::{Node, NodeKey};
pub use node_storage::NodeStorage;
pub(crate) use slot::Slot;
