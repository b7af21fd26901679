//! Allocation-pluggable FIFO queue primitives for embedded and `no_std` environments.
//!
//! The queue links nodes through a caller-supplied [`NodeStorage`] implementation, so the
//! embedding application decides where node memory comes from: the growable heap slab for
//! hosted targets, the fixed inline slab for targets without an allocator, or a custom arena.
//! Payload ownership transfers into the queue on `offer` and back out on `poll`; the queue
//! never interprets or copies the payload itself.
//!
//! Optional surface (peek, clear, size queries, byte accounting, version string, per-queue
//! discard callback) is selected through Cargo features; the default feature set enables all
//! of it.
//!
//! ```
//! use linkq_queue_core_rs::{HeapLinkedQueue, HeapNodeStorage};
//!
//! let mut queue: HeapLinkedQueue<u32> = HeapLinkedQueue::new(HeapNodeStorage::new());
//! queue.offer(1)?;
//! queue.offer(2)?;
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(queue.poll(), Some(2));
//! assert_eq!(queue.poll(), None);
//! # Ok::<(), linkq_queue_core_rs::QueueError<u32>>(())
//! ```

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::disallowed_types))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod collections;

#[cfg(all(feature = "dependent_free", feature = "clear"))]
pub use collections::DiscardFn;
#[cfg(feature = "alloc")]
pub use collections::{HeapLinkedQueue, HeapNodeStorage};
#[cfg(feature = "get_version")]
pub use collections::{library_version, LIBRARY_VERSION};
pub use collections::{
  Element, FixedLinkedQueue, FixedNodeStorage, LinkedQueue, Node, NodeKey, NodeStorage, QueueBase, QueueError,
  QueueReader, QueueSize, QueueWriter,
};
#[cfg(feature = "get_size_in_bytes")]
pub use collections::PayloadFootprint;
