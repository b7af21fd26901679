use super::HeapNodeStorage;
use crate::collections::queue::{
  storage::{Node, NodeKey, NodeStorage},
  QueueSize,
};

#[test]
fn acquire_then_release_roundtrips_the_node() {
  let mut storage: HeapNodeStorage<u32> = HeapNodeStorage::new();
  let key = storage.acquire(Node::new(7)).ok().unwrap();

  assert_eq!(storage.node(key).map(|node| *node.payload()), Some(7));

  let node = storage.release(key).unwrap();
  assert_eq!(node.into_payload(), 7);
  assert!(storage.node(key).is_none());
}

#[test]
fn stale_keys_are_rejected() {
  let mut storage: HeapNodeStorage<u32> = HeapNodeStorage::new();
  let key = storage.acquire(Node::new(1)).ok().unwrap();
  let _ = storage.release(key).unwrap();

  assert!(storage.release(key).is_none());
  assert!(storage.node(key).is_none());
  assert!(storage.node_mut(key).is_none());
  assert!(storage.release(NodeKey::new(99)).is_none());
}

#[test]
fn released_slot_is_reused_before_growing() {
  let mut storage: HeapNodeStorage<u32> = HeapNodeStorage::new();
  let first = storage.acquire(Node::new(1)).ok().unwrap();
  let _ = storage.acquire(Node::new(2)).ok().unwrap();
  let _ = storage.release(first).unwrap();

  let reused = storage.acquire(Node::new(3)).ok().unwrap();
  assert_eq!(reused, first);
  assert_eq!(storage.node(reused).map(|node| *node.payload()), Some(3));
}

#[test]
fn capacity_is_limitless() {
  let storage: HeapNodeStorage<u8> = HeapNodeStorage::new();
  assert_eq!(storage.capacity(), QueueSize::limitless());
}

#[cfg(feature = "get_size_in_bytes")]
#[test]
fn node_footprint_covers_the_slot() {
  let storage: HeapNodeStorage<u64> = HeapNodeStorage::new();
  assert!(storage.node_footprint_in_bytes() >= core::mem::size_of::<Node<u64>>());
}
