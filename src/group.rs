//! Keyed partitioning.
//!
//! Two strategies produce the same groups for keys whose `Hash + Eq` and
//! `PartialEq` agree:
//!
//! * [`group_by_hash`] looks keys up in an insertion-ordered map, one pass, O(n).
//! * [`group_by_equality`] compares each key against every group found so
//!   far, O(n²), and only needs `PartialEq`.
//!
//! Group order is the order in which each distinct key is first seen, and
//! every group keeps its members in source order.

use indexmap::IndexMap;
use log::trace;
use std::hash::Hash;

/// A distinct key together with every item that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGroup<K, T> {
  pub key: K,
  pub array: Vec<T>,
}

impl<K, T> KeyGroup<K, T> {
  pub fn new(key: K, first: T) -> Self {
    KeyGroup {
      key,
      array: vec![first],
    }
  }

  pub fn len(&self) -> usize {
    self.array.len()
  }

  pub fn is_empty(&self) -> bool {
    self.array.is_empty()
  }

  pub fn into_parts(self) -> (K, Vec<T>) {
    (self.key, self.array)
  }
}

pub fn group_by_hash<I, K, F>(items: I, mut key_fn: F) -> Vec<KeyGroup<K, I::Item>>
where
  I: IntoIterator,
  K: Hash + Eq,
  F: FnMut(&I::Item) -> K,
{
  let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
  let mut total = 0;
  for item in items {
    total += 1;
    groups.entry(key_fn(&item)).or_default().push(item);
  }
  trace!("hash grouping: {} items, {} groups", total, groups.len());
  groups
    .into_iter()
    .map(|(key, array)| KeyGroup { key, array })
    .collect()
}

pub fn group_by_equality<I, K, F>(items: I, mut key_fn: F) -> Vec<KeyGroup<K, I::Item>>
where
  I: IntoIterator,
  K: PartialEq,
  F: FnMut(&I::Item) -> K,
{
  let mut groups: Vec<KeyGroup<K, I::Item>> = vec![];
  let mut total = 0;
  for item in items {
    total += 1;
    let key = key_fn(&item);
    match groups.iter().position(|g| g.key == key) {
      Some(pos) => groups[pos].array.push(item),
      None => groups.push(KeyGroup::new(key, item)),
    }
  }
  trace!("equality grouping: {} items, {} groups", total, groups.len());
  groups
}

/// Consuming grouping for any collection, moving items into their groups.
pub trait GroupByKey<T>: Sized + IntoIterator<Item = T> {
  fn group_by_key<K, F>(self, f: F) -> Vec<KeyGroup<K, T>>
  where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
  {
    group_by_hash(self, f)
  }

  /// Like [`group_by_key`](GroupByKey::group_by_key) for keys that can only be
  /// compared, such as floats or structs without `Hash`.
  fn group_by_key_eq<K, F>(self, f: F) -> Vec<KeyGroup<K, T>>
  where
    K: PartialEq,
    F: FnMut(&T) -> K,
  {
    group_by_equality(self, f)
  }
}

impl<C, T> GroupByKey<T> for C where C: IntoIterator<Item = T> {}
