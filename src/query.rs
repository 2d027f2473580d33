use crate::error::{QueryError, Result};
use crate::group::{group_by_equality, group_by_hash, KeyGroup};
use log::trace;
use std::hash::Hash;

/// Values that `sum` can fold together with `+` semantics.
///
/// There is no zero identity: the first value seeds the accumulator.
pub trait Summable {
  fn plus(self, rhs: Self) -> Self;
}

macro_rules! impl_summable {
  ($($t:ty),*) => {
    $(
      impl Summable for $t {
        fn plus(self, rhs: Self) -> Self {
          self + rhs
        }
      }
    )*
  };
}

impl_summable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Summable for String {
  fn plus(mut self, rhs: Self) -> Self {
    self.push_str(&rhs);
    self
  }
}

/// Eager query operators. Every operator walks the sequence once (except
/// `distinct` and equality grouping) and returns a fresh `Vec` where it
/// produces a sequence.
pub trait QueryExt<T> {
  /// The only element, or an error if there are zero or several.
  fn single(&self) -> Result<&T>;

  /// The first element, or `None` when the sequence is empty.
  fn first_item(&self) -> Option<&T>;

  /// The first element matching `predicate`, or `None` when nothing matches.
  fn first_where<F>(&self, predicate: F) -> Option<&T>
  where
    F: FnMut(&T) -> bool;

  /// Zero-based position of the first match, `None` when nothing matches.
  ///
  /// ```
  /// use linq_utils::QueryExt;
  ///
  /// let v = vec![3, 8, 5, 8];
  /// assert_eq!(v.index_of_first(|x| *x == 8), Some(1));
  /// assert_eq!(v.index_of_first(|x| *x > 10), None);
  /// ```
  fn index_of_first<F>(&self, predicate: F) -> Option<usize>
  where
    F: FnMut(&T) -> bool;

  fn any_item(&self) -> bool {
    self.first_item().is_some()
  }

  fn any_where<F>(&self, predicate: F) -> bool
  where
    F: FnMut(&T) -> bool,
  {
    self.first_where(predicate).is_some()
  }

  fn select<R, F>(&self, mapper: F) -> Vec<R>
  where
    F: FnMut(&T) -> R;

  /// Matching elements in source order.
  fn where_by<F>(&self, predicate: F) -> Vec<&T>
  where
    F: FnMut(&T) -> bool;

  fn count_items(&self) -> usize;

  fn count_where<F>(&self, predicate: F) -> usize
  where
    F: FnMut(&T) -> bool,
  {
    self.where_by(predicate).len()
  }

  /// First occurrence of every value, compared with `==`.
  fn distinct(&self) -> Vec<&T>
  where
    T: PartialEq,
  {
    self.distinct_by(|a, b| a == b)
  }

  /// First occurrence of every value under a custom equality. Each candidate
  /// is checked against all previously accepted items.
  fn distinct_by<F>(&self, equals: F) -> Vec<&T>
  where
    F: FnMut(&T, &T) -> bool;

  /// Left fold from `seed`.
  fn aggregate<A, F>(&self, seed: A, folder: F) -> A
  where
    F: FnMut(A, &T) -> A;

  fn aggregate_default<A, F>(&self, folder: F) -> A
  where
    A: Default,
    F: FnMut(A, &T) -> A,
  {
    self.aggregate(A::default(), folder)
  }

  /// `None` for an empty sequence.
  fn sum(&self) -> Option<T>
  where
    T: Summable + Clone,
  {
    self.sum_by(T::clone)
  }

  fn sum_by<R, F>(&self, mapper: F) -> Option<R>
  where
    R: Summable,
    F: FnMut(&T) -> R;

  /// Groups by a hashable key in a single pass.
  fn group_by<K, F>(&self, key_fn: F) -> Vec<KeyGroup<K, &T>>
  where
    K: Hash + Eq,
    F: FnMut(&T) -> K;

  /// Groups by a key that only supports `==`, comparing against every
  /// existing group.
  fn group_by_eq<K, F>(&self, key_fn: F) -> Vec<KeyGroup<K, &T>>
  where
    K: PartialEq,
    F: FnMut(&T) -> K;
}

impl<T> QueryExt<T> for [T] {
  fn single(&self) -> Result<&T> {
    match self {
      [item] => Ok(item),
      [] => Err(QueryError::EmptyCollection),
      _ => Err(QueryError::MultipleItems),
    }
  }

  fn first_item(&self) -> Option<&T> {
    self.first()
  }

  fn first_where<F>(&self, mut predicate: F) -> Option<&T>
  where
    F: FnMut(&T) -> bool,
  {
    self.iter().find(|item| predicate(item))
  }

  fn index_of_first<F>(&self, predicate: F) -> Option<usize>
  where
    F: FnMut(&T) -> bool,
  {
    self.iter().position(predicate)
  }

  fn select<R, F>(&self, mapper: F) -> Vec<R>
  where
    F: FnMut(&T) -> R,
  {
    self.iter().map(mapper).collect()
  }

  fn where_by<F>(&self, mut predicate: F) -> Vec<&T>
  where
    F: FnMut(&T) -> bool,
  {
    self.iter().filter(|item| predicate(item)).collect()
  }

  fn count_items(&self) -> usize {
    self.len()
  }

  fn distinct_by<F>(&self, mut equals: F) -> Vec<&T>
  where
    F: FnMut(&T, &T) -> bool,
  {
    let mut result: Vec<&T> = vec![];
    for item in self {
      if !result.iter().any(|accepted| equals(item, accepted)) {
        result.push(item);
      }
    }
    result
  }

  fn aggregate<A, F>(&self, seed: A, folder: F) -> A
  where
    F: FnMut(A, &T) -> A,
  {
    self.iter().fold(seed, folder)
  }

  fn sum_by<R, F>(&self, mut mapper: F) -> Option<R>
  where
    R: Summable,
    F: FnMut(&T) -> R,
  {
    let mut iter = self.iter();
    let first = mapper(iter.next()?);
    Some(iter.fold(first, |acc, item| acc.plus(mapper(item))))
  }

  fn group_by<K, F>(&self, mut key_fn: F) -> Vec<KeyGroup<K, &T>>
  where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
  {
    group_by_hash(self.iter(), |item| key_fn(item))
  }

  fn group_by_eq<K, F>(&self, mut key_fn: F) -> Vec<KeyGroup<K, &T>>
  where
    K: PartialEq,
    F: FnMut(&T) -> K,
  {
    group_by_equality(self.iter(), |item| key_fn(item))
  }
}

/// In-place removal for growable sequences.
pub trait RemoveItem<T> {
  /// Removes the first element equal to `item`. Returns whether anything was
  /// removed.
  fn remove_item(&mut self, item: &T) -> bool;
}

impl<T> RemoveItem<T> for Vec<T>
where
  T: PartialEq,
{
  fn remove_item(&mut self, item: &T) -> bool {
    match self.iter().position(|i| i == item) {
      Some(pos) => {
        self.remove(pos);
        trace!("removed item at {}, {} left", pos, self.len());
        true
      }
      None => false,
    }
  }
}
