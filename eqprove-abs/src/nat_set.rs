/*!

A `NatSet` is a set of small natural numbers, backed by a bitset. It is used throughout the core for
variable-occurrence sets (which variable indices occur in a term), eligibility sets (which literal positions are
selected), and other small dense index sets where a `HashSet<usize>` would waste time hashing.

*/

use std::fmt::{Debug, Formatter};
use bit_set::BitSet;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct NatSet {
  bits: BitSet,
}

impl NatSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    NatSet { bits: BitSet::with_capacity(capacity) }
  }

  #[inline(always)]
  pub fn insert(&mut self, value: usize) -> bool {
    self.bits.insert(value)
  }

  #[inline(always)]
  pub fn remove(&mut self, value: usize) -> bool {
    self.bits.remove(value)
  }

  #[inline(always)]
  pub fn contains(&self, value: usize) -> bool {
    self.bits.contains(value)
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.bits.is_empty()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.bits.len()
  }

  #[inline(always)]
  pub fn clear(&mut self) {
    self.bits.clear()
  }

  /// In-place union: `self` becomes `self ∪ other`.
  pub fn union_in_place(&mut self, other: &NatSet) {
    self.bits.union_with(&other.bits);
  }

  /// In-place intersection: `self` becomes `self ∩ other`.
  pub fn intersect_in_place(&mut self, other: &NatSet) {
    self.bits.intersect_with(&other.bits);
  }

  pub fn is_subset(&self, other: &NatSet) -> bool {
    self.bits.is_subset(&other.bits)
  }

  pub fn is_disjoint(&self, other: &NatSet) -> bool {
    self.bits.is_disjoint(&other.bits)
  }

  pub fn iter(&self) -> bit_set::Iter<'_, u32> {
    self.bits.iter()
  }
}

impl FromIterator<usize> for NatSet {
  fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
    let mut set = NatSet::new();
    for v in iter {
      set.insert(v);
    }
    set
  }
}

impl Debug for NatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "NatSet{{{}}}", self.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn union_and_contains() {
    let mut a = NatSet::new();
    a.insert(1);
    a.insert(3);
    let mut b = NatSet::new();
    b.insert(3);
    b.insert(5);

    a.union_in_place(&b);
    assert!(a.contains(1));
    assert!(a.contains(3));
    assert!(a.contains(5));
    assert!(!a.contains(2));
    assert_eq!(a.len(), 3);
  }

  #[test]
  fn empty_set_is_empty() {
    let set = NatSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
  }
}
