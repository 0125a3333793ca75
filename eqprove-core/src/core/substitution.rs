/*!

A `Substitution` holds bindings from `VariableIndex` to `TermId`. Each variable's current binding is
accessible in O(1) through a slot; bindings are additionally recorded on a trail so that `match` and
`unify` can backtrack to an earlier position on failure without rescanning the slots.

*/

use crate::core::handles::VariableIndex;
use crate::core::term::TermId;

#[derive(Clone, Default)]
pub struct Substitution {
  slots: Vec<Option<TermId>>,
  trail: Vec<VariableIndex>,
}

/// A trail position returned by a binding operation, passed back to `backtrack_to` to undo it.
pub type TrailPosition = usize;

impl Substitution {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(n: usize) -> Self {
    Substitution { slots: vec![None; n], trail: Vec::new() }
  }

  #[inline]
  fn ensure_capacity(&mut self, index: VariableIndex) {
    let idx = index.idx();
    if idx >= self.slots.len() {
      self.slots.resize(idx + 1, None);
    }
  }

  /// Current trail length; pass to `backtrack_to` to undo everything bound after this point.
  pub fn position(&self) -> TrailPosition {
    self.trail.len()
  }

  pub fn get(&self, index: VariableIndex) -> Option<TermId> {
    self.slots.get(index.idx()).copied().flatten()
  }

  pub fn is_bound(&self, index: VariableIndex) -> bool {
    self.get(index).is_some()
  }

  /// Binds `index` to `term`, recording the binding on the trail. The caller is responsible for
  /// ensuring `index` is not already bound to something incompatible; `match`/`unify` check this.
  pub fn bind(&mut self, index: VariableIndex, term: TermId) {
    self.ensure_capacity(index);
    self.slots[index.idx()] = Some(term);
    self.trail.push(index);
  }

  /// Pops all bindings made since `pos`, clearing their slots.
  pub fn backtrack_to(&mut self, pos: TrailPosition) {
    debug_assert!(pos <= self.trail.len(), "backtrack position ahead of trail");
    for index in self.trail.drain(pos..) {
      self.slots[index.idx()] = None;
    }
  }

  pub fn clear(&mut self) {
    self.backtrack_to(0);
  }

  pub fn len(&self) -> usize {
    self.trail.len()
  }

  pub fn is_empty(&self) -> bool {
    self.trail.is_empty()
  }
}
