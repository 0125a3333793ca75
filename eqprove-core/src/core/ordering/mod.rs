/*!

The term ordering (`kbo`, `lpo`) and the ordering control block (`Ocb`) that parameterises it. The
OCB is pure data, immutable after setup, and used by every ordering comparison in the prover: the
rewrite engine, superposition eligibility, and literal/clause ordering for subsumption and selection
all go through `Ocb::compare`.

*/

pub mod kbo;
pub mod lpo;

use std::collections::HashMap;

pub use eqprove_abs::PartialOrdering;

/// The result of an ordering comparison: `Some(Greater/Less/Equal)` or `None` for incomparable.
pub type CmpResult = Option<std::cmp::Ordering>;

use crate::core::config::OrderingKind;
use crate::core::symbol::{SymbolId, SymbolTable};
use crate::core::term::{TermBank, TermId};

/// Recursion depth at which KBO/LPO give up and report `Incomparable` rather than overflow the
/// stack on a pathological term. Soundness-preserving: the calculus only requires a sound
/// approximation of the true ordering, never a complete one.
pub const MAX_RECURSION_DEPTH: usize = 4096;

#[derive(Clone)]
pub struct Ocb {
  pub kind: OrderingKind,
  precedence: HashMap<SymbolId, u32>,
  const_weight: u32,
  variable_weight: u32,
}

impl Ocb {
  pub fn new(kind: OrderingKind) -> Self {
    Ocb { kind, precedence: HashMap::new(), const_weight: 1, variable_weight: 1 }
  }

  /// Assigns precedence by arity (constants lowest), the `PrecedenceGenMethod::Arity` default.
  pub fn generate_precedence_by_arity(&mut self, symbols: &SymbolTable) {
    let mut ordered: Vec<(SymbolId, u32)> = symbols.iter().map(|(id, s)| (id, s.arity.as_numeric())).collect();
    ordered.sort_by_key(|(id, arity)| (*arity, id.idx()));
    for (rank, (id, _)) in ordered.into_iter().enumerate() {
      self.precedence.insert(id, rank as u32);
    }
  }

  pub fn set_precedence(&mut self, symbol: SymbolId, value: u32) {
    self.precedence.insert(symbol, value);
  }

  pub fn precedence(&self, symbol: SymbolId) -> u32 {
    *self.precedence.get(&symbol).unwrap_or(&0)
  }

  /// Assigns each symbol's ordering weight to 1 (`WeightGenMethod::Constant`), the default that
  /// makes KBO weight coincide with symbol-occurrence count.
  pub fn generate_constant_weights(&self, symbols: &mut SymbolTable) {
    for (id, _) in symbols.iter().map(|(id, s)| (id, s.ordering_weight)).collect::<Vec<_>>() {
      symbols.get_mut(id).ordering_weight = self.const_weight.max(1);
    }
  }

  pub fn compare(&self, bank: &TermBank, s: TermId, t: TermId) -> CmpResult {
    match self.kind {
      OrderingKind::Kbo | OrderingKind::Kbo6 | OrderingKind::Auto => kbo::compare(self, bank, s, t),
      OrderingKind::Lpo | OrderingKind::Lpo4 => lpo::compare(self, bank, s, t),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_precedence_is_zero() {
    let ocb = Ocb::new(OrderingKind::Kbo);
    assert_eq!(ocb.precedence(SymbolId::new(0)), 0);
  }
}
