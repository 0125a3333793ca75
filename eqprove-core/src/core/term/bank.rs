/*!

`TermBank` hash-conses terms: structurally identical terms are represented by a single `TermId`, so
structural equality is `TermId` equality. Allocation failure (the bank cannot grow further) surfaces
as `ProverError::OutOfMemory`; the bank is not thread-safe and its handles are not valid in any other
bank without going through `copy_into`.

*/

use std::collections::HashMap;

use eqprove_abs::HashMap as AbsHashMap;
use smallvec::{smallvec, SmallVec};

use crate::core::error::{ProverError, ProverResult};
use crate::core::handles::VariableIndex;
use crate::core::sort::SortId;
use crate::core::substitution::Substitution;
use crate::core::symbol::{SymbolId, SymbolTable};
use crate::core::term::{TermData, TermId, TermNode};

const VARIABLE_WEIGHT: u32 = 1;

#[derive(Eq, PartialEq, Hash, Clone)]
enum TermKey {
  Variable(VariableIndex),
  Compound(SymbolId, SmallVec<[TermId; 4]>),
}

pub struct TermBank {
  terms: Vec<TermData>,
  index: HashMap<TermKey, TermId>,
  /// Snapshot of per-symbol ordering weights, taken from the `SymbolTable` at bank creation. The
  /// OCB is immutable after setup, so this snapshot stays valid for the bank's whole lifetime.
  symbol_weights: AbsHashMap<SymbolId, u32>,
}

impl TermBank {
  pub fn new(symbols: &SymbolTable) -> Self {
    let symbol_weights = symbols.iter().map(|(id, s)| (id, s.ordering_weight)).collect();
    TermBank { terms: Vec::new(), index: HashMap::new(), symbol_weights }
  }

  fn symbol_weight(&self, symbol: SymbolId) -> u32 {
    *self.symbol_weights.get(&symbol).unwrap_or(&1)
  }

  /// Re-reads `symbol`'s current `ordering_weight` from `symbols` into the bank's snapshot. A caller
  /// that declares symbols or edits `ordering_weight` after the bank was created (e.g. a builder that
  /// interns symbols incrementally, rather than declaring the whole table up front) must call this
  /// for each such symbol before inserting terms over it, or `insert` falls back to the default weight
  /// of 1 for any symbol absent from the snapshot taken at `new`.
  pub fn refresh_symbol_weight(&mut self, symbols: &SymbolTable, symbol: SymbolId) {
    self.symbol_weights.insert(symbol, symbols.get(symbol).ordering_weight);
  }

  pub fn get(&self, term: TermId) -> &TermData {
    &self.terms[term.idx()]
  }

  pub fn node(&self, term: TermId) -> &TermNode {
    &self.get(term).node
  }

  fn alloc(&mut self, key: TermKey, node: TermNode, weight: u32, size: u32, var_counts: SmallVec<[(VariableIndex, u32); 4]>) -> TermId {
    let id = TermId::new(self.terms.len() as u32);
    self.terms.push(TermData { node, weight, size, rw_date: 0, var_counts });
    self.index.insert(key, id);
    id
  }

  /// Returns the unique variable term for `index` within this bank, allocating it on first use.
  pub fn insert_variable(&mut self, index: VariableIndex, sort: SortId) -> TermId {
    let key = TermKey::Variable(index);
    if let Some(&existing) = self.index.get(&key) {
      return existing;
    }
    let node = TermNode::Variable { index, sort };
    let var_counts = smallvec![(index, 1)];
    self.alloc(key, node, VARIABLE_WEIGHT, 1, var_counts)
  }

  /// Canonicalises `args` (already bank-resident) under `symbol`, hash-consing the result.
  pub fn insert(&mut self, symbol: SymbolId, args: &[TermId]) -> TermId {
    let args: SmallVec<[TermId; 4]> = args.iter().copied().collect();
    let key = TermKey::Compound(symbol, args.clone());
    if let Some(&existing) = self.index.get(&key) {
      return existing;
    }

    let mut weight = self.symbol_weight(symbol);
    let mut size = 1u32;
    let mut var_counts: SmallVec<[(VariableIndex, u32); 4]> = SmallVec::new();
    for &arg in &args {
      let data = self.get(arg);
      weight += data.weight;
      size += data.size;
      for &(idx, count) in &data.var_counts {
        match var_counts.iter_mut().find(|(i, _)| *i == idx) {
          Some((_, c)) => *c += count,
          None => var_counts.push((idx, count)),
        }
      }
    }
    var_counts.sort_by_key(|(idx, _)| *idx);

    let node = TermNode::Compound { symbol, args };
    self.alloc(key, node, weight, size, var_counts)
  }

  /// Recursively inserts `term` (from `self`) into `other`, returning the corresponding term there.
  pub fn copy_into(&self, other: &mut TermBank, term: TermId) -> TermId {
    match self.node(term).clone() {
      TermNode::Variable { index, sort } => other.insert_variable(index, sort),
      TermNode::Compound { symbol, args } => {
        let new_args: SmallVec<[TermId; 4]> = args.iter().map(|&a| self.copy_into(other, a)).collect();
        other.insert(symbol, &new_args)
      }
    }
  }

  /// Returns the bank-resident term obtained by replacing each variable bound in `subst` with its
  /// image. `unify` builds a triangular substitution — a variable's image can itself mention a
  /// variable bound later — so a bound variable's image is walked to a fixpoint rather than returned
  /// as-is; the occurs-check `unify` performs guarantees this recursion terminates. Idempotent if
  /// `subst` is idempotent, since re-substituting an unbound variable or a fully-substituted ground
  /// term is a no-op.
  pub fn apply_substitution(&mut self, term: TermId, subst: &Substitution) -> TermId {
    match self.node(term).clone() {
      TermNode::Variable { index, .. } => match subst.get(index) {
        Some(image) => self.apply_substitution(image, subst),
        None => term,
      },
      TermNode::Compound { symbol, args } => {
        let new_args: SmallVec<[TermId; 4]> = args.iter().map(|&a| self.apply_substitution(a, subst)).collect();
        if new_args.as_slice() == args.as_slice() {
          term
        } else {
          self.insert(symbol, &new_args)
        }
      }
    }
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn try_insert(&mut self, symbol: SymbolId, args: &[TermId], limit: Option<usize>) -> ProverResult<TermId> {
    if let Some(limit) = limit {
      if self.terms.len() >= limit {
        return Err(ProverError::OutOfMemory);
      }
    }
    Ok(self.insert(symbol, args))
  }
}
