/*!

Demodulation: rewriting a term to normal form by the set of oriented unit equations currently in the
rewrite index. A rule `l -> r` (an oriented literal `l ≃ r` with `l` ordering-greater than `r`) applies
to a subterm `u` when some instance `l·σ` equals `u`; termination is guaranteed by re-checking that the
instance `r·σ` is itself ordering-smaller than `u`, since unit equations generated during saturation
need not stay oriented the same way once their variables are instantiated. `RewriteIndex` layers the
rule's right-hand side on top of the discrimination tree used to find the candidate left-hand sides.

*/

use eqprove_abs::HashMap as AbsHashMap;
use smallvec::SmallVec;

use crate::core::handles::ClauseId;
use crate::core::index::pdt::Pdt;
use crate::core::index::{ClausePosition, IndexedTerm};
use crate::core::ordering::Ocb;
use crate::core::substitution::Substitution;
use crate::core::term::{TermBank, TermId, TermNode};

/// Bounds the number of rewrite steps `normalize` will take before giving up, guarding against a
/// rule set that is not actually terminating slipping past the per-step ordering check.
pub const MAX_REWRITE_STEPS: usize = 1024;

#[derive(Default)]
pub struct RewriteIndex {
  lhs_index: Pdt,
  rhs: AbsHashMap<(ClauseId, u32), TermId>,
}

impl RewriteIndex {
  pub fn new() -> Self {
    RewriteIndex::default()
  }

  pub fn insert(&mut self, bank: &TermBank, lhs: TermId, rhs: TermId, clause: ClauseId, literal: u32, date: u64) {
    self.lhs_index.insert(bank, IndexedTerm { term: lhs, position: ClausePosition::new(clause, literal, false), rule_date: date });
    self.rhs.insert((clause, literal), rhs);
  }

  pub fn delete(&mut self, clause: ClauseId, literal: u32) {
    self.lhs_index.delete(clause, literal);
    self.rhs.remove(&(clause, literal));
  }

  /// Tries every rule whose left-hand side could match `term` itself (not its subterms); returns
  /// the first instance whose right-hand side is ordering-smaller than `term`.
  fn rewrite_root(&self, bank: &mut TermBank, ocb: &Ocb, term: TermId, date: u64) -> Option<TermId> {
    let mut subst = Substitution::new();
    for (entry, bound) in self.lhs_index.iter_matches(bank, term, date, &mut subst) {
      let Some(&rhs) = self.rhs.get(&(entry.position.clause, entry.position.literal)) else { continue };
      let instantiated = bank.apply_substitution(rhs, &bound);
      if matches!(ocb.compare(bank, term, instantiated), Some(std::cmp::Ordering::Greater)) {
        return Some(instantiated);
      }
    }
    None
  }

  /// Normalizes `term`'s immediate arguments (each fully, via recursion) without touching the root.
  fn normalize_args(&self, bank: &mut TermBank, ocb: &Ocb, term: TermId, date: u64, max_steps: usize) -> (TermId, bool) {
    let TermNode::Compound { symbol, args } = bank.node(term).clone() else {
      return (term, false);
    };
    let mut changed = false;
    let new_args: SmallVec<[TermId; 4]> = args
      .iter()
      .map(|&a| {
        let (normalized, did_rewrite) = self.normalize(bank, ocb, a, date, max_steps);
        changed |= did_rewrite;
        normalized
      })
      .collect();
    if changed {
      (bank.insert(symbol, &new_args), true)
    } else {
      (term, false)
    }
  }

  /// Rewrites `term` to normal form under this index's rules, innermost-first. Returns the normal
  /// form and whether any rewrite actually fired.
  pub fn normalize(&self, bank: &mut TermBank, ocb: &Ocb, term: TermId, date: u64, max_steps: usize) -> (TermId, bool) {
    let (mut current, mut rewritten) = self.normalize_args(bank, ocb, term, date, max_steps);
    for _ in 0..max_steps {
      match self.rewrite_root(bank, ocb, current, date) {
        Some(next) => {
          let (settled, _) = self.normalize_args(bank, ocb, next, date, max_steps);
          current = settled;
          rewritten = true;
        }
        None => break,
      }
    }
    (current, rewritten)
  }

  pub fn len(&self) -> usize {
    self.lhs_index.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::config::OrderingKind;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable};
  use eqprove_abs::IString;

  #[test]
  fn rewrites_ground_instance_of_unit_rule() {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = SymbolTable::new();
    symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    symbols.declare(SymbolCore::new(IString::from("b"), Arity(0), vec![], i, SymbolAttributes::empty()));
    symbols.declare(SymbolCore::new(IString::from("f"), Arity(1), vec![i], i, SymbolAttributes::empty()));
    let mut ocb = Ocb::new(OrderingKind::Kbo);
    ocb.generate_precedence_by_arity(&symbols);
    let mut bank = TermBank::new(&symbols);

    let (a_id, b_id, f_id) = (crate::core::symbol::SymbolId::new(0), crate::core::symbol::SymbolId::new(1), crate::core::symbol::SymbolId::new(2));
    let a = bank.insert(a_id, &[]);
    let b = bank.insert(b_id, &[]);
    let fa = bank.insert(f_id, &[a]);

    let mut index = RewriteIndex::new();
    index.insert(&bank, a, b, ClauseId::new(0), 0, 0);

    let (normal_form, rewrote) = index.normalize(&mut bank, &ocb, fa, 10, MAX_REWRITE_STEPS);
    assert!(rewrote);
    let fb = bank.insert(f_id, &[b]);
    assert_eq!(normal_form, fb);
  }

  #[test]
  fn leaves_term_unchanged_when_no_rule_applies() {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = SymbolTable::new();
    symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let ocb = Ocb::new(OrderingKind::Kbo);
    let mut bank = TermBank::new(&symbols);
    let a = bank.insert(crate::core::symbol::SymbolId::new(0), &[]);

    let index = RewriteIndex::new();
    let (normal_form, rewrote) = index.normalize(&mut bank, &ocb, a, 10, MAX_REWRITE_STEPS);
    assert!(!rewrote);
    assert_eq!(normal_form, a);
  }
}
