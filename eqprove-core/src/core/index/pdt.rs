/*!

Perfect discrimination tree for matching rewrite left-hand sides and unit equations.

This indexes entries by their root symbol (`None` for a variable-rooted left-hand side, which must
be tried against every query since a bare variable matches anything). Each bucket caches the minimum
rule date of its entries so a search can skip subtrees per the age-pruning heuristic in the component
design. Candidate retrieval is a coarse filter; `iter_matches` verifies every candidate with the real
`match_term` algorithm, which is also what enforces non-linear patterns (the same pattern variable
occurring twice) correctly — the bucketing step only needs to be sound, not exact.

*/

use eqprove_abs::HashMap as AbsHashMap;

use crate::core::handles::ClauseId;
use crate::core::index::IndexedTerm;
use crate::core::substitution::Substitution;
use crate::core::symbol::SymbolId;
use crate::core::term::{TermBank, TermId};
use crate::core::unify::match_term;

#[derive(Default)]
struct Bucket {
  entries: Vec<IndexedTerm>,
  min_rule_date: u64,
}

#[derive(Default)]
pub struct Pdt {
  buckets: AbsHashMap<Option<SymbolId>, Bucket>,
}

fn root_symbol(bank: &TermBank, term: TermId) -> Option<SymbolId> {
  bank.node(term).symbol()
}

impl Pdt {
  pub fn new() -> Self {
    Pdt::default()
  }

  pub fn insert(&mut self, bank: &TermBank, entry: IndexedTerm) {
    let key = root_symbol(bank, entry.term);
    let bucket = self.buckets.entry(key).or_default();
    bucket.entries.push(entry);
    bucket.min_rule_date = bucket.entries.iter().map(|e| e.rule_date).min().unwrap_or(0);
  }

  pub fn delete(&mut self, clause: ClauseId, literal: u32) {
    for bucket in self.buckets.values_mut() {
      bucket.entries.retain(|e| !(e.position.clause == clause && e.position.literal == literal));
      bucket.min_rule_date = bucket.entries.iter().map(|e| e.rule_date).min().unwrap_or(0);
    }
  }

  /// Yields every indexed left-hand side that matches a prefix of `query` (i.e. `lhs·σ = query`
  /// for some extension `σ` of `subst`), restoring `subst` to its entry state between candidates.
  pub fn iter_matches<'a>(&'a self, bank: &'a TermBank, query: TermId, query_date: u64, subst: &'a mut Substitution) -> Vec<(IndexedTerm, Substitution)> {
    let mut results = Vec::new();
    let query_root = root_symbol(bank, query);

    let mut candidate_buckets: Vec<&Bucket> = Vec::new();
    if let Some(bucket) = self.buckets.get(&None) {
      candidate_buckets.push(bucket);
    }
    if query_root.is_some() {
      if let Some(bucket) = self.buckets.get(&query_root) {
        candidate_buckets.push(bucket);
      }
    }

    for bucket in candidate_buckets {
      if bucket.min_rule_date > query_date {
        continue;
      }
      for entry in &bucket.entries {
        let pos = subst.position();
        if match_term(bank, entry.term, query, subst) {
          results.push((*entry, subst.clone()));
        }
        subst.backtrack_to(pos);
      }
    }
    results
  }

  pub fn len(&self) -> usize {
    self.buckets.values().map(|b| b.entries.len()).sum()
  }
}
