/*!

Feature-vector index: a necessary-condition filter for clause subsumption.

Each clause is mapped to a small vector of bounded integers (its "feature vector") chosen so that if
clause `C1` subsumes clause `C2` then `C1`'s vector is componentwise `<=` `C2`'s. The index stores one
vector per clause and, given a query vector, can retrieve every stored vector that is componentwise
`<=` it (candidate forward subsumers of the query) or `>=` it (candidates the query might backward-
subsume). As with the other two indices, retrieval is a sound over-approximation: actual subsumption
is still decided by the real subsumption check.

This is a flat per-clause vector store rather than a genuine prefix trie keyed by feature digit — the
same simplification the discrimination tree makes — since candidate verification dominates cost either
way for the clause set sizes this saturation loop targets.

*/

use crate::core::clause::Clause;
use crate::core::handles::ClauseId;
use crate::core::term::{TermBank, TermId, TermNode};

pub type FeatureVector = [u32; FEATURE_COUNT];

pub const FEATURE_COUNT: usize = 4;

fn term_symbol_count(bank: &TermBank, term: TermId) -> u32 {
  match bank.node(term) {
    TermNode::Variable { .. } => 0,
    TermNode::Compound { args, .. } => 1 + args.iter().map(|&a| term_symbol_count(bank, a)).sum::<u32>(),
  }
}

fn term_depth(bank: &TermBank, term: TermId) -> u32 {
  match bank.node(term) {
    TermNode::Variable { .. } => 0,
    TermNode::Compound { args, .. } => 1 + args.iter().map(|&a| term_depth(bank, a)).max().unwrap_or(0),
  }
}

/// Computes `[literal count, positive literal count, total symbol count, maximum literal depth]` for
/// a clause. Every coordinate here is monotone non-decreasing under instantiation (a substitution
/// applied to a clause can only grow, never shrink, each of these counts), which is what `le`/`ge`
/// need to be sound necessary conditions for subsumption. Variable-occurrence count was dropped: a
/// subsumer's variables multiply out to cover more occurrences in the ground instance, not fewer, so
/// that coordinate runs the wrong direction and would reject real subsumers.
pub fn compute(bank: &TermBank, clause: &Clause) -> FeatureVector {
  let mut symbols = 0u32;
  let mut depth = 0u32;
  for literal in &clause.literals {
    symbols += term_symbol_count(bank, literal.lhs) + term_symbol_count(bank, literal.rhs);
    depth = depth.max(term_depth(bank, literal.lhs)).max(term_depth(bank, literal.rhs));
  }
  [clause.literals.len() as u32, clause.pos_lit_count, symbols, depth]
}

fn le(a: &FeatureVector, b: &FeatureVector) -> bool {
  a.iter().zip(b.iter()).all(|(x, y)| x <= y)
}

fn ge(a: &FeatureVector, b: &FeatureVector) -> bool {
  a.iter().zip(b.iter()).all(|(x, y)| x >= y)
}

#[derive(Default)]
pub struct FeatureVectorIndex {
  entries: Vec<(ClauseId, FeatureVector)>,
}

impl FeatureVectorIndex {
  pub fn new() -> Self {
    FeatureVectorIndex::default()
  }

  pub fn insert(&mut self, clause: ClauseId, vector: FeatureVector) {
    self.entries.push((clause, vector));
  }

  pub fn delete(&mut self, clause: ClauseId) {
    self.entries.retain(|(id, _)| *id != clause);
  }

  /// Candidate forward subsumers: stored clauses whose vector is componentwise `<=` `query`'s.
  pub fn candidates_le(&self, query: &FeatureVector) -> Vec<ClauseId> {
    self.entries.iter().filter(|(_, v)| le(v, query)).map(|(id, _)| *id).collect()
  }

  /// Candidates the query might backward-subsume: stored clauses whose vector is componentwise
  /// `>=` `query`'s.
  pub fn candidates_ge(&self, query: &FeatureVector) -> Vec<ClauseId> {
    self.entries.iter().filter(|(_, v)| ge(v, query)).map(|(id, _)| *id).collect()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::clause::{ClauseRole, DerivationRecord};
  use crate::core::config::OrderingKind;
  use crate::core::literal::{Literal, Sign};
  use crate::core::ordering::Ocb;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable};
  use eqprove_abs::IString;

  #[test]
  fn shorter_lighter_clause_is_le_candidate_subsumer() {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = SymbolTable::new();
    symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    symbols.declare(SymbolCore::new(IString::from("b"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let ocb = Ocb::new(OrderingKind::Kbo);
    let mut bank = TermBank::new(&symbols);
    let a = bank.insert(crate::core::symbol::SymbolId::new(0), &[]);
    let b = bank.insert(crate::core::symbol::SymbolId::new(1), &[]);

    let unit = Clause::new(vec![Literal::new(&bank, &ocb, a, b, Sign::Positive).unwrap()], ClauseRole::Axiom, DerivationRecord::initial());
    let pair = Clause::new(
      vec![Literal::new(&bank, &ocb, a, b, Sign::Positive).unwrap(), Literal::new(&bank, &ocb, b, a, Sign::Negative).unwrap()],
      ClauseRole::Axiom,
      DerivationRecord::initial(),
    );

    let mut index = FeatureVectorIndex::new();
    index.insert(crate::core::handles::ClauseId::new(0), compute(&bank, &unit));

    let query = compute(&bank, &pair);
    assert_eq!(index.candidates_le(&query).len(), 1);
  }
}
