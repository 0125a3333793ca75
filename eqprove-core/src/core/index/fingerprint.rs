/*!

Fingerprint index: a map from position-vector keys to the indexed terms that produced them, used for
paramodulation-from, paramodulation-into, and backward-rewriting candidate retrieval.

A fingerprint inspects a term at a small fixed set of positions (`ε, 1, 2, 1.1, 1.2, 2.1, 2.2` by
default) and records, at each, whether the term has a function symbol there, a variable, a position
"below" a variable (unreachable because an ancestor was a variable), or no position at all (the term
is too shallow). Two fingerprints are compatible — i.e. worth verifying with real unification or
matching — according to `compatible`, which is intentionally a *sound over-approximation* shared by
all three retrieval modes (`unify`, `match-generalisations`, `match-instances`): it only rules out
pairs that are structurally impossible, the way the PDT's bucketing is a coarse filter too. Every
candidate the index returns is still verified by the caller with the real `unify`/`match_term`.

*/

use eqprove_abs::HashMap;

use crate::core::index::IndexedTerm;
use crate::core::symbol::SymbolId;
use crate::core::term::{TermBank, TermId, TermNode};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum FingerprintEntry {
  Symbol(SymbolId),
  Variable,
  BelowVariable,
  NotPresent,
}

pub type Fingerprint = Vec<FingerprintEntry>;

/// The default position set: root, each of the first two arguments, and each of their first two
/// arguments in turn.
pub fn default_positions() -> Vec<Vec<usize>> {
  vec![vec![], vec![0], vec![1], vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
}

fn entry_at(bank: &TermBank, term: TermId, position: &[usize]) -> FingerprintEntry {
  let mut current = term;
  for &step in position {
    match bank.node(current) {
      TermNode::Variable { .. } => return FingerprintEntry::BelowVariable,
      TermNode::Compound { args, .. } => match args.get(step) {
        Some(&next) => current = next,
        None => return FingerprintEntry::NotPresent,
      },
    }
  }
  match bank.node(current) {
    TermNode::Variable { .. } => FingerprintEntry::Variable,
    TermNode::Compound { symbol, .. } => FingerprintEntry::Symbol(*symbol),
  }
}

pub fn compute(bank: &TermBank, term: TermId, positions: &[Vec<usize>]) -> Fingerprint {
  positions.iter().map(|p| entry_at(bank, term, p)).collect()
}

/// Conservative pairwise compatibility, used uniformly for all three retrieval modes (see module docs).
fn compatible(query: FingerprintEntry, key: FingerprintEntry) -> bool {
  use FingerprintEntry::*;
  match (query, key) {
    (Symbol(a), Symbol(b)) => a == b,
    (NotPresent, Symbol(_)) | (Symbol(_), NotPresent) => false,
    _ => true,
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RetrievalMode {
  Unify,
  MatchGeneralisations,
  MatchInstances,
}

#[derive(Default)]
pub struct FingerprintIndex {
  positions: Vec<Vec<usize>>,
  buckets: HashMap<Fingerprint, Vec<IndexedTerm>>,
}

impl FingerprintIndex {
  pub fn new() -> Self {
    FingerprintIndex { positions: default_positions(), buckets: HashMap::new() }
  }

  pub fn insert(&mut self, bank: &TermBank, entry: IndexedTerm) {
    let key = compute(bank, entry.term, &self.positions);
    self.buckets.entry(key).or_default().push(entry);
  }

  pub fn delete(&mut self, bank: &TermBank, term: TermId, clause: crate::core::handles::ClauseId, literal: u32) {
    let key = compute(bank, term, &self.positions);
    if let Some(bucket) = self.buckets.get_mut(&key) {
      bucket.retain(|e| !(e.position.clause == clause && e.position.literal == literal));
    }
  }

  /// Removes every entry belonging to `clause`, regardless of which literal or side produced it.
  /// Used when a clause is deleted (subsumed, or the given clause it was replaced by) and the exact
  /// subterms originally indexed are no longer at hand.
  pub fn delete_clause(&mut self, clause: crate::core::handles::ClauseId) {
    for bucket in self.buckets.values_mut() {
      bucket.retain(|e| e.position.clause != clause);
    }
  }

  /// Enumerates all indexed terms whose fingerprint is compatible with `query`'s under `mode`.
  pub fn retrieve(&self, bank: &TermBank, query: TermId, _mode: RetrievalMode) -> Vec<IndexedTerm> {
    let query_fp = compute(bank, query, &self.positions);
    self
      .buckets
      .iter()
      .filter(|(key, _)| key.iter().zip(query_fp.iter()).all(|(&k, &q)| compatible(q, k)))
      .flat_map(|(_, entries)| entries.iter().copied())
      .collect()
  }

  pub fn len(&self) -> usize {
    self.buckets.values().map(|b| b.len()).sum()
  }
}
