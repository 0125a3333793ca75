/*!

A clause is a multiset of literals together with its derivation record (the inference and parent
clauses that produced it) and the bookkeeping properties the saturation loop needs: which set it
belongs to, whether it is a goal, whether it has been marked for deletion.

*/

use enumflags2::{bitflags, BitFlags};
use smallvec::SmallVec;

use crate::core::handles::ClauseId;
use crate::core::literal::Literal;
use crate::core::term::TermBank;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClauseRole {
  Axiom,
  Conjecture,
  NegatedConjecture,
  Hypothesis,
  Watchlist,
}

#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClauseProperty {
  Initial,
  FromConjecture,
  Processed,
  IsGoal,
  DeleteMe,
  SubsumesWatchlist,
}

pub type ClauseProperties = BitFlags<ClauseProperty, u16>;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InferenceRule {
  Initial,
  Superposition,
  EqualityFactoring,
  EqualityResolution,
  Demodulation,
  SimplifyReflect,
  Subsumption,
}

#[derive(Clone)]
pub struct DerivationRecord {
  pub rule: InferenceRule,
  pub parents: SmallVec<[ClauseId; 2]>,
}

impl DerivationRecord {
  pub fn initial() -> Self {
    DerivationRecord { rule: InferenceRule::Initial, parents: SmallVec::new() }
  }
}

#[derive(Clone)]
pub struct Clause {
  pub literals: Vec<Literal>,
  pub pos_lit_count: u32,
  pub neg_lit_count: u32,
  pub weight: u32,
  pub date: u64,
  pub properties: ClauseProperties,
  pub derivation: DerivationRecord,
  pub role: ClauseRole,
}

impl Clause {
  pub fn new(literals: Vec<Literal>, role: ClauseRole, derivation: DerivationRecord) -> Self {
    let pos_lit_count = literals.iter().filter(|l| l.sign == crate::core::literal::Sign::Positive).count() as u32;
    let neg_lit_count = literals.len() as u32 - pos_lit_count;
    let weight = literals.iter().map(|l| l.standard_weight).sum();
    let mut properties = ClauseProperties::empty();
    if matches!(role, ClauseRole::Conjecture | ClauseRole::NegatedConjecture) {
      properties |= ClauseProperty::FromConjecture | ClauseProperty::IsGoal;
    }
    Clause { literals, pos_lit_count, neg_lit_count, weight, date: 0, properties, derivation, role }
  }

  pub fn is_empty_clause(&self) -> bool {
    self.literals.is_empty()
  }

  pub fn recompute_weight(&mut self) {
    self.weight = self.literals.iter().map(|l| l.standard_weight).sum();
  }

  pub fn is_unit(&self) -> bool {
    self.literals.len() == 1
  }

  pub fn is_ground(&self, bank: &TermBank) -> bool {
    self.literals.iter().all(|l| bank.get(l.lhs).is_ground() && bank.get(l.rhs).is_ground())
  }

  pub fn mark_deleted(&mut self) {
    self.properties |= ClauseProperty::DeleteMe;
  }

  pub fn is_deleted(&self) -> bool {
    self.properties.contains(ClauseProperty::DeleteMe)
  }
}
