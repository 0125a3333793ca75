/*!

A literal is a positive or negative equation `l ≃ r` / `l ≄ r`. A non-equational atom `P(t1..tn)` is
represented as `P(t1..tn) ≃ $true`, so the whole calculus only ever needs to reason about equations.

*/

use enumflags2::{bitflags, BitFlags};

use crate::core::ordering::Ocb;
use crate::core::term::{TermBank, TermId};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Sign {
  Positive,
  Negative,
}

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LiteralProperty {
  /// Set once `lhs` is ordering-greater than `rhs`; an unorientable literal never gets this flag.
  Oriented,
  /// Maximal among the clause's literals under the OCB's multiset extension.
  Maximal,
  EligibleForResolution,
  Selected,
  /// Neither side is the `$true` encoding of a non-equational atom.
  PureEquality,
}

pub type LiteralProperties = BitFlags<LiteralProperty, u8>;

#[derive(Copy, Clone)]
pub struct Literal {
  pub lhs: TermId,
  pub rhs: TermId,
  pub sign: Sign,
  pub properties: LiteralProperties,
  pub standard_weight: u32,
}

impl Literal {
  /// Constructs a literal, computing its cached weight and orientation. Returns `None` if the
  /// literal is a syntactic tautology `l ≃ l` eliminated at construction time.
  pub fn new(bank: &TermBank, ocb: &Ocb, lhs: TermId, rhs: TermId, sign: Sign) -> Option<Literal> {
    if sign == Sign::Positive && lhs == rhs {
      return None;
    }

    let standard_weight = bank.get(lhs).weight + bank.get(rhs).weight;
    let mut properties = LiteralProperties::empty();
    if lhs != rhs {
      properties |= LiteralProperty::PureEquality;
    }

    use eqprove_abs::PartialOrdering;
    match ocb.compare(bank, lhs, rhs) {
      PartialOrdering::Greater => properties |= LiteralProperty::Oriented,
      _ => {}
    }

    Some(Literal { lhs, rhs, sign, properties, standard_weight })
  }

  /// The ordering-greater side if oriented, else `lhs` (used when unorientable literals must still
  /// name a "conceptual" left side for display/indexing purposes).
  pub fn greater_side(&self, bank: &TermBank, ocb: &Ocb) -> TermId {
    use eqprove_abs::PartialOrdering;
    match ocb.compare(bank, self.lhs, self.rhs) {
      PartialOrdering::Less => self.rhs,
      _ => self.lhs,
    }
  }

  pub fn is_oriented(&self) -> bool {
    self.properties.contains(LiteralProperty::Oriented)
  }

  pub fn is_selected(&self) -> bool {
    self.properties.contains(LiteralProperty::Selected)
  }

  pub fn is_eligible(&self) -> bool {
    self.properties.contains(LiteralProperty::EligibleForResolution)
  }

  pub fn set_selected(&mut self, value: bool) {
    if value {
      self.properties |= LiteralProperty::Selected | LiteralProperty::EligibleForResolution;
    } else {
      self.properties.remove(LiteralProperty::Selected);
    }
  }

  pub fn set_eligible(&mut self, value: bool) {
    if value {
      self.properties |= LiteralProperty::EligibleForResolution;
    } else {
      self.properties.remove(LiteralProperty::EligibleForResolution);
    }
  }
}
