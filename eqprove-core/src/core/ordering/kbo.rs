/*!

Knuth-Bendix ordering. Ground-extendable terms are compared by (i) weight, (ii) variable-count
domination (neither side may have a variable occurring more often than the other), then (iii)
precedence on head symbols with a recursive left-to-right lexicographic tie-break on arguments.

*/

use std::cmp::Ordering;

use eqprove_abs::PartialOrdering;
use smallvec::SmallVec;

use crate::core::handles::VariableIndex;
use crate::core::ordering::{CmpResult, Ocb, MAX_RECURSION_DEPTH};
use crate::core::term::{TermBank, TermId, TermNode};

type VarCounts = SmallVec<[(VariableIndex, u32); 4]>;

/// `true` if `a`'s variable multiset pointwise dominates `b`'s (every variable occurs at least as
/// often in `a` as in `b`).
fn dominates(a: &VarCounts, b: &VarCounts) -> bool {
  b.iter().all(|(var, count)| a.iter().find(|(v, _)| v == var).map(|(_, c)| *c).unwrap_or(0) >= *count)
}

pub fn compare(ocb: &Ocb, bank: &TermBank, s: TermId, t: TermId) -> CmpResult {
  compare_rec(ocb, bank, s, t, 0)
}

fn compare_rec(ocb: &Ocb, bank: &TermBank, s: TermId, t: TermId, depth: usize) -> CmpResult {
  if s == t {
    return PartialOrdering::Equal;
  }
  if depth >= MAX_RECURSION_DEPTH {
    return PartialOrdering::Incomparable;
  }

  let s_data = bank.get(s);
  let t_data = bank.get(t);

  // Subterm property: a variable is less than any compound term properly containing it.
  if let TermNode::Variable { .. } = &s_data.node {
    return if occurs_as_subterm(bank, s, t) { PartialOrdering::Less } else { PartialOrdering::Incomparable };
  }
  if let TermNode::Variable { .. } = &t_data.node {
    return if occurs_as_subterm(bank, t, s) { PartialOrdering::Greater } else { PartialOrdering::Incomparable };
  }

  let s_dominates = dominates(&s_data.var_counts, &t_data.var_counts);
  let t_dominates = dominates(&t_data.var_counts, &s_data.var_counts);

  if !s_dominates && !t_dominates {
    return PartialOrdering::Incomparable;
  }

  match s_data.weight.cmp(&t_data.weight) {
    Ordering::Greater if s_dominates => PartialOrdering::Greater,
    Ordering::Less if t_dominates => PartialOrdering::Less,
    Ordering::Equal if s_dominates && t_dominates => compare_by_precedence(ocb, bank, s, t, depth),
    _ => PartialOrdering::Incomparable,
  }
}

fn compare_by_precedence(ocb: &Ocb, bank: &TermBank, s: TermId, t: TermId, depth: usize) -> CmpResult {
  let (s_sym, s_args) = match &bank.node(s) {
    TermNode::Compound { symbol, args } => (*symbol, args.clone()),
    TermNode::Variable { .. } => return PartialOrdering::Equal,
  };
  let (t_sym, t_args) = match &bank.node(t) {
    TermNode::Compound { symbol, args } => (*symbol, args.clone()),
    TermNode::Variable { .. } => return PartialOrdering::Equal,
  };

  if s_sym != t_sym {
    return match ocb.precedence(s_sym).cmp(&ocb.precedence(t_sym)) {
      Ordering::Greater => PartialOrdering::Greater,
      Ordering::Less => PartialOrdering::Less,
      Ordering::Equal => PartialOrdering::Incomparable,
    };
  }

  for (&a, &b) in s_args.iter().zip(t_args.iter()) {
    match compare_rec(ocb, bank, a, b, depth + 1) {
      PartialOrdering::Equal => continue,
      other => return other,
    }
  }
  PartialOrdering::Equal
}

fn occurs_as_subterm(bank: &TermBank, var: TermId, term: TermId) -> bool {
  if var == term {
    return true;
  }
  match bank.node(term) {
    TermNode::Compound { args, .. } => args.iter().any(|&a| occurs_as_subterm(bank, var, a)),
    TermNode::Variable { .. } => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::config::OrderingKind;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable};
  use eqprove_abs::IString;

  fn setup() -> (TermBank, Ocb) {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = SymbolTable::new();
    symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    symbols.declare(SymbolCore::new(IString::from("f"), Arity(1), vec![i], i, SymbolAttributes::empty()));
    let mut ocb = Ocb::new(OrderingKind::Kbo);
    ocb.generate_precedence_by_arity(&symbols);
    let bank = TermBank::new(&symbols);
    (bank, ocb)
  }

  #[test]
  fn compound_is_greater_than_subterm() {
    let (mut bank, ocb) = setup();
    let a = bank.insert(crate::core::symbol::SymbolId::new(0), &[]);
    let fa = bank.insert(crate::core::symbol::SymbolId::new(1), &[a]);
    assert_eq!(compare(&ocb, &bank, fa, a), PartialOrdering::Greater);
    assert_eq!(compare(&ocb, &bank, a, fa), PartialOrdering::Less);
  }

  #[test]
  fn identical_terms_are_equal() {
    let (mut bank, ocb) = setup();
    let a = bank.insert(crate::core::symbol::SymbolId::new(0), &[]);
    assert_eq!(compare(&ocb, &bank, a, a), PartialOrdering::Equal);
  }

  #[test]
  fn distinct_variables_are_incomparable() {
    let (mut bank, ocb) = setup();
    let i = SortTable::new().individual_sort();
    let v0 = bank.insert_variable(VariableIndex::new(0), i);
    let v1 = bank.insert_variable(VariableIndex::new(1), i);
    assert_eq!(compare(&ocb, &bank, v0, v1), PartialOrdering::Incomparable);
  }
}
