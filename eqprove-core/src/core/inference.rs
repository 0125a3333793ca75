/*!

The three clause-generating inference rules of the calculus: equality resolution, equality factoring,
and superposition. All three return freshly derived clauses, already carrying a `DerivationRecord` that
names the rule and parent clauses, but otherwise unsimplified — `rewrite`/`subsumption` run on the
result afterward, same as every clause the saturation loop produces.

Superposition is not restricted to unit clauses: any maximal positive literal of the "from" clause may
serve as the rewriting equation, carrying the rest of that clause's literals along into the result. The
ordering constraint on the instantiated equation is the same one `rewrite::RewriteIndex` uses for
demodulation, so a simplifying inference here and a simplifying rewrite step there agree on direction.

*/

use smallvec::SmallVec;

use crate::core::clause::{Clause, ClauseRole, DerivationRecord, InferenceRule};
use crate::core::handles::ClauseId;
use crate::core::literal::{Literal, Sign};
use crate::core::ordering::Ocb;
use crate::core::substitution::Substitution;
use crate::core::term::{TermBank, TermId, TermNode};
use crate::core::unify::unify;

pub(crate) fn term_at(bank: &TermBank, term: TermId, position: &[usize]) -> Option<TermId> {
  let mut current = term;
  for &step in position {
    match bank.node(current) {
      TermNode::Compound { args, .. } => current = *args.get(step)?,
      TermNode::Variable { .. } => return None,
    }
  }
  Some(current)
}

fn replace_at(bank: &mut TermBank, term: TermId, position: &[usize], replacement: TermId) -> TermId {
  let Some((&step, rest)) = position.split_first() else { return replacement };
  let TermNode::Compound { symbol, args } = bank.node(term).clone() else { return term };
  let mut new_args: SmallVec<[TermId; 4]> = args.clone();
  new_args[step] = replace_at(bank, args[step], rest, replacement);
  bank.insert(symbol, &new_args)
}

/// Every position of `term` whose subterm is not itself a bare variable (the set superposition may
/// rewrite at).
pub(crate) fn nonvariable_positions(bank: &TermBank, term: TermId) -> Vec<Vec<usize>> {
  match bank.node(term).clone() {
    TermNode::Variable { .. } => Vec::new(),
    TermNode::Compound { args, .. } => {
      let mut out = vec![Vec::new()];
      for (i, &arg) in args.iter().enumerate() {
        for mut p in nonvariable_positions(bank, arg) {
          let mut full = vec![i];
          full.append(&mut p);
          out.push(full);
        }
      }
      out
    }
  }
}

fn instantiate_literals(bank: &mut TermBank, ocb: &Ocb, literals: &[Literal], skip: Option<usize>, subst: &Substitution) -> Vec<Literal> {
  literals
    .iter()
    .enumerate()
    .filter(|(i, _)| Some(*i) != skip)
    .filter_map(|(_, l)| {
      let lhs = bank.apply_substitution(l.lhs, subst);
      let rhs = bank.apply_substitution(l.rhs, subst);
      Literal::new(bank, ocb, lhs, rhs, l.sign)
    })
    .collect()
}

/// `C ∨ s ≄ t` where `s` and `t` unify via `σ` yields `Cσ`. Tried on every negative literal (not
/// only ones flagged eligible by literal selection — the caller is expected to have already dropped
/// clauses whose negative literals are all non-eligible before calling this).
pub fn equality_resolution(bank: &mut TermBank, ocb: &Ocb, clause_id: ClauseId, clause: &Clause) -> Vec<Clause> {
  let mut results = Vec::new();
  for (idx, literal) in clause.literals.iter().enumerate() {
    if literal.sign != Sign::Negative {
      continue;
    }
    let mut subst = Substitution::new();
    if unify(bank, literal.lhs, literal.rhs, &mut subst) {
      let new_literals = instantiate_literals(bank, ocb, &clause.literals, Some(idx), &subst);
      let derivation = DerivationRecord { rule: InferenceRule::EqualityResolution, parents: SmallVec::from_slice(&[clause_id]) };
      results.push(Clause::new(new_literals, clause.role, derivation));
    }
  }
  results
}

/// `C ∨ s ≃ t ∨ s' ≃ t'` where `s` and `s'` unify via `σ` and `tσ` is not ordering-greater than `sσ`
/// yields `(C ∨ t ≄ t' ∨ s ≃ t)σ`.
pub fn equality_factoring(bank: &mut TermBank, ocb: &Ocb, clause_id: ClauseId, clause: &Clause) -> Vec<Clause> {
  let mut results = Vec::new();
  let positive: Vec<usize> = clause.literals.iter().enumerate().filter(|(_, l)| l.sign == Sign::Positive).map(|(i, _)| i).collect();

  for &i in &positive {
    for &j in &positive {
      if i == j {
        continue;
      }
      let (li, lj) = (&clause.literals[i], &clause.literals[j]);
      let mut subst = Substitution::new();
      if !unify(bank, li.lhs, lj.lhs, &mut subst) {
        continue;
      }
      let s_sigma = bank.apply_substitution(li.lhs, &subst);
      let t_sigma = bank.apply_substitution(li.rhs, &subst);
      if matches!(ocb.compare(bank, t_sigma, s_sigma), Some(std::cmp::Ordering::Greater)) {
        continue;
      }

      let mut new_literals = instantiate_literals(bank, ocb, &clause.literals, Some(j), &subst);
      let tj_sigma = bank.apply_substitution(lj.rhs, &subst);
      if let Some(negated) = Literal::new(bank, ocb, t_sigma, tj_sigma, Sign::Negative) {
        new_literals.push(negated);
      }
      let derivation = DerivationRecord { rule: InferenceRule::EqualityFactoring, parents: SmallVec::from_slice(&[clause_id]) };
      results.push(Clause::new(new_literals, clause.role, derivation));
    }
  }
  results
}

/// Superposition between two distinct processed/given clauses: for every maximal positive literal
/// `l ≃ r` of `from_clause` and every non-variable position of every eligible literal of
/// `into_clause` whose subterm unifies with `l`, yields `(from_clause \ {l≃r} ∨ into_clause \
/// {that literal} ∨ rewritten literal)σ`, provided the instantiated `r` is not ordering-greater than
/// the instantiated `l` (the rewrite the inference performs is in a reducing direction). Eligibility
/// on the `into_clause` side follows `saturation::selection`: selected literals if any were
/// selected, maximal literals otherwise (spec.md §4.9's "a selected literal of the other").
///
/// `from_clause` and `into_clause` must be distinct clauses (distinct `ClauseId`s): the caller is
/// responsible for never calling this with `from_id == into_id`, since the combined literal list
/// below assumes the two literal lists don't overlap.
pub fn superposition(bank: &mut TermBank, ocb: &Ocb, from_id: ClauseId, from_clause: &Clause, into_id: ClauseId, into_clause: &Clause) -> Vec<Clause> {
  let mut results = Vec::new();

  for (from_idx, equation) in from_clause.literals.iter().enumerate() {
    if equation.sign != Sign::Positive || !equation.properties.contains(crate::core::literal::LiteralProperty::Maximal) {
      continue;
    }
    let eq_lhs = equation.greater_side(bank, ocb);
    let eq_rhs = if eq_lhs == equation.lhs { equation.rhs } else { equation.lhs };

    for (lit_idx, literal) in into_clause.literals.iter().enumerate() {
      if !literal.is_eligible() {
        continue;
      }
      for side in [literal.lhs, literal.rhs] {
        for position in nonvariable_positions(bank, side) {
          let Some(subterm) = term_at(bank, side, &position) else { continue };
          let mut subst = Substitution::new();
          if !unify(bank, eq_lhs, subterm, &mut subst) {
            continue;
          }
          let l_sigma = bank.apply_substitution(eq_lhs, &subst);
          let r_sigma = bank.apply_substitution(eq_rhs, &subst);
          if matches!(ocb.compare(bank, l_sigma, r_sigma), Some(std::cmp::Ordering::Less)) {
            continue;
          }

          let rewritten_side = replace_at(bank, side, &position, r_sigma);
          let (new_lhs, new_rhs) = if side == literal.lhs { (rewritten_side, literal.rhs) } else { (literal.lhs, rewritten_side) };
          let new_lhs = bank.apply_substitution(new_lhs, &subst);
          let new_rhs = bank.apply_substitution(new_rhs, &subst);

          let mut new_literals = instantiate_literals(bank, ocb, &from_clause.literals, Some(from_idx), &subst);
          new_literals.extend(instantiate_literals(bank, ocb, &into_clause.literals, Some(lit_idx), &subst));
          if let Some(rewritten) = Literal::new(bank, ocb, new_lhs, new_rhs, literal.sign) {
            new_literals.push(rewritten);
          }
          let derivation = DerivationRecord { rule: InferenceRule::Superposition, parents: SmallVec::from_slice(&[from_id, into_id]) };
          results.push(Clause::new(new_literals, into_clause.role, derivation));
        }
      }
    }
  }
  results
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::clause::ClauseRole;
  use crate::core::config::OrderingKind;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable};
  use eqprove_abs::IString;

  fn setup() -> (TermBank, Ocb, crate::core::symbol::SymbolId, crate::core::symbol::SymbolId, crate::core::symbol::SymbolId) {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = SymbolTable::new();
    let a = symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let b = symbols.declare(SymbolCore::new(IString::from("b"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let f = symbols.declare(SymbolCore::new(IString::from("f"), Arity(1), vec![i], i, SymbolAttributes::empty()));
    let mut ocb = Ocb::new(OrderingKind::Kbo);
    ocb.generate_precedence_by_arity(&symbols);
    let bank = TermBank::new(&symbols);
    (bank, ocb, a, b, f)
  }

  #[test]
  fn equality_resolution_deletes_unifiable_negative_literal() {
    let (mut bank, ocb, a, _b, _f) = setup();
    let a_term = bank.insert(a, &[]);
    let lit = Literal::new(&bank, &ocb, a_term, a_term, Sign::Negative).unwrap();
    let clause = Clause::new(vec![lit], ClauseRole::Axiom, DerivationRecord::initial());

    let results = equality_resolution(&mut bank, &ocb, ClauseId::new(0), &clause);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_empty_clause());
  }

  #[test]
  fn superposition_rewrites_into_clause() {
    let (mut bank, ocb, a, b, f) = setup();
    let a_term = bank.insert(a, &[]);
    let b_term = bank.insert(b, &[]);
    let fa = bank.insert(f, &[a_term]);

    let unit = Literal::new(&bank, &ocb, a_term, b_term, Sign::Positive).unwrap();
    let mut from_clause = Clause::new(vec![unit], ClauseRole::Axiom, DerivationRecord::initial());
    crate::core::saturation::selection::mark_maximal(&bank, &ocb, &mut from_clause);
    crate::core::saturation::selection::select(&mut from_clause, crate::core::config::LiteralSelectionStrategy::NoSelection);

    let goal_lit = Literal::new(&bank, &ocb, fa, fa, Sign::Negative).unwrap();
    let mut into_clause = Clause::new(vec![goal_lit], ClauseRole::NegatedConjecture, DerivationRecord::initial());
    crate::core::saturation::selection::mark_maximal(&bank, &ocb, &mut into_clause);
    crate::core::saturation::selection::select(&mut into_clause, crate::core::config::LiteralSelectionStrategy::NoSelection);

    let results = superposition(&mut bank, &ocb, ClauseId::new(0), &from_clause, ClauseId::new(1), &into_clause);
    assert!(!results.is_empty());
  }

  #[test]
  fn superposition_carries_remaining_literals_of_a_non_unit_from_clause() {
    let (mut bank, ocb, a, b, f) = setup();
    let a_term = bank.insert(a, &[]);
    let b_term = bank.insert(b, &[]);
    let fa = bank.insert(f, &[a_term]);
    let fb = bank.insert(f, &[b_term]);

    // from_clause: a = b  |  f(b) = f(a)   (non-unit: two positive equations)
    let eq1 = Literal::new(&bank, &ocb, a_term, b_term, Sign::Positive).unwrap();
    let eq2 = Literal::new(&bank, &ocb, fb, fa, Sign::Positive).unwrap();
    let mut from_clause = Clause::new(vec![eq1, eq2], ClauseRole::Axiom, DerivationRecord::initial());
    crate::core::saturation::selection::mark_maximal(&bank, &ocb, &mut from_clause);
    crate::core::saturation::selection::select(&mut from_clause, crate::core::config::LiteralSelectionStrategy::NoSelection);

    // into_clause: f(a) != f(a)   (negative, unifies against the maximal equation's lhs)
    let goal_lit = Literal::new(&bank, &ocb, fa, fa, Sign::Negative).unwrap();
    let mut into_clause = Clause::new(vec![goal_lit], ClauseRole::NegatedConjecture, DerivationRecord::initial());
    crate::core::saturation::selection::mark_maximal(&bank, &ocb, &mut into_clause);
    crate::core::saturation::selection::select(&mut into_clause, crate::core::config::LiteralSelectionStrategy::NoSelection);

    let results = superposition(&mut bank, &ocb, ClauseId::new(0), &from_clause, ClauseId::new(1), &into_clause);
    // Whichever literal of from_clause is maximal fires; the resulting clause must carry the
    // from_clause's other literal along (it is not simply dropped).
    assert!(!results.is_empty());
    assert!(results.iter().any(|c| c.literals.len() == 2));
  }
}
