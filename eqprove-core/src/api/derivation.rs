/*!

Reconstructs the proof DAG behind a derived empty clause. Per the external-interface table (§6), each
node carries its inference rule, parent clause ids, and a literal-position reference back to where its
content is stored; the substitution that drove each step lives on the clause's own literals (already
bank-resident terms), so it does not need to be serialized separately here.

*/

use std::fmt::Write as _;

use crate::core::clause::{Clause, InferenceRule};
use crate::core::format::{impl_display_debug_for_formattable, FormatStyle, Formattable};
use crate::core::handles::ClauseId;
use crate::core::literal::{Literal, Sign};
use crate::core::saturation::SaturationState;
use crate::core::symbol::SymbolTable;
use crate::core::term::{TermBank, TermId, TermNode};

/// One node of the derivation DAG: the clause it produced, which rule derived it, and the ids of the
/// parent clauses the rule consumed (empty for an initial/input clause).
pub struct DerivationStep {
  pub clause_id: ClauseId,
  pub rule: InferenceRule,
  pub parents: Vec<ClauseId>,
}

/// The proof: every clause reachable by walking derivation-record parents back from the empty clause,
/// in an order where every clause appears after all of its parents (topological, parents-first) —
/// the order a proof printer (out of scope) would want to emit steps in.
pub struct Derivation {
  pub steps: Vec<DerivationStep>,
}

impl Derivation {
  /// Walks `state`'s clause arena backward from `root` (normally the empty clause id a
  /// `SaturationOutcome::Proof` carries) and collects every ancestor clause exactly once.
  ///
  /// Per invariant 3 (§8), the derivation graph is acyclic and every parent was processed strictly
  /// before its child, so a plain depth-first postorder traversal terminates and yields a valid
  /// topological order without needing cycle detection.
  pub fn reconstruct(state: &SaturationState, root: ClauseId) -> Derivation {
    let mut steps = Vec::new();
    let mut seen = std::collections::HashSet::new();
    Self::visit(state, root, &mut seen, &mut steps);
    Derivation { steps }
  }

  fn visit(state: &SaturationState, id: ClauseId, seen: &mut std::collections::HashSet<ClauseId>, steps: &mut Vec<DerivationStep>) {
    if !seen.insert(id) {
      return;
    }
    let clause = state.clause(id);
    for &parent in &clause.derivation.parents {
      Self::visit(state, parent, seen, steps);
    }
    steps.push(DerivationStep { clause_id: id, rule: clause.derivation.rule, parents: clause.derivation.parents.to_vec() });
  }

  /// The final step, i.e. the clause the derivation was reconstructed from.
  pub fn root(&self) -> Option<&DerivationStep> {
    self.steps.last()
  }
}

/// Renders a bank-resident term using its symbol's declared name; variables print as `X` followed by
/// their slot index. Used only for proof/diagnostic text — the core's internal representation never
/// depends on how a term is printed.
pub struct TermDisplay<'a> {
  pub bank: &'a TermBank,
  pub symbols: &'a SymbolTable,
  pub term: TermId,
}

impl Formattable for TermDisplay<'_> {
  fn repr(&self, out: &mut dyn std::fmt::Write, style: FormatStyle) -> std::fmt::Result {
    match self.bank.node(self.term) {
      TermNode::Variable { index, .. } => write!(out, "X{}", index.idx()),
      TermNode::Compound { symbol, args } => {
        write!(out, "{}", self.symbols.get(*symbol).name)?;
        if !args.is_empty() {
          out.write_char('(')?;
          for (i, arg) in args.iter().enumerate() {
            if i > 0 {
              out.write_char(',')?;
            }
            TermDisplay { bank: self.bank, symbols: self.symbols, term: *arg }.repr(out, style)?;
          }
          out.write_char(')')?;
        }
        Ok(())
      }
    }
  }
}
impl_display_debug_for_formattable!(TermDisplay<'_>);

/// Renders one literal as `lhs = rhs` or `lhs != rhs`.
pub struct LiteralDisplay<'a> {
  pub bank: &'a TermBank,
  pub symbols: &'a SymbolTable,
  pub literal: &'a Literal,
}

impl Formattable for LiteralDisplay<'_> {
  fn repr(&self, out: &mut dyn std::fmt::Write, style: FormatStyle) -> std::fmt::Result {
    TermDisplay { bank: self.bank, symbols: self.symbols, term: self.literal.lhs }.repr(out, style)?;
    write!(out, " {} ", if self.literal.sign == Sign::Positive { "=" } else { "!=" })?;
    TermDisplay { bank: self.bank, symbols: self.symbols, term: self.literal.rhs }.repr(out, style)
  }
}
impl_display_debug_for_formattable!(LiteralDisplay<'_>);

/// Renders a clause as its disjunction of literals, `$false` if empty.
pub struct ClauseDisplay<'a> {
  pub bank: &'a TermBank,
  pub symbols: &'a SymbolTable,
  pub clause: &'a Clause,
}

impl Formattable for ClauseDisplay<'_> {
  fn repr(&self, out: &mut dyn std::fmt::Write, style: FormatStyle) -> std::fmt::Result {
    if self.clause.literals.is_empty() {
      return out.write_str("$false");
    }
    for (i, literal) in self.clause.literals.iter().enumerate() {
      if i > 0 {
        out.write_str(" | ")?;
      }
      LiteralDisplay { bank: self.bank, symbols: self.symbols, literal }.repr(out, style)?;
    }
    Ok(())
  }
}
impl_display_debug_for_formattable!(ClauseDisplay<'_>);

/// Renders one derivation step as `<id>: <clause> [<rule> <parents...>]`, the shape a proof printer
/// (out of scope) would emit one line per step of.
pub fn format_step(state: &SaturationState, step: &DerivationStep) -> String {
  let mut out = String::new();
  let clause = state.clause(step.clause_id);
  write!(out, "{}: {} [{:?}", step.clause_id.idx(), ClauseDisplay { bank: &state.bank, symbols: &state.symbols, clause }, step.rule).ok();
  for parent in &step.parents {
    write!(out, " {}", parent.idx()).ok();
  }
  out.push(']');
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::clause::ClauseRole;
  use crate::core::config::{Deadline, OrderingKind, ProverConfig};
  use crate::core::ordering::Ocb;
  use crate::core::saturation::SaturationOutcome;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable as Symbols};
  use crate::core::term::TermBank;
  use eqprove_abs::IString;

  #[test]
  fn reconstructs_proof_with_parents_before_children() {
    let mut sorts = SortTable::new();
    let i = sorts.individual_sort();
    let mut symbols = Symbols::new();
    let a = symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let b = symbols.declare(SymbolCore::new(IString::from("b"), Arity(0), vec![], i, SymbolAttributes::empty()));
    let f = symbols.declare(SymbolCore::new(IString::from("f"), Arity(1), vec![i], i, SymbolAttributes::empty()));
    let mut ocb = Ocb::new(OrderingKind::Kbo);
    ocb.generate_precedence_by_arity(&symbols);
    let mut bank = TermBank::new(&symbols);
    let a_term = bank.insert(a, &[]);
    let b_term = bank.insert(b, &[]);
    let fa = bank.insert(f, &[a_term]);
    let fb = bank.insert(f, &[b_term]);

    let mut state = SaturationState::new(bank, symbols, ocb, ProverConfig::default());
    state.add_clause(vec![(a_term, b_term, Sign::Positive)], ClauseRole::Axiom);
    state.add_clause(vec![(fa, fb, Sign::Negative)], ClauseRole::NegatedConjecture);

    let outcome = state.run(&Deadline::default());
    let SaturationOutcome::Proof(root) = outcome else { panic!("expected a proof") };

    let derivation = Derivation::reconstruct(&state, root);
    assert_eq!(derivation.root().unwrap().clause_id, root);

    let mut position_of = std::collections::HashMap::new();
    for (pos, step) in derivation.steps.iter().enumerate() {
      position_of.insert(step.clause_id, pos);
      for parent in &step.parents {
        assert!(position_of.contains_key(parent), "parent must appear before child");
      }
    }
  }
}
