/*!

Matching and unification over bank-resident terms. Both operations extend a `Substitution` in place
and are non-destructive on failure: the caller gets back the trail position it started from and can
call `Substitution::backtrack_to` to undo any partial work.

*/

use crate::core::substitution::Substitution;
use crate::core::term::{TermBank, TermId, TermNode};

/// Extends `subst` so that `pattern · subst = target`, treating only `pattern`'s variables as
/// substitutable. Fails (leaving `subst` unchanged past the entry position) if a variable of
/// `pattern` is already bound to a term other than `target`. Variables of `target` are never bound.
pub fn match_term(bank: &TermBank, pattern: TermId, target: TermId, subst: &mut Substitution) -> bool {
  let pos = subst.position();
  if match_rec(bank, pattern, target, subst) {
    true
  } else {
    subst.backtrack_to(pos);
    false
  }
}

fn match_rec(bank: &TermBank, pattern: TermId, target: TermId, subst: &mut Substitution) -> bool {
  match bank.node(pattern) {
    TermNode::Variable { index, .. } => match subst.get(*index) {
      Some(bound) => bound == target,
      None => {
        subst.bind(*index, target);
        true
      }
    },
    TermNode::Compound { symbol: p_sym, args: p_args } => {
      match bank.node(target) {
        TermNode::Compound { symbol: t_sym, args: t_args } if p_sym == t_sym && p_args.len() == t_args.len() => {
          let p_args = p_args.clone();
          let t_args = t_args.clone();
          p_args.iter().zip(t_args.iter()).all(|(&p, &t)| match_rec(bank, p, t, subst))
        }
        _ => false,
      }
    }
  }
}

/// Robinson-style unification with occurs-check, extending `subst` to a most general unifier of `s`
/// and `t`. Non-destructive on failure.
pub fn unify(bank: &mut TermBank, s: TermId, t: TermId, subst: &mut Substitution) -> bool {
  let pos = subst.position();
  if unify_rec(bank, s, t, subst) {
    true
  } else {
    subst.backtrack_to(pos);
    false
  }
}

fn resolve(bank: &TermBank, term: TermId, subst: &Substitution) -> TermId {
  let mut current = term;
  loop {
    match bank.node(current) {
      TermNode::Variable { index, .. } => match subst.get(*index) {
        Some(bound) if bound != current => current = bound,
        _ => return current,
      },
      _ => return current,
    }
  }
}

fn occurs(bank: &TermBank, var: TermId, term: TermId, subst: &Substitution) -> bool {
  let term = resolve(bank, term, subst);
  if term == var {
    return true;
  }
  match bank.node(term) {
    TermNode::Compound { args, .. } => {
      let args = args.clone();
      args.iter().any(|&a| occurs(bank, var, a, subst))
    }
    TermNode::Variable { .. } => false,
  }
}

fn unify_rec(bank: &mut TermBank, s: TermId, t: TermId, subst: &mut Substitution) -> bool {
  let s = resolve(bank, s, subst);
  let t = resolve(bank, t, subst);
  if s == t {
    return true;
  }

  let s_is_var = matches!(bank.node(s), TermNode::Variable { .. });
  let t_is_var = matches!(bank.node(t), TermNode::Variable { .. });

  if s_is_var {
    if occurs(bank, s, t, subst) {
      return false;
    }
    let TermNode::Variable { index, .. } = *bank.node(s) else { unreachable!() };
    subst.bind(index, t);
    return true;
  }
  if t_is_var {
    if occurs(bank, t, s, subst) {
      return false;
    }
    let TermNode::Variable { index, .. } = *bank.node(t) else { unreachable!() };
    subst.bind(index, s);
    return true;
  }

  match (bank.node(s).clone(), bank.node(t).clone()) {
    (TermNode::Compound { symbol: sf, args: sa }, TermNode::Compound { symbol: tf, args: ta }) => {
      if sf != tf || sa.len() != ta.len() {
        return false;
      }
      sa.iter().zip(ta.iter()).all(|(&a, &b)| unify_rec(bank, a, b, subst))
    }
    _ => unreachable!("non-variable, non-compound term"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::handles::VariableIndex;
  use crate::core::sort::SortTable;
  use crate::core::symbol::{Arity, SymbolAttributes, SymbolCore, SymbolTable};
  use eqprove_abs::IString;

  fn setup() -> (TermBank, SymbolTable) {
    let sorts = SortTable::new();
    let mut symbols = SymbolTable::new();
    let i = sorts.individual_sort();
    symbols.declare(SymbolCore::new(IString::from("a"), Arity(0), vec![], i, SymbolAttributes::empty()));
    symbols.declare(SymbolCore::new(IString::from("f"), Arity(1), vec![i], i, SymbolAttributes::empty()));
    let bank = TermBank::new(&symbols);
    (bank, symbols)
  }

  #[test]
  fn match_binds_pattern_variable_only() {
    let (mut bank, symbols) = setup();
    let i = SortTable::new().individual_sort();
    let (a_id, f_id) = (crate::core::symbol::SymbolId::new(0), crate::core::symbol::SymbolId::new(1));
    let _ = symbols;
    let a = bank.insert(a_id, &[]);
    let fa = bank.insert(f_id, &[a]);
    let v = bank.insert_variable(VariableIndex::new(0), i);
    let fv = bank.insert(f_id, &[v]);

    let mut subst = Substitution::new();
    assert!(match_term(&bank, fv, fa, &mut subst));
    assert_eq!(subst.get(VariableIndex::new(0)), Some(a));
  }

  #[test]
  fn unify_with_occurs_check_fails() {
    let (mut bank, _symbols) = setup();
    let i = SortTable::new().individual_sort();
    let f_id = crate::core::symbol::SymbolId::new(1);
    let v = bank.insert_variable(VariableIndex::new(0), i);
    let fv = bank.insert(f_id, &[v]);

    let mut subst = Substitution::new();
    assert!(!unify(&mut bank, v, fv, &mut subst));
    assert_eq!(subst.position(), 0);
  }
}
