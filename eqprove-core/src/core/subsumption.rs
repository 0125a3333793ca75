/*!

Clause subsumption and simplify-reflect. `subsumes(bank, ocb, subsumer, subsumed)` decides whether
some substitution of `subsumer`'s literals matches a sub-multiset of `subsumed`'s literals (each
literal of `subsumed` consumed by at most one literal of `subsumer`), which is what licenses deleting
`subsumed` outright once `subsumer` is known. `simplify_reflect` instead deletes
individual negative literals of a clause that are instances of a known positive unit equation, which
is a strictly weaker, non-deleting simplification.

Both forward and backward subsumption are driven from `core::index::feature_vector`: a clause's
feature vector is a necessary condition for subsumption, so the index narrows the candidate set before
this module's exact (and exponential in the worst case) literal-matching search runs. Condensation is
not implemented — see the design ledger.

*/

use crate::core::clause::Clause;
use crate::core::literal::{Literal, Sign};
use crate::core::ordering::Ocb;
use crate::core::substitution::Substitution;
use crate::core::term::TermBank;
use crate::core::unify::match_term;

/// Tries to extend `subst` so that `pattern` (a literal of the subsumer) is matched by `target` (a
/// literal of the subsumed clause), trying both orientations since an equation's sides are unordered.
/// Subsumption only ever compares same-sign literals, so this rejects a sign mismatch up front.
fn literal_matches(bank: &TermBank, subst: &mut Substitution, pattern: &Literal, target: &Literal) -> bool {
  if pattern.sign != target.sign {
    return false;
  }
  equation_matches(bank, subst, pattern, target)
}

/// Tries to extend `subst` so that `pattern`'s equation (`l ≃ r`, sign ignored) matches `target`'s
/// equation, trying both orientations. Shared by subsumption (same-sign literals) and simplify-reflect
/// (a positive unit matched against a negative literal — signs differ by construction there).
fn equation_matches(bank: &TermBank, subst: &mut Substitution, pattern: &Literal, target: &Literal) -> bool {
  let pos = subst.position();
  if match_term(bank, pattern.lhs, target.lhs, subst) && match_term(bank, pattern.rhs, target.rhs, subst) {
    return true;
  }
  subst.backtrack_to(pos);
  match_term(bank, pattern.lhs, target.rhs, subst) && match_term(bank, pattern.rhs, target.lhs, subst)
}

/// Per spec.md §4.8 step 3, subsumption matches `subsumer`'s literals against `subsumed`'s as a
/// multiset: each literal of `subsumed` may be picked by at most one literal of `subsumer`. `picked`
/// tracks which indices of `subsumed` are already spoken for.
fn subsumes_from(bank: &TermBank, subsumer: &[Literal], subsumed: &[Literal], index: usize, subst: &mut Substitution, picked: &mut [bool]) -> bool {
  if index == subsumer.len() {
    return true;
  }
  let pattern = &subsumer[index];
  for (target_index, target) in subsumed.iter().enumerate() {
    if picked[target_index] {
      continue;
    }
    let pos = subst.position();
    picked[target_index] = true;
    if literal_matches(bank, subst, pattern, target) && subsumes_from(bank, subsumer, subsumed, index + 1, subst, picked) {
      return true;
    }
    picked[target_index] = false;
    subst.backtrack_to(pos);
  }
  false
}

/// Decides whether `subsumer` subsumes `subsumed` (so `subsumed` may be deleted from the clause set).
/// A clause never subsumes a longer-or-equal clause with fewer literals than itself; callers are
/// expected to have already filtered by `feature_vector` before reaching this exact check.
pub fn subsumes(bank: &TermBank, _ocb: &Ocb, subsumer: &Clause, subsumed: &Clause) -> bool {
  if subsumer.literals.len() > subsumed.literals.len() {
    return false;
  }
  let mut subst = Substitution::new();
  let mut picked = vec![false; subsumed.literals.len()];
  subsumes_from(bank, &subsumer.literals, &subsumed.literals, 0, &mut subst, &mut picked)
}

/// Deletes literals of `clause` that are instances of a known positive unit equation `l ≃ r`: a
/// negative literal `u ≄ v` is removed whenever `l·σ = u` and `r·σ = v` (in either orientation) for
/// some `σ`, since the unit equation then makes that disequality provably false. Returns whether any
/// literal was removed.
pub fn simplify_reflect(bank: &TermBank, units: &[Literal], clause: &mut Clause) -> bool {
  let mut changed = false;
  let mut kept = Vec::with_capacity(clause.literals.len());
  for literal in clause.literals.drain(..) {
    let mut eliminated = false;
    if literal.sign == Sign::Negative {
      for unit in units {
        let mut subst = Substitution::new();
        if equation_matches(bank, &mut subst, unit, &literal) {
          eliminated = true;
          break;
        }
      }
    }
    if eliminated {
      changed = true;
    } else {
      kept.push(literal);
    }
  }
  clause.literals = kept;
  if changed {
    clause.recompute_weight();
  }
  changed
}
