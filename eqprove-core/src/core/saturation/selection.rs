/*!

Literal selection: which literals of a clause are eligible to be the minor premise of an inference.
`mark_maximal` computes the `Maximal` property shared by every strategy; `select` then additionally
marks zero or more negative literals `Selected` according to `LiteralSelectionStrategy`, restricting
eligibility to the selected literals whenever a strategy selects any.

*/

use crate::core::clause::Clause;
use crate::core::config::LiteralSelectionStrategy;
use crate::core::literal::Sign;
use crate::core::ordering::Ocb;
use crate::core::term::TermBank;

/// Marks every literal whose representative term (its ordering-greater side) is not ordering-smaller
/// than any other literal's representative term.
pub fn mark_maximal(bank: &TermBank, ocb: &Ocb, clause: &mut Clause) {
  let representatives: Vec<_> = clause.literals.iter().map(|l| l.greater_side(bank, ocb)).collect();
  for i in 0..clause.literals.len() {
    let is_maximal = (0..clause.literals.len()).all(|j| {
      i == j || !matches!(ocb.compare(bank, representatives[i], representatives[j]), Some(std::cmp::Ordering::Less))
    });
    if is_maximal {
      clause.literals[i].properties |= crate::core::literal::LiteralProperty::Maximal;
    } else {
      clause.literals[i].properties.remove(crate::core::literal::LiteralProperty::Maximal);
    }
  }
}

fn select_indices(clause: &Clause, strategy: LiteralSelectionStrategy) -> Vec<usize> {
  let negatives: Vec<usize> = clause.literals.iter().enumerate().filter(|(_, l)| l.sign == Sign::Negative).map(|(i, _)| i).collect();
  if negatives.is_empty() {
    return Vec::new();
  }

  match strategy {
    LiteralSelectionStrategy::NoSelection => Vec::new(),
    LiteralSelectionStrategy::SelectNegativeLiterals => negatives,
    LiteralSelectionStrategy::PSelectNegativeLiterals => vec![negatives[0]],
    LiteralSelectionStrategy::SelectLargestNegativeLiteral => {
      vec![*negatives.iter().max_by_key(|&&i| clause.literals[i].standard_weight).unwrap()]
    }
    LiteralSelectionStrategy::SelectSmallestNegativeLiteral => {
      vec![*negatives.iter().min_by_key(|&&i| clause.literals[i].standard_weight).unwrap()]
    }
    LiteralSelectionStrategy::SelectComplex => {
      let maximal_negative = negatives.iter().find(|&&i| clause.literals[i].properties.contains(crate::core::literal::LiteralProperty::Maximal));
      match maximal_negative {
        Some(&i) => vec![i],
        None => vec![*negatives.iter().max_by_key(|&&i| clause.literals[i].standard_weight).unwrap()],
      }
    }
  }
}

/// Applies `strategy` to `clause`, which must already have `mark_maximal` run on it. Selection only
/// ever narrows *negative*-literal eligibility (the set-of-support-style restriction spec.md §4.9
/// describes); a maximal positive literal stays eligible to be the equation side of a superposition
/// regardless of which negative literals a strategy selects. So: if any negative literal was
/// selected, eligibility is selected-negatives plus every maximal positive literal; otherwise every
/// maximal literal (of either sign) is eligible.
pub fn select(clause: &mut Clause, strategy: LiteralSelectionStrategy) {
  let selected = select_indices(clause, strategy);
  for literal in &mut clause.literals {
    literal.set_selected(false);
    literal.set_eligible(false);
  }
  if selected.is_empty() {
    for literal in &mut clause.literals {
      let maximal = literal.properties.contains(crate::core::literal::LiteralProperty::Maximal);
      literal.set_eligible(maximal);
    }
  } else {
    for &i in &selected {
      clause.literals[i].set_selected(true);
    }
    for literal in &mut clause.literals {
      if literal.sign == Sign::Positive && literal.properties.contains(crate::core::literal::LiteralProperty::Maximal) {
        literal.set_eligible(true);
      }
    }
  }
}
