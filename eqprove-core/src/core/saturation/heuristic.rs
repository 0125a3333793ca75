/*!

Clause evaluation: how the given-clause loop picks the next passive clause. `score` returns a value
where lower is better, so the passive set can be kept as a min-heap ordered by `(score, insertion
order)` for the `Fifo` heuristic's tie-breaking.

*/

use crate::core::clause::Clause;
use crate::core::config::ClauseEvalHeuristic;

/// Lower is picked first. `Fifo` ignores weight entirely and always returns the clause's insertion
/// index; `Weight` returns the clause's cached literal-weight sum; `UseWatchlist` prioritises clauses
/// matching the watchlist (`SubsumesWatchlist`) ahead of weight.
pub fn score(clause: &Clause, insertion_index: u64, heuristic: ClauseEvalHeuristic) -> u64 {
  match heuristic {
    ClauseEvalHeuristic::Fifo => insertion_index,
    ClauseEvalHeuristic::Weight => clause.weight as u64,
    ClauseEvalHeuristic::UseWatchlist => {
      let watchlist_bonus = if clause.properties.contains(crate::core::clause::ClauseProperty::SubsumesWatchlist) { 0 } else { 1 << 32 };
      watchlist_bonus + clause.weight as u64
    }
  }
}
