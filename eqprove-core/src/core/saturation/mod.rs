/*!

The given-clause saturation loop and its supporting pieces: heuristic clause scoring (`heuristic`),
literal selection (`selection`), and the loop itself (`loop_`).

*/

pub mod heuristic;
pub mod loop_;
pub mod selection;

pub use loop_::SaturationState;

use crate::core::config::ResourceLimit;
use crate::core::handles::ClauseId;

/// How a saturation run ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SaturationOutcome {
  /// The empty clause was derived; the id names it so the caller can walk its derivation record.
  Proof(ClauseId),
  /// The passive set emptied without deriving the empty clause.
  Saturated,
  /// A configured resource limit, or the hard deadline, was hit.
  ResourceOut(ResourceLimit),
  /// The soft deadline was hit with clauses still in the passive set.
  GaveUp,
}
