/*!

The three index structures used for candidate retrieval during saturation: the perfect
discrimination tree (`pdt`) for rewriting/subsumption/unification, the fingerprint index (`fingerprint`)
for paramodulation, and the feature-vector index (`feature_vector`) for clause subsumption.

*/

pub mod feature_vector;
pub mod fingerprint;
pub mod pdt;

use smallvec::SmallVec;

use crate::core::handles::ClauseId;
use crate::core::term::TermId;

/// Identifies one side of one literal of one clause — the unit of retrieval shared by all three
/// indices (a "clause-position" in the vocabulary of spec §3).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ClausePosition {
  pub clause: ClauseId,
  pub literal: u32,
  pub is_rhs: bool,
}

impl ClausePosition {
  pub fn new(clause: ClauseId, literal: u32, is_rhs: bool) -> Self {
    ClausePosition { clause, literal, is_rhs }
  }
}

pub type PositionVec = SmallVec<[ClausePosition; 2]>;

/// A term occurring at some clause-position, as stored by `pdt`/`fingerprint`.
#[derive(Copy, Clone)]
pub struct IndexedTerm {
  pub term: TermId,
  pub position: ClausePosition,
  /// The generation at which this entry's owning rule/equation was created; used for age pruning.
  pub rule_date: u64,
}
