/*!

Plain configuration data handed to the core by a CLI layer (out of scope for this crate). Nothing here
parses text; a caller is expected to turn already-parsed flags into a `ProverConfig` and pass it by
reference into `SaturationState::new`.

*/

use std::time::Instant;

use crate::core::saturation::SaturationOutcome;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OrderingKind {
  #[default]
  Kbo,
  Kbo6,
  Lpo,
  Lpo4,
  Auto,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum WeightGenMethod {
  #[default]
  Constant,
  ArityBased,
  Auto,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum PrecedenceGenMethod {
  #[default]
  Arity,
  ByFirstOccurrence,
  Auto,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum LiteralSelectionStrategy {
  NoSelection,
  SelectNegativeLiterals,
  PSelectNegativeLiterals,
  SelectLargestNegativeLiteral,
  SelectSmallestNegativeLiteral,
  #[default]
  SelectComplex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ClauseEvalHeuristic {
  #[default]
  Weight,
  Fifo,
  UseWatchlist,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SplitMethod {
  #[default]
  None,
  Ground,
  Variable,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SimplificationToggles {
  pub destructive_er: bool,
  pub forward_context_sr: bool,
  pub backward_context_sr: bool,
}

impl Default for SimplificationToggles {
  fn default() -> Self {
    SimplificationToggles { destructive_er: true, forward_context_sr: true, backward_context_sr: true }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SubsumptionIndexing {
  None,
  Direct,
  #[default]
  Perm,
  PermOpt,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FingerprintIndexKind {
  Fp7,
  #[default]
  Fp6,
  Fp4,
  NoIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ResourceLimits {
  pub processed_clauses_limit: Option<u64>,
  pub total_clause_set_limit: Option<u64>,
  pub cpu_limit: Option<u64>,
  pub soft_cpu_limit: Option<u64>,
  pub memory_limit: Option<u64>,
}

/// Which resource was exhausted, carried by `SaturationOutcome::ResourceOut` and `ProverError::ResourceLimitExceeded`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ResourceLimit {
  Cpu,
  Memory,
  ProcessedClauses,
  TotalClauseSet,
}

/// Soft/hard wall-clock deadlines, checked once per outer saturation-loop iteration.
#[derive(Copy, Clone, Debug, Default)]
pub struct Deadline {
  pub soft: Option<Instant>,
  pub hard: Option<Instant>,
}

impl Deadline {
  pub fn hard_expired(&self, now: Instant) -> bool {
    matches!(self.hard, Some(t) if now >= t)
  }

  pub fn soft_expired(&self, now: Instant) -> bool {
    matches!(self.soft, Some(t) if now >= t)
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ProverConfig {
  pub ordering_kind: OrderingKind,
  pub weight_gen: WeightGenMethod,
  pub precedence_gen: PrecedenceGenMethod,
  pub literal_selection: LiteralSelectionStrategy,
  pub clause_eval: ClauseEvalHeuristic,
  pub split_method: SplitMethod,
  pub simplification: SimplificationToggles,
  pub subsumption_indexing: SubsumptionIndexing,
  pub fp_index: FingerprintIndexKind,
  pub pm_from_index: FingerprintIndexKind,
  pub pm_into_index: FingerprintIndexKind,
  pub rw_bw_index: FingerprintIndexKind,
  pub resource_limits: ResourceLimits,
}

/// Process exit codes per the external-interface table: 0 proof, 1 resource-out, 2 gave up, 3 saturated.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i32)]
pub enum ExitCode {
  Proof = 0,
  ResourceOut = 1,
  GaveUp = 2,
  Saturated = 3,
}

impl From<&SaturationOutcome> for ExitCode {
  fn from(outcome: &SaturationOutcome) -> Self {
    match outcome {
      SaturationOutcome::Proof(_) => ExitCode::Proof,
      SaturationOutcome::Saturated => ExitCode::Saturated,
      SaturationOutcome::GaveUp => ExitCode::GaveUp,
      SaturationOutcome::ResourceOut(_) => ExitCode::ResourceOut,
    }
  }
}
