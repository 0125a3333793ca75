/*!

Global counters, carried as a plain value threaded through the saturation context rather than as
process-wide statics. There is exactly one `Stats` per `SaturationState`.

*/

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Stats {
  pub clauses_processed: u64,
  pub clauses_generated: u64,
  pub subsumption_checks: u64,
  pub unification_attempts: u64,
  pub rewrite_steps: u64,
  pub forward_subsumed: u64,
  pub backward_subsumed: u64,
  pub tautologies_deleted: u64,
}
