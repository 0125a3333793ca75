/*!

`SaturationState` owns every arena and index the given-clause algorithm needs and drives the main
loop: pick the best passive clause, simplify it against the active set, check it for redundancy, add
what survives to active, generate its inferences, and repeat. One state is used for exactly one proof
attempt; there is no reuse across runs.

*/

use std::time::Instant;

use eqprove_abs::log::{debug, info, trace};

use crate::core::clause::{Clause, ClauseProperty, ClauseRole, DerivationRecord};
use crate::core::config::{Deadline, ProverConfig, ResourceLimit};
use crate::core::handles::ClauseId;
use crate::core::index::fingerprint::{FingerprintIndex, RetrievalMode};
use crate::core::index::{feature_vector, ClausePosition, IndexedTerm};
use crate::core::inference::{self, equality_factoring, equality_resolution, nonvariable_positions, superposition, term_at};
use crate::core::literal::{Literal, Sign};
use crate::core::ordering::Ocb;
use crate::core::rewrite::RewriteIndex;
use crate::core::saturation::heuristic;
use crate::core::saturation::selection::{mark_maximal, select};
use crate::core::saturation::SaturationOutcome;
use crate::core::stats::Stats;
use crate::core::subsumption::{simplify_reflect, subsumes};
use crate::core::symbol::SymbolTable;
use crate::core::term::{TermBank, TermId};

pub struct SaturationState {
  pub bank: TermBank,
  pub symbols: SymbolTable,
  pub ocb: Ocb,
  pub config: ProverConfig,
  pub stats: Stats,

  clauses: Vec<Clause>,
  active: Vec<ClauseId>,
  passive: Vec<(ClauseId, u64)>,
  /// Active positive unit clauses, tracked separately so superposing an active rule into a freshly
  /// selected given clause doesn't require scanning the whole active set.
  unit_equations: Vec<ClauseId>,

  rewrite_index: RewriteIndex,
  fp_index: FingerprintIndex,
  fv_index: feature_vector::FeatureVectorIndex,

  date: u64,
  insertion_counter: u64,
}

impl SaturationState {
  pub fn new(bank: TermBank, symbols: SymbolTable, ocb: Ocb, config: ProverConfig) -> Self {
    SaturationState {
      bank,
      symbols,
      ocb,
      config,
      stats: Stats::default(),
      clauses: Vec::new(),
      active: Vec::new(),
      passive: Vec::new(),
      unit_equations: Vec::new(),
      rewrite_index: RewriteIndex::new(),
      fp_index: FingerprintIndex::new(),
      fv_index: feature_vector::FeatureVectorIndex::new(),
      date: 0,
      insertion_counter: 0,
    }
  }

  pub fn clause(&self, id: ClauseId) -> &Clause {
    &self.clauses[id.idx()]
  }

  /// Every non-deleted clause currently in the active set, i.e. the final processed set once `run`
  /// has returned. Diagnostic/test introspection only — the saturation loop itself never needs to
  /// enumerate the whole active set, since `active`/`unit_equations` already carry what it needs.
  pub fn active_clauses(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
    self.active.iter().map(|&id| (id, &self.clauses[id.idx()]))
  }

  /// Admits a clause built from already-bank-resident literal specs into the passive set, as the
  /// input axioms and the negated conjecture are before saturation starts.
  pub fn add_clause(&mut self, literal_specs: Vec<(TermId, TermId, Sign)>, role: ClauseRole) -> ClauseId {
    let literals: Vec<Literal> = literal_specs.into_iter().filter_map(|(l, r, sign)| Literal::new(&self.bank, &self.ocb, l, r, sign)).collect();
    self.insert_clause(Clause::new(literals, role, DerivationRecord::initial()))
  }

  fn insert_clause(&mut self, clause: Clause) -> ClauseId {
    let id = ClauseId::new(self.clauses.len() as u32);
    let priority = heuristic::score(&clause, self.insertion_counter, self.config.clause_eval);
    self.insertion_counter += 1;
    self.clauses.push(clause);
    self.passive.push((id, priority));
    id
  }

  fn pop_best_passive(&mut self) -> Option<ClauseId> {
    let (best_pos, _) = self.passive.iter().enumerate().min_by_key(|(_, (_, priority))| *priority)?;
    Some(self.passive.remove(best_pos).0)
  }

  fn register_active(&mut self, id: ClauseId) {
    let clause = &self.clauses[id.idx()];
    let vector = feature_vector::compute(&self.bank, clause);
    self.fv_index.insert(id, vector);

    for (lit_idx, literal) in clause.literals.iter().enumerate() {
      for (is_rhs, side) in [(false, literal.lhs), (true, literal.rhs)] {
        for position in nonvariable_positions(&self.bank, side) {
          let Some(subterm) = term_at(&self.bank, side, &position) else { continue };
          self.fp_index.insert(
            &self.bank,
            IndexedTerm { term: subterm, position: ClausePosition::new(id, lit_idx as u32, is_rhs), rule_date: self.date },
          );
        }
      }
    }

    if clause.is_unit() && clause.literals[0].sign == Sign::Positive {
      let literal = clause.literals[0];
      let greater = literal.greater_side(&self.bank, &self.ocb);
      let smaller = if greater == literal.lhs { literal.rhs } else { literal.lhs };
      self.rewrite_index.insert(&self.bank, greater, smaller, id, 0, self.date);
      self.unit_equations.push(id);
    }

    self.active.push(id);
  }

  fn forget_active(&mut self, id: ClauseId) {
    self.active.retain(|&c| c != id);
    self.unit_equations.retain(|&c| c != id);
    self.fv_index.delete(id);
    self.rewrite_index.delete(id, 0);
    self.fp_index.delete_clause(id);
    self.clauses[id.idx()].mark_deleted();
  }

  /// The positive unit equations currently active, as plain literals — the rule set `simplify_reflect`
  /// checks candidate negative literals against.
  fn active_units(&self) -> Vec<Literal> {
    self.unit_equations.iter().map(|&id| self.clauses[id.idx()].literals[0]).collect()
  }

  fn is_tautology(&self, clause: &Clause) -> bool {
    clause.literals.iter().enumerate().any(|(i, l1)| {
      clause.literals.iter().skip(i + 1).any(|l2| {
        l1.sign != l2.sign && ((l1.lhs == l2.lhs && l1.rhs == l2.rhs) || (l1.lhs == l2.rhs && l1.rhs == l2.lhs))
      })
    })
  }

  fn demodulate_clause(&mut self, clause: &Clause) -> (Clause, bool) {
    let mut any_rewrite = false;
    let literals: Vec<Literal> = clause
      .literals
      .iter()
      .filter_map(|l| {
        let (lhs, r1) = self.rewrite_index.normalize(&mut self.bank, &self.ocb, l.lhs, self.date, crate::core::rewrite::MAX_REWRITE_STEPS);
        let (rhs, r2) = self.rewrite_index.normalize(&mut self.bank, &self.ocb, l.rhs, self.date, crate::core::rewrite::MAX_REWRITE_STEPS);
        any_rewrite |= r1 || r2;
        Literal::new(&self.bank, &self.ocb, lhs, rhs, l.sign)
      })
      .collect();
    (Clause::new(literals, clause.role, clause.derivation.clone()), any_rewrite)
  }

  fn forward_subsumed(&self, candidate: &Clause) -> bool {
    let vector = feature_vector::compute(&self.bank, candidate);
    self.fv_index.candidates_le(&vector).into_iter().any(|id| subsumes(&self.bank, &self.ocb, self.clause(id), candidate))
  }

  fn backward_subsumed_clauses(&self, given: &Clause) -> Vec<ClauseId> {
    let vector = feature_vector::compute(&self.bank, given);
    self.fv_index.candidates_ge(&vector).into_iter().filter(|&id| subsumes(&self.bank, &self.ocb, given, self.clause(id))).collect()
  }

  fn superposition_candidates(&self, given_lhs: TermId) -> Vec<ClauseId> {
    let mut ids: Vec<ClauseId> = self
      .fp_index
      .retrieve(&self.bank, given_lhs, RetrievalMode::Unify)
      .into_iter()
      .map(|e| e.position.clause)
      .filter(|&id| !self.clauses[id.idx()].is_deleted())
      .collect();
    ids.sort_by_key(|c| c.idx());
    ids.dedup();
    ids
  }

  /// Generates every child of `given` via the three rules of §4.9: equality resolution and equality
  /// factoring within `given` alone, and superposition between `given` and every other active
  /// clause, tried with `given` as both the "from" (equation) side and the "into" (rewritten) side —
  /// spec.md's "superposition between G and each eligible processed clause" names no direction, so
  /// both run. The "given as from" direction uses the fingerprint index to narrow candidates to
  /// active clauses that actually contain a unifiable subterm; the "active as from" direction walks
  /// the (typically much smaller) active set directly.
  fn generate(&mut self, given_id: ClauseId) -> Vec<Clause> {
    let given = self.clauses[given_id.idx()].clone();
    let mut generated = Vec::new();

    generated.extend(equality_resolution(&mut self.bank, &self.ocb, given_id, &given));
    generated.extend(equality_factoring(&mut self.bank, &self.ocb, given_id, &given));

    for literal in given.literals.iter().filter(|l| l.sign == Sign::Positive && l.properties.contains(crate::core::literal::LiteralProperty::Maximal)) {
      let lhs = literal.greater_side(&self.bank, &self.ocb);
      for into_id in self.superposition_candidates(lhs) {
        if into_id == given_id {
          continue;
        }
        let into_clause = self.clauses[into_id.idx()].clone();
        generated.extend(superposition(&mut self.bank, &self.ocb, given_id, &given, into_id, &into_clause));
      }
    }

    for &active_id in &self.active.clone() {
      if active_id == given_id {
        continue;
      }
      let active_clause = self.clauses[active_id.idx()].clone();
      generated.extend(inference::superposition(&mut self.bank, &self.ocb, active_id, &active_clause, given_id, &given));
    }

    generated
  }

  /// Runs the given-clause loop to completion, checking `deadline` once per iteration.
  pub fn run(&mut self, deadline: &Deadline) -> SaturationOutcome {
    info!(clauses = self.passive.len(), "starting saturation");
    loop {
      let now = Instant::now();
      if deadline.hard_expired(now) {
        info!(clauses_processed = self.stats.clauses_processed, "hard deadline expired");
        return SaturationOutcome::ResourceOut(ResourceLimit::Cpu);
      }
      if let Some(limit) = self.config.resource_limits.processed_clauses_limit {
        if self.stats.clauses_processed >= limit {
          info!(limit, "processed-clauses resource limit reached");
          return SaturationOutcome::ResourceOut(ResourceLimit::ProcessedClauses);
        }
      }
      if let Some(limit) = self.config.resource_limits.total_clause_set_limit {
        if self.clauses.len() as u64 >= limit {
          info!(limit, "total-clause-set resource limit reached");
          return SaturationOutcome::ResourceOut(ResourceLimit::TotalClauseSet);
        }
      }

      let Some(given_id) = self.pop_best_passive() else {
        info!(clauses_processed = self.stats.clauses_processed, "passive set empty, saturated");
        return SaturationOutcome::Saturated;
      };
      if deadline.soft_expired(now) {
        debug!("soft deadline expired, giving up with clauses still passive");
        self.passive.push((given_id, 0));
        return SaturationOutcome::GaveUp;
      }

      self.date += 1;
      self.stats.clauses_processed += 1;
      trace!(given = given_id.idx(), "processing given clause");

      let (mut demodulated, rewrote) = self.demodulate_clause(&self.clauses[given_id.idx()].clone());
      if rewrote {
        self.stats.rewrite_steps += 1;
      }
      if simplify_reflect(&self.bank, &self.active_units(), &mut demodulated) {
        self.stats.rewrite_steps += 1;
      }
      if demodulated.is_empty_clause() {
        let id = self.insert_clause(demodulated);
        info!(clause = id.idx(), clauses_processed = self.stats.clauses_processed, "empty clause derived");
        return SaturationOutcome::Proof(id);
      }
      if self.is_tautology(&demodulated) {
        self.stats.tautologies_deleted += 1;
        trace!(given = given_id.idx(), "discarding tautology");
        continue;
      }

      self.stats.subsumption_checks += 1;
      if self.forward_subsumed(&demodulated) {
        self.stats.forward_subsumed += 1;
        trace!(given = given_id.idx(), "discarding forward-subsumed clause");
        continue;
      }

      let mut given = demodulated;
      mark_maximal(&self.bank, &self.ocb, &mut given);
      select(&mut given, self.config.literal_selection);
      given.properties |= ClauseProperty::Processed;
      self.clauses[given_id.idx()] = given;

      for subsumed_id in self.backward_subsumed_clauses(&self.clauses[given_id.idx()]) {
        self.forget_active(subsumed_id);
        self.stats.backward_subsumed += 1;
      }

      self.register_active(given_id);

      for new_clause in self.generate(given_id) {
        self.stats.clauses_generated += 1;
        if new_clause.is_empty_clause() {
          let id = self.insert_clause(new_clause);
          info!(clause = id.idx(), clauses_processed = self.stats.clauses_processed, "empty clause derived");
          return SaturationOutcome::Proof(id);
        }
        self.insert_clause(new_clause);
      }
    }
  }
}
