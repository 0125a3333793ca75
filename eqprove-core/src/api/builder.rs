/*!

Accepts clauses already split into the core's data model — no formula parsing, no CNF conversion — and
turns them into a `ClauseSet` plus the `TermBank`/`SymbolTable` that back it. This is the
`cnf(name, role, literals, ...)` constructor named in the external-interface table (§6): a CNF
converter or parser (out of scope) calls `declare_sort`/`declare_symbol`/`term`/`variable` to build up
terms, then `clause` once per input clause, then `build` to hand the result to a `SaturationState`.

`fof(name, role, formula, ...)` formulas are out of scope entirely: CNF conversion happens upstream of
this crate, so only the already-clausal `cnf` surface is represented here.

*/

use eqprove_abs::HashMap;

use crate::core::clause::ClauseRole;
use crate::core::handles::{ClauseId, VariableIndex};
use crate::core::literal::{Literal, Sign};
use crate::core::ordering::Ocb;
use crate::core::sort::{SortId, SortTable};
use crate::core::symbol::{Arity, SymbolAttribute, SymbolAttributes, SymbolCore, SymbolId, SymbolTable};
use crate::core::term::{TermBank, TermId};

/// One not-yet-installed clause: a name (from the TPTP annotation), a role, and its literals.
pub struct NamedClause {
  pub name: String,
  pub role: ClauseRole,
  pub literals: Vec<Literal>,
}

/// A finished batch of named clauses, ready to be installed into a fresh `SaturationState`.
pub struct ClauseSet {
  pub clauses: Vec<NamedClause>,
}

impl ClauseSet {
  /// Installs every clause into `state`'s passive set, returning the `ClauseId` assigned to each
  /// input name. Clauses with `role == Watchlist` are accepted but not installed: the watchlist
  /// itself (subsumption-guided search, §6's `expert-heuristic UseWatchlist`) is not implemented by
  /// this core, so such entries are skipped rather than rejected.
  pub fn install(self, state: &mut crate::core::saturation::SaturationState) -> HashMap<String, ClauseId> {
    let mut ids = HashMap::default();
    for named in self.clauses {
      if named.role == ClauseRole::Watchlist {
        continue;
      }
      let literal_specs = named.literals.into_iter().map(|l| (l.lhs, l.rhs, l.sign)).collect();
      let id = state.add_clause(literal_specs, named.role);
      ids.insert(named.name, id);
    }
    ids
  }
}

/// Accumulates sorts, symbols, terms, and clauses ahead of a saturation run. Owns the `SortTable`,
/// `SymbolTable`, and `TermBank` it builds into; `build()` hands all three (bundled as `ClauseSet`
/// plus the bank and symbol table) to the caller, who passes the bank/symbols on to
/// `SaturationState::new` alongside a chosen `Ocb`.
///
/// Variable names are interned once per builder (not re-scoped per clause): two clauses that both
/// mention `X` share the same `VariableIndex`. A CNF converter that needs clause-local variable
/// scoping is expected to rename variables apart before calling `variable`, exactly as it already
/// must rename apart Skolem constants.
pub struct ClauseSetBuilder {
  pub sorts: SortTable,
  pub symbols: SymbolTable,
  pub bank: TermBank,
  variables: std::collections::HashMap<String, TermId>,
  next_variable: u32,
  clauses: Vec<NamedClause>,
  true_term: Option<TermId>,
}

impl ClauseSetBuilder {
  pub fn new() -> Self {
    let sorts = SortTable::new();
    let symbols = SymbolTable::new();
    let bank = TermBank::new(&symbols);
    ClauseSetBuilder {
      sorts,
      symbols,
      bank,
      variables: std::collections::HashMap::new(),
      next_variable: 0,
      clauses: Vec::new(),
      true_term: None,
    }
  }

  pub fn declare_sort(&mut self, name: &str) -> SortId {
    self.sorts.intern(name)
  }

  pub fn declare_symbol(&mut self, name: &str, arg_sorts: Vec<SortId>, result_sort: SortId, attrs: SymbolAttributes) -> SymbolId {
    let arity = Arity(arg_sorts.len() as u32);
    let symbol = self.symbols.declare(SymbolCore::new(eqprove_abs::IString::from(name), arity, arg_sorts, result_sort, attrs));
    // The bank's weight snapshot was taken in `new()`, before any symbol existed; every symbol
    // declared through this builder needs its weight copied in before terms over it are inserted.
    self.bank.refresh_symbol_weight(&self.symbols, symbol);
    symbol
  }

  pub fn term(&mut self, symbol: SymbolId, args: &[TermId]) -> TermId {
    self.bank.insert(symbol, args)
  }

  /// Returns the bank-resident term for the variable named `name`, interning a fresh
  /// `VariableIndex` the first time this name is seen.
  pub fn variable(&mut self, name: &str, sort: SortId) -> TermId {
    if let Some(&term) = self.variables.get(name) {
      return term;
    }
    let index = VariableIndex::new(self.next_variable);
    self.next_variable += 1;
    let term = self.bank.insert_variable(index, sort);
    self.variables.insert(name.to_string(), term);
    term
  }

  /// Returns the bank-resident `$true` term used to encode non-equational atoms as `P(args) ≃ $true`
  /// (spec.md §3), interning the `$true` symbol the first time it's needed. `$true`'s ordering weight
  /// is pinned to 0 so that every atom `P(args)` — whose symbol keeps the default weight of 1 — is
  /// KBO-greater than `$true`, keeping atom literals oriented.
  pub fn true_term(&mut self) -> TermId {
    if let Some(term) = self.true_term {
      return term;
    }
    let bool_sort = self.sorts.bool_sort();
    let symbol = self.declare_symbol("$true", vec![], bool_sort, SymbolAttribute::InterpretedConstant.into());
    self.symbols.get_mut(symbol).ordering_weight = 0;
    self.bank.refresh_symbol_weight(&self.symbols, symbol);
    let term = self.bank.insert(symbol, &[]);
    self.true_term = Some(term);
    term
  }

  /// Builds the literal encoding of a non-equational atom `symbol(args)`: `symbol(args) ≃ $true` if
  /// `sign == Positive`, `symbol(args) ≄ $true` if `sign == Negative`. `symbol` should have been
  /// declared with `SymbolAttribute::Predicate` and result sort `bool_sort()`, though this is not
  /// enforced here.
  pub fn atom(&mut self, ocb: &Ocb, symbol: SymbolId, args: &[TermId], sign: Sign) -> Option<Literal> {
    let atom_term = self.term(symbol, args);
    let true_term = self.true_term();
    Literal::new(&self.bank, ocb, atom_term, true_term, sign)
  }

  /// Builds a literal `lhs ≃ rhs` (`sign == Positive`) or `lhs ≄ rhs` (`sign == Negative`). Returns
  /// `None` if the literal is the syntactic tautology `l ≃ l`, eliminated at construction time per
  /// spec.md §3's literal invariant — the caller simply omits it from the clause's literal list.
  pub fn equation(&self, ocb: &crate::core::ordering::Ocb, lhs: TermId, rhs: TermId, sign: Sign) -> Option<Literal> {
    Literal::new(&self.bank, ocb, lhs, rhs, sign)
  }

  /// Appends one named clause. `literals` should already have tautological equations filtered out
  /// by the caller via `equation`.
  pub fn clause(&mut self, name: impl Into<String>, role: ClauseRole, literals: Vec<Literal>) -> &mut Self {
    self.clauses.push(NamedClause { name: name.into(), role, literals });
    self
  }

  pub fn len(&self) -> usize {
    self.clauses.len()
  }

  pub fn is_empty(&self) -> bool {
    self.clauses.is_empty()
  }

  /// Consumes the builder, returning the finished clause set and the bank/symbol table it was built
  /// against. The caller passes `bank`/`symbols` on to `SaturationState::new` together with an
  /// `Ocb` built over the same `SymbolTable`.
  pub fn build(self) -> (ClauseSet, TermBank, SymbolTable) {
    (ClauseSet { clauses: self.clauses }, self.bank, self.symbols)
  }
}
