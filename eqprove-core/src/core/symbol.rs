/*!

The symbol table maps identifiers to function codes and tracks each symbol's arity, sort signature,
and property flags (predicate, AC, commutative, skolem, associative, interpreted-constant). Symbols
are dense, arena-owned, and addressed by `SymbolId`; equality of two symbols is equality of their ids.

*/

use enumflags2::{bitflags, BitFlags};

use eqprove_abs::IString;

use crate::core::sort::SortId;

pub use crate::core::handles::SymbolId;

#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SymbolAttribute {
  /// A symbol of result sort `$o` whose occurrences are encoded as `P(args) ≃ $true`.
  Predicate,
  Associative,
  Commutative,
  /// Fresh Skolem constants/functions introduced ahead of the core (e.g. by CNF conversion).
  Skolem,
  /// A 0-ary symbol standing for an interpreted value (numeral, string literal); never rewritten.
  InterpretedConstant,
}

pub type SymbolAttributes = BitFlags<SymbolAttribute, u16>;

/// A symbol's arity. `$true`/`$false` and other 0-ary symbols use `Value(0)`; ordinary first-order
/// function and predicate symbols always carry a fixed, known arity (no variadic/unspecified forms,
/// unlike a rewriting engine's operator declarations).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Ord, PartialOrd)]
pub struct Arity(pub u32);

impl Arity {
  pub fn as_numeric(&self) -> u32 {
    self.0
  }
}

pub struct SymbolCore {
  pub name: IString,
  pub arity: Arity,
  pub attributes: SymbolAttributes,
  pub arg_sorts: Vec<SortId>,
  pub result_sort: SortId,
  /// Per-symbol weight and precedence used by the term ordering; set by weight/precedence
  /// generation (`ProverConfig::weight_gen`/`precedence_gen`) before saturation starts.
  pub ordering_weight: u32,
  pub precedence: u32,
}

impl SymbolCore {
  pub fn new(name: IString, arity: Arity, arg_sorts: Vec<SortId>, result_sort: SortId, attributes: SymbolAttributes) -> Self {
    debug_assert_eq!(arity.0 as usize, arg_sorts.len());
    SymbolCore { name, arity, attributes, arg_sorts, result_sort, ordering_weight: 1, precedence: 0 }
  }

  pub fn is_predicate(&self) -> bool {
    self.attributes.contains(SymbolAttribute::Predicate)
  }

  pub fn is_variadic_theory(&self) -> bool {
    self.attributes.intersects(SymbolAttribute::Associative | SymbolAttribute::Commutative)
  }
}

/// Dense arena of symbols, addressed by `SymbolId`. Also interns the `$true`/`$false` predicate
/// constants used to encode non-equational atoms.
#[derive(Default)]
pub struct SymbolTable {
  symbols: Vec<SymbolCore>,
}

impl SymbolTable {
  pub fn new() -> Self {
    SymbolTable { symbols: Vec::new() }
  }

  pub fn declare(&mut self, symbol: SymbolCore) -> SymbolId {
    let id = SymbolId::new(self.symbols.len() as u32);
    self.symbols.push(symbol);
    id
  }

  pub fn get(&self, id: SymbolId) -> &SymbolCore {
    &self.symbols[id.idx()]
  }

  pub fn get_mut(&mut self, id: SymbolId) -> &mut SymbolCore {
    &mut self.symbols[id.idx()]
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &SymbolCore)> {
    self.symbols.iter().enumerate().map(|(i, s)| (SymbolId::new(i as u32), s))
  }
}
