/*!

Arena handle types. Terms, symbols, sorts, and clauses are owned by `Vec`-backed arenas (`TermBank`,
`SymbolTable`, `SortTable`, the processed/unprocessed clause sets) and referred to by these `Copy`
index types rather than by pointer, per the memory-management redesign: no raw pointers, no garbage
collector, the arena is simply dropped at the end of a proof search.

A handle's validity is scoped to the arena that produced it. Handles are never shared across two
different `TermBank`s without going through `TermBank::copy_into`.

*/

use std::fmt::{Display, Formatter};

use eqprove_abs::special_index::{OuterEnumType, SpecialIndex};

/// The single sentinel value shared by every handle type: an explicit "no handle" marker, distinct
/// from any valid arena index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Sentinel {
  None,
}

impl Display for Sentinel {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "None")
  }
}

impl TryFrom<u8> for Sentinel {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Sentinel::None),
      _ => Err(()),
    }
  }
}

macro_rules! implement_sentinel_for {
  ($ty:ty) => {
    impl TryFrom<$ty> for Sentinel {
      type Error = ();

      fn try_from(value: $ty) -> Result<Self, Self::Error> {
        u8::try_from(value).ok().and_then(|v| v.try_into().ok()).ok_or(())
      }
    }

    impl From<Sentinel> for $ty {
      fn from(value: Sentinel) -> Self {
        value as u8 as $ty
      }
    }

    impl OuterEnumType<$ty> for Sentinel {}
  };
}

implement_sentinel_for!(u32);

/// A hash-consed term within a single `TermBank`.
pub type TermId = SpecialIndex<u32, Sentinel, 1>;
/// A symbol within a single `SymbolTable`.
pub type SymbolId = SpecialIndex<u32, Sentinel, 1>;
/// A sort within a single `SortTable`.
pub type SortIdHandle = SpecialIndex<u32, Sentinel, 1>;
/// A clause within the clause arena (processed, unprocessed, or archived).
pub type ClauseId = SpecialIndex<u32, Sentinel, 1>;
/// The position of a variable's binding slot within a `Substitution`.
pub type VariableIndex = SpecialIndex<u32, Sentinel, 1>;

pub const NONE: Sentinel = Sentinel::None;
